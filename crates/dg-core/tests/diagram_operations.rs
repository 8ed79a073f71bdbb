//! Integration tests: diagram model + operation factory (dg-core).
//!
//! Exercises the factory and the compound container through the public API
//! only, the way the editor crate drives them.

use dg_core::*;
use pretty_assertions::assert_eq;

fn class_diagram() -> (Diagram, ElementId, ElementId, ElementId) {
    let mut diagram = Diagram::new();
    let order = ElementId::intern("it_order");
    let line = ElementId::intern("it_line_item");
    let contains = ElementId::intern("it_contains");

    diagram
        .add_node(
            DiagramNode::new(
                order,
                NodeKind::Class {
                    name: "Order".into(),
                },
            )
            .at(150.0, 150.0),
        )
        .unwrap();
    diagram
        .add_node(
            DiagramNode::new(
                line,
                NodeKind::Class {
                    name: "LineItem".into(),
                },
            )
            .at(400.0, 400.0),
        )
        .unwrap();
    diagram
        .restore_edge(Edge::new(contains, EdgeKind::Association), order, line)
        .unwrap();

    (diagram, order, line, contains)
}

// ─── Factory ─────────────────────────────────────────────────────────────

#[test]
fn factory_output_is_reversible() {
    let (mut diagram, order, _, _) = class_diagram();
    let op = diagram
        .builder()
        .create_move_node_operation(order, 70, 270)
        .unwrap();

    op.execute(&mut diagram);
    assert_eq!(diagram.node(order).unwrap().position, Point::new(220.0, 420.0));
    op.undo(&mut diagram);
    assert_eq!(diagram.node(order).unwrap().position, Point::new(150.0, 150.0));
}

#[test]
fn factory_rejects_edges() {
    let (diagram, _, _, contains) = class_diagram();
    assert_eq!(
        diagram.builder().create_move_node_operation(contains, 1, 1),
        Err(DiagramError::UnknownNode(contains))
    );
}

// ─── Compound ────────────────────────────────────────────────────────────

#[test]
fn compound_round_trip_restores_every_node() {
    let (mut diagram, order, line, _) = class_diagram();
    let mut compound = CompoundOperation::new();
    {
        let builder = diagram.builder();
        compound.add(builder.create_move_node_operation(order, 20, 20).unwrap());
        compound.add(builder.create_move_node_operation(line, -40, 0).unwrap());
        compound.add(builder.create_move_node_operation(order, 0, 5).unwrap());
    }

    compound.execute(&mut diagram);
    assert_eq!(diagram.node(order).unwrap().position, Point::new(170.0, 175.0));
    assert_eq!(diagram.node(line).unwrap().position, Point::new(360.0, 400.0));

    compound.undo(&mut diagram);
    assert_eq!(diagram.node(order).unwrap().position, Point::new(150.0, 150.0));
    assert_eq!(diagram.node(line).unwrap().position, Point::new(400.0, 400.0));
}

#[test]
fn edges_follow_endpoints_without_geometry() {
    let (mut diagram, order, line, contains) = class_diagram();
    diagram.translate_node(order, 10.0, 10.0).unwrap();
    assert_eq!(diagram.edge_endpoints(contains), Some((order, line)));
    assert_eq!(diagram.edges().count(), 1);
}
