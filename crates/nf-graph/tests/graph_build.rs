//! Integration tests for nf-graph.

use nf_core::DType;
use nf_graph::{AttrValue, Graph, Port, Tensor};

#[test]
fn build_small_expression() {
    // Build: Add(x, y) where x and y are constants
    let mut graph = Graph::new();
    let x = graph.constant("x", Tensor::scalar_i32(3)).unwrap();
    let y = graph.constant("y", Tensor::scalar_i32(4)).unwrap();

    let sum = graph
        .new_operation("Add", "Add_0")
        .set_attr_type("T", DType::Int32)
        .add_input(Port::output(x))
        .add_input(Port::output(y))
        .finish()
        .unwrap();

    assert_eq!(graph.len(), 3);

    let node = graph.op(sum).unwrap();
    assert_eq!(node.op_type, "Add");
    assert_eq!(node.name, "Add_0");
    assert_eq!(node.inputs.len(), 2);
    assert_eq!(node.inputs[0].op, x);
    assert_eq!(node.inputs[1].op, y);
    assert_eq!(node.attr("T").and_then(AttrValue::as_type), Some(DType::Int32));
}

#[test]
fn handles_stay_valid_as_graph_grows() {
    let mut graph = Graph::new();
    let first = graph.constant("c0", Tensor::scalar_i32(0)).unwrap();

    for i in 1..100 {
        graph
            .constant(format!("c{i}"), Tensor::scalar_i32(i))
            .unwrap();
    }

    assert_eq!(graph.len(), 100);
    // The first handle still resolves to the same node.
    assert_eq!(graph.op(first).unwrap().name, "c0");
}

#[test]
fn failed_finish_is_not_observable() {
    let mut graph = Graph::new();
    let a = graph.constant("a", Tensor::scalar_i32(1)).unwrap();

    // Duplicate name fails...
    assert!(graph.constant("a", Tensor::scalar_i32(2)).is_err());

    // ...and the graph looks exactly as before.
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.op(a).unwrap().name, "a");

    // A fresh name still works afterwards.
    assert!(graph.constant("b", Tensor::scalar_i32(2)).is_ok());
}

#[test]
fn chained_ops_compose_through_handles() {
    // Build: Neg(Add(a, b)) by passing the Add handle on
    let mut graph = Graph::new();
    let a = graph.constant("a", Tensor::scalar_i32(1)).unwrap();
    let b = graph.constant("b", Tensor::scalar_i32(2)).unwrap();

    let sum = graph
        .new_operation("Add", "Add_0")
        .set_attr_type("T", DType::Int32)
        .add_input(Port::output(a))
        .add_input(Port::output(b))
        .finish()
        .unwrap();

    let neg = graph
        .new_operation("Neg", "Neg_0")
        .set_attr_type("T", DType::Int32)
        .add_input(Port::output(sum))
        .finish()
        .unwrap();

    let node = graph.op(neg).unwrap();
    assert_eq!(node.inputs, vec![Port::output(sum)]);
}
