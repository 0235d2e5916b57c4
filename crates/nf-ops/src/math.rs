//! Builders for the supported math primitives.

use nf_core::{DType, NfResult, OpId};
use nf_graph::{Graph, OpDescription, Port, Tensor};
use tracing::{debug, warn};

use crate::namer::OpNamer;

/// Appends math operation nodes to a caller-owned graph.
///
/// Holds only the name counters; the graph itself is passed into every
/// call, so one `MathOps` can serve several graphs in turn (names stay
/// unique as long as a graph isn't shared between namers).
///
/// Every method returns the new node's handle, or an error if the
/// underlying descriptor failed to finalize. Failures leave the graph
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct MathOps {
    namer: OpNamer,
}

impl MathOps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elementwise addition: `Add(l, r)`, float.
    pub fn add(&mut self, graph: &mut Graph, l: OpId, r: OpId) -> NfResult<OpId> {
        let name = self.namer.unique("Add");
        let desc = graph
            .new_operation("Add", name)
            .set_attr_type("T", DType::Float)
            .add_input(Port::output(l))
            .add_input(Port::output(r));
        finish("Add", desc)
    }

    /// 2D matrix product: `MatMul(l, r)`, float, no transposition.
    pub fn matmul(&mut self, graph: &mut Graph, l: OpId, r: OpId) -> NfResult<OpId> {
        let name = self.namer.unique("MatMul");
        let desc = graph
            .new_operation("MatMul", name)
            .set_attr_type("T", DType::Float)
            .add_input(Port::output(l))
            .add_input(Port::output(r))
            .set_attr_bool("transpose_a", false)
            .set_attr_bool("transpose_b", false);
        finish("MatMul", desc)
    }

    /// Convenience composite: `Add(MatMul(l, r), a)`.
    pub fn matmul_add(&mut self, graph: &mut Graph, l: OpId, r: OpId, a: OpId) -> NfResult<OpId> {
        let product = self.matmul(graph, l, r)?;
        self.add(graph, product, a)
    }

    /// Mean reduction over axis 1: `Mean(v, axis)`, float.
    ///
    /// Inserts the reduction axis as an Int32 scalar `Const` node first,
    /// then the `Mean` node consuming `v` and the constant.
    pub fn reduce_mean(&mut self, graph: &mut Graph, v: OpId) -> NfResult<OpId> {
        let axis_name = self.namer.unique("Const");
        let axis = graph.constant(axis_name, Tensor::scalar_i32(1))?;

        let name = self.namer.unique("ReduceMean");
        let desc = graph
            .new_operation("Mean", name)
            .set_attr_type("T", DType::Float)
            .add_input(Port::output(v))
            .add_input(Port::output(axis));
        finish("Mean", desc)
    }

    /// Elementwise equality: `Equal(l, r)`, float operands.
    pub fn equal(&mut self, graph: &mut Graph, l: OpId, r: OpId) -> NfResult<OpId> {
        let name = self.namer.unique("Equal");
        let desc = graph
            .new_operation("Equal", name)
            .set_attr_type("T", DType::Float)
            .add_input(Port::output(l))
            .add_input(Port::output(r));
        finish("Equal", desc)
    }

    /// Index of the maximum along `dim`: `ArgMax(v)`, int32.
    ///
    /// `dim` is a scalar attribute on the node, not a graph input.
    pub fn argmax(&mut self, graph: &mut Graph, v: OpId, dim: i64) -> NfResult<OpId> {
        let name = self.namer.unique("ArgMax");
        let desc = graph
            .new_operation("ArgMax", name)
            .set_attr_type("T", DType::Int32)
            .add_input(Port::output(v))
            .set_attr_int("dim", dim);
        finish("ArgMax", desc)
    }

    /// Datatype conversion: `Cast(v)` to `dtype`.
    ///
    /// "T" is pinned to Int64; the requested target goes in the "dtype"
    /// attribute, matching the behavior this builder reproduces.
    pub fn cast(&mut self, graph: &mut Graph, v: OpId, dtype: DType) -> NfResult<OpId> {
        let name = self.namer.unique("Cast");
        let desc = graph
            .new_operation("Cast", name)
            .set_attr_type("T", DType::Int64)
            .add_input(Port::output(v))
            .set_attr_type("dtype", dtype);
        finish("Cast", desc)
    }

    /// Elementwise natural logarithm: `Log(v)`, float.
    pub fn log(&mut self, graph: &mut Graph, v: OpId) -> NfResult<OpId> {
        let name = self.namer.unique("Log");
        let desc = graph
            .new_operation("Log", name)
            .set_attr_type("T", DType::Float)
            .add_input(Port::output(v));
        finish("Log", desc)
    }
}

/// Finalize a descriptor, logging the outcome either way.
fn finish(op_type: &'static str, desc: OpDescription<'_>) -> NfResult<OpId> {
    match desc.finish() {
        Ok(id) => {
            debug!(op = op_type, node = %id, "appended graph node");
            Ok(id)
        }
        Err(err) => {
            warn!(op = op_type, error = %err, "graph node construction failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_graph::AttrValue;

    fn float_leaf(graph: &mut Graph, name: &str) -> OpId {
        graph
            .constant(name, Tensor::from_f32(vec![2, 2], &[1.0, 2.0, 3.0, 4.0]).unwrap())
            .unwrap()
    }

    #[test]
    fn add_sets_float_type() {
        let mut graph = Graph::new();
        let mut ops = MathOps::new();
        let l = float_leaf(&mut graph, "l");
        let r = float_leaf(&mut graph, "r");

        let id = ops.add(&mut graph, l, r).unwrap();
        let node = graph.op(id).unwrap();
        assert_eq!(node.op_type, "Add");
        assert_eq!(node.attr("T").and_then(AttrValue::as_type), Some(DType::Float));
        assert_eq!(node.inputs, vec![Port::output(l), Port::output(r)]);
    }

    #[test]
    fn matmul_disables_transposition() {
        let mut graph = Graph::new();
        let mut ops = MathOps::new();
        let l = float_leaf(&mut graph, "l");
        let r = float_leaf(&mut graph, "r");

        let id = ops.matmul(&mut graph, l, r).unwrap();
        let node = graph.op(id).unwrap();
        assert_eq!(node.attr("transpose_a").and_then(AttrValue::as_bool), Some(false));
        assert_eq!(node.attr("transpose_b").and_then(AttrValue::as_bool), Some(false));
    }

    #[test]
    fn argmax_dim_is_attribute_not_input() {
        let mut graph = Graph::new();
        let mut ops = MathOps::new();
        let v = float_leaf(&mut graph, "v");

        let id = ops.argmax(&mut graph, v, 1).unwrap();
        let node = graph.op(id).unwrap();
        assert_eq!(node.inputs.len(), 1);
        assert_eq!(node.attr("dim").and_then(AttrValue::as_int), Some(1));
        assert_eq!(node.attr("T").and_then(AttrValue::as_type), Some(DType::Int32));
    }

    #[test]
    fn failure_propagates_and_leaves_graph_unchanged() {
        let mut graph = Graph::new();
        let mut ops = MathOps::new();
        let dangling = OpId::from_index(42);

        let before = graph.len();
        assert!(ops.log(&mut graph, dangling).is_err());
        assert_eq!(graph.len(), before);
    }
}
