//! Short-lived operation descriptors.

use std::collections::HashSet;

use nf_core::{DType, NfResult, OpId};

use crate::attr::AttrValue;
use crate::error::GraphError;
use crate::graph::{Graph, OpNode, Port};
use crate::tensor::Tensor;

/// Write-once builder for a single new operation node.
///
/// Created by `Graph::new_operation`, consumed by `finish`. The
/// exclusive borrow of the graph means a descriptor can neither escape
/// the call that opened it nor interleave with other mutations.
///
/// Setters are infallible; all validation happens at `finish`, the one
/// fallible step, matching the finalize-then-check protocol of the
/// underlying model.
#[derive(Debug)]
pub struct OpDescription<'g> {
    graph: &'g mut Graph,
    op_type: String,
    name: String,
    inputs: Vec<Port>,
    attrs: Vec<(String, AttrValue)>,
}

impl<'g> OpDescription<'g> {
    pub(crate) fn new(graph: &'g mut Graph, op_type: String, name: String) -> Self {
        Self {
            graph,
            op_type,
            name,
            inputs: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Set an element-datatype attribute (e.g., "T").
    pub fn set_attr_type(mut self, key: impl Into<String>, dtype: DType) -> Self {
        self.attrs.push((key.into(), AttrValue::Type(dtype)));
        self
    }

    /// Set a boolean attribute (e.g., "transpose_a").
    pub fn set_attr_bool(mut self, key: impl Into<String>, value: bool) -> Self {
        self.attrs.push((key.into(), AttrValue::Bool(value)));
        self
    }

    /// Set an integer attribute (e.g., "dim").
    pub fn set_attr_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.attrs.push((key.into(), AttrValue::Int(value)));
        self
    }

    /// Set a constant-tensor attribute (the "value" of a `Const` node).
    pub fn set_attr_tensor(mut self, key: impl Into<String>, tensor: Tensor) -> Self {
        self.attrs.push((key.into(), AttrValue::Tensor(tensor)));
        self
    }

    /// Attach one positional input. Order of attachment is the input order.
    pub fn add_input(mut self, port: Port) -> Self {
        self.inputs.push(port);
        self
    }

    /// Validate and append the node, returning its handle.
    ///
    /// On error nothing is appended and the graph is unchanged.
    pub fn finish(self) -> NfResult<OpId> {
        if self.op_type.is_empty() {
            return Err(GraphError::EmptyOpType.into());
        }
        if self.name.is_empty() {
            return Err(GraphError::EmptyName.into());
        }
        if self.graph.names.contains(&self.name) {
            return Err(GraphError::DuplicateName { name: self.name }.into());
        }

        // Attributes are write-once per descriptor.
        let mut seen = HashSet::new();
        for (key, _) in &self.attrs {
            if !seen.insert(key.as_str()) {
                return Err(GraphError::DuplicateAttr { key: key.clone() }.into());
            }
        }

        // Every input must name an existing node and an in-range output port.
        for (i, port) in self.inputs.iter().enumerate() {
            match self.graph.op(port.op) {
                None => {
                    return Err(GraphError::UnknownInput {
                        input: i,
                        op: port.op,
                    }
                    .into());
                }
                Some(src) if port.index >= src.outputs => {
                    return Err(GraphError::PortOutOfRange {
                        input: i,
                        op: port.op,
                        port: port.index,
                        outputs: src.outputs,
                    }
                    .into());
                }
                Some(_) => {}
            }
        }

        let id = OpId::from_index(self.graph.ops.len() as u32);
        self.graph.names.insert(self.name.clone());
        self.graph.ops.push(OpNode {
            id,
            op_type: self.op_type,
            name: self.name,
            inputs: self.inputs,
            attrs: self.attrs,
            outputs: 1,
        });
        Ok(id)
    }
}
