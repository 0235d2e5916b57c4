//! Core graph data structures.

use std::collections::HashSet;

use nf_core::{NfResult, OpId};

use crate::attr::AttrValue;
use crate::describe::OpDescription;
use crate::tensor::Tensor;

/// A positional input: one output port of an existing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Port {
    /// Source node.
    pub op: OpId,
    /// Which of the source node's outputs to read.
    pub index: u32,
}

impl Port {
    /// The primary (index 0) output of a node.
    pub fn output(op: OpId) -> Self {
        Self { op, index: 0 }
    }
}

/// A single operation node registered in a graph.
///
/// Nodes are immutable once appended: type, name, inputs, and attributes
/// are all fixed by the descriptor that produced them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpNode {
    pub id: OpId,
    /// Operation type name (e.g., "Add", "MatMul").
    pub op_type: String,
    /// Graph-unique node name.
    pub name: String,
    /// Positional inputs, in the order they were attached.
    pub inputs: Vec<Port>,
    /// Attributes, in the order they were set.
    pub attrs: Vec<(String, AttrValue)>,
    /// Number of output ports this node exposes.
    pub outputs: u32,
}

impl OpNode {
    /// Look up an attribute by key.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// The graph: a mutable, append-only container of operation nodes.
///
/// The graph is owned by the caller, never by the builders that append
/// to it. Nodes are never removed, so an `OpId` handed out once stays
/// valid for the graph's whole lifetime.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Graph {
    pub(crate) ops: Vec<OpNode>,
    /// Node names seen so far, for uniqueness checks on finish.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) names: HashSet<String>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a descriptor for a new operation node.
    ///
    /// Nothing is appended until `finish()` succeeds; dropping the
    /// descriptor abandons the node and leaves the graph unchanged.
    pub fn new_operation(
        &mut self,
        op_type: impl Into<String>,
        name: impl Into<String>,
    ) -> OpDescription<'_> {
        OpDescription::new(self, op_type.into(), name.into())
    }

    /// Append a `Const` node holding the given tensor.
    pub fn constant(&mut self, name: impl Into<String>, tensor: Tensor) -> NfResult<OpId> {
        let dtype = tensor.dtype();
        self.new_operation("Const", name)
            .set_attr_type("dtype", dtype)
            .set_attr_tensor("value", tensor)
            .finish()
    }

    /// Return all nodes, in append order.
    pub fn ops(&self) -> &[OpNode] {
        &self.ops
    }

    /// Get a node by handle (returns None if the handle is out of bounds).
    pub fn op(&self, id: OpId) -> Option<&OpNode> {
        self.ops.get(id.index() as usize)
    }

    /// Find a node by its graph-unique name.
    pub fn op_by_name(&self, name: &str) -> Option<&OpNode> {
        self.ops.iter().find(|op| op.name == name)
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
