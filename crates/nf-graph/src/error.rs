//! Graph-specific error types.

use nf_core::{NfError, OpId};

/// Errors raised while finalizing an operation descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The descriptor was opened with an empty operation type.
    EmptyOpType,

    /// The descriptor was opened with an empty node name.
    EmptyName,

    /// Another node in the graph already carries this name.
    DuplicateName { name: String },

    /// A positional input references a node the graph doesn't contain.
    UnknownInput { input: usize, op: OpId },

    /// A positional input references an output port the source node doesn't have.
    PortOutOfRange {
        input: usize,
        op: OpId,
        port: u32,
        outputs: u32,
    },

    /// The same attribute key was set twice on one descriptor.
    DuplicateAttr { key: String },

    /// A tensor's byte buffer doesn't match its dtype and dims.
    TensorSize { expected: usize, actual: usize },

    /// A tensor's element count or byte size exceeds addressable memory.
    TensorOverflow,

    /// A tensor dimension is negative.
    InvalidDim { dim: i64 },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::EmptyOpType => {
                write!(f, "Operation type must be non-empty")
            }
            GraphError::EmptyName => {
                write!(f, "Node name must be non-empty")
            }
            GraphError::DuplicateName { name } => {
                write!(f, "Node name '{}' already exists in the graph", name)
            }
            GraphError::UnknownInput { input, op } => {
                write!(f, "Input {} refers to non-existent node {}", input, op)
            }
            GraphError::PortOutOfRange {
                input,
                op,
                port,
                outputs,
            } => {
                write!(
                    f,
                    "Input {} refers to output port {} of node {} which has {} outputs",
                    input, port, op, outputs
                )
            }
            GraphError::DuplicateAttr { key } => {
                write!(f, "Attribute '{}' set more than once", key)
            }
            GraphError::TensorSize { expected, actual } => {
                write!(
                    f,
                    "Tensor buffer holds {} bytes but dtype and dims require {}",
                    actual, expected
                )
            }
            GraphError::TensorOverflow => {
                write!(f, "Tensor element count or byte size overflows usize")
            }
            GraphError::InvalidDim { dim } => {
                write!(f, "Tensor dimension {} is negative", dim)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for NfError {
    fn from(err: GraphError) -> Self {
        NfError::Construction {
            message: err.to_string(),
        }
    }
}
