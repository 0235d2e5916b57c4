//! nf-graph: graph-construction layer for nodeflow.
//!
//! Provides:
//! - Core graph data structures (Graph, OpNode, Port, AttrValue)
//! - Short-lived operation descriptors with validation on finish
//! - Constant tensors backing `Const` nodes
//!
//! # Example
//!
//! ```
//! use nf_core::DType;
//! use nf_graph::{Graph, Port};
//!
//! let mut graph = Graph::new();
//! let x = graph.constant("x", nf_graph::Tensor::scalar_i32(3)).unwrap();
//! let y = graph.constant("y", nf_graph::Tensor::scalar_i32(4)).unwrap();
//! let sum = graph
//!     .new_operation("Add", "Add_0")
//!     .set_attr_type("T", DType::Int32)
//!     .add_input(Port::output(x))
//!     .add_input(Port::output(y))
//!     .finish()
//!     .unwrap();
//!
//! assert_eq!(graph.op(sum).unwrap().op_type, "Add");
//! assert_eq!(graph.len(), 3);
//! ```

pub mod attr;
pub mod describe;
pub mod error;
pub mod graph;
pub mod tensor;

// Re-exports for ergonomics
pub use attr::AttrValue;
pub use describe::OpDescription;
pub use error::GraphError;
pub use graph::{Graph, OpNode, Port};
pub use tensor::Tensor;
