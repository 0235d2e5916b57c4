//! nf-ops: math operation builders for nodeflow graphs.
//!
//! Provides:
//! - `MathOps`: one builder method per supported primitive (add, matmul,
//!   matmul_add, reduce_mean, equal, argmax, cast, log), each appending
//!   one node to a caller-owned graph and returning its handle
//! - `OpNamer`: per-type counters generating collision-free node names
//!
//! # Example
//!
//! ```
//! use nf_graph::{Graph, Tensor};
//! use nf_ops::MathOps;
//!
//! let mut graph = Graph::new();
//! let mut ops = MathOps::new();
//!
//! let x = graph.constant("x", Tensor::from_f32(vec![1, 2], &[1.0, 2.0]).unwrap()).unwrap();
//! let w = graph.constant("w", Tensor::from_f32(vec![2, 2], &[1.0, 0.0, 0.0, 1.0]).unwrap()).unwrap();
//! let b = graph.constant("b", Tensor::from_f32(vec![2], &[0.5, 0.5]).unwrap()).unwrap();
//!
//! let y = ops.matmul_add(&mut graph, x, w, b).unwrap();
//! assert_eq!(graph.op(y).unwrap().op_type, "Add");
//! ```

pub mod math;
pub mod namer;

// Re-exports for ergonomics
pub use math::MathOps;
pub use namer::OpNamer;
