//! nf-core: stable foundation for nodeflow.
//!
//! Contains:
//! - ids (stable compact handles for graph nodes)
//! - dtype (element datatype enumeration)
//! - error (shared error types)

pub mod dtype;
pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use dtype::DType;
pub use error::{NfError, NfResult};
pub use ids::*;
