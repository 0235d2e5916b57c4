//! Constant tensors backing `Const` nodes.

use nf_core::{DType, NfResult};

use crate::error::GraphError;

/// A small constant tensor: dtype, dims, and an owned byte buffer.
///
/// The buffer is owned outright and freed on drop; nothing outside the
/// graph ever holds a pointer into it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tensor {
    dtype: DType,
    dims: Vec<i64>,
    data: Vec<u8>,
}

impl Tensor {
    /// Create a tensor, checking the buffer length against dtype and dims.
    ///
    /// An empty `dims` means a scalar (one element).
    pub fn new(dtype: DType, dims: Vec<i64>, data: Vec<u8>) -> NfResult<Self> {
        let mut elems: usize = 1;
        for &dim in &dims {
            if dim < 0 {
                return Err(GraphError::InvalidDim { dim }.into());
            }
            elems = elems
                .checked_mul(dim as usize)
                .ok_or(GraphError::TensorOverflow)?;
        }
        let expected = elems
            .checked_mul(dtype.size_of())
            .ok_or(GraphError::TensorOverflow)?;
        if data.len() != expected {
            return Err(GraphError::TensorSize {
                expected,
                actual: data.len(),
            }
            .into());
        }
        Ok(Self { dtype, dims, data })
    }

    /// Scalar Int32 tensor (the reduction-axis shape: no dims, one element).
    pub fn scalar_i32(value: i32) -> Self {
        Self {
            dtype: DType::Int32,
            dims: Vec::new(),
            data: value.to_le_bytes().to_vec(),
        }
    }

    /// Float tensor from a value slice.
    pub fn from_f32(dims: Vec<i64>, values: &[f32]) -> NfResult<Self> {
        let mut data = Vec::with_capacity(values.len() * 4);
        for v in values {
            data.extend_from_slice(&v.to_le_bytes());
        }
        Self::new(DType::Float, dims, data)
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of elements (product of dims; 1 for a scalar).
    pub fn num_elements(&self) -> usize {
        self.dims.iter().map(|&d| d as usize).product()
    }

    /// Read back a scalar Int32 tensor's value (None if dtype or shape differ).
    pub fn as_scalar_i32(&self) -> Option<i32> {
        if self.dtype != DType::Int32 || self.num_elements() != 1 {
            return None;
        }
        let bytes: [u8; 4] = self.data.get(..4)?.try_into().ok()?;
        Some(i32::from_le_bytes(bytes))
    }
}
