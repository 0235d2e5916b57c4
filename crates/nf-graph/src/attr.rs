//! Typed attribute values attached to operation nodes.

use nf_core::DType;

use crate::tensor::Tensor;

/// One attribute value, matching the typed setters on `OpDescription`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AttrValue {
    /// Element datatype (e.g., the "T" attribute).
    Type(DType),
    /// Boolean flag (e.g., "transpose_a").
    Bool(bool),
    /// Integer scalar (e.g., "dim").
    Int(i64),
    /// Constant tensor payload (the "value" attribute of a `Const` node).
    Tensor(Tensor),
}

impl AttrValue {
    pub fn as_type(&self) -> Option<DType> {
        match self {
            AttrValue::Type(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_tensor(&self) -> Option<&Tensor> {
        match self {
            AttrValue::Tensor(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(AttrValue::Type(DType::Float).as_type(), Some(DType::Float));
        assert_eq!(AttrValue::Bool(false).as_bool(), Some(false));
        assert_eq!(AttrValue::Int(7).as_int(), Some(7));
        assert_eq!(AttrValue::Int(7).as_bool(), None);
        assert!(AttrValue::Tensor(Tensor::scalar_i32(1)).as_tensor().is_some());
    }
}
