use core::fmt;

/// Element datatype carried by node attributes and constant tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DType {
    Float,
    Double,
    Int32,
    Int64,
    Bool,
}

impl DType {
    /// Size of one element of this type, in bytes.
    pub fn size_of(self) -> usize {
        match self {
            DType::Float => 4,
            DType::Double => 8,
            DType::Int32 => 4,
            DType::Int64 => 8,
            DType::Bool => 1,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::Float => "float",
            DType::Double => "double",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Bool => "bool",
        };
        write!(f, "{name}")
    }
}
