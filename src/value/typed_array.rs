//! Typed numeric arrays.
//!
//! Each variant carries its own element type, so two arrays with the same
//! bytes but different element kinds are different values.

use alloc::vec::Vec;

use crate::error::ValueError;

/// Element type of a [`TypedArray`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypedArrayKind {
    /// `i8` elements.
    Int8,
    /// `u8` elements.
    Uint8,
    /// `u8` elements with clamping stores.
    Uint8Clamped,
    /// `i16` elements.
    Int16,
    /// `u16` elements.
    Uint16,
    /// `i32` elements.
    Int32,
    /// `u32` elements.
    Uint32,
    /// `f32` elements.
    Float32,
    /// `f64` elements.
    Float64,
    /// `i64` elements.
    BigInt64,
    /// `u64` elements.
    BigUint64,
}

impl TypedArrayKind {
    /// Bytes per element.
    pub const fn element_width(self) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Uint8Clamped => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Float64 | Self::BigInt64 | Self::BigUint64 => 8,
        }
    }

    /// Host constructor name, e.g. `"Float32Array"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "Int8Array",
            Self::Uint8 => "Uint8Array",
            Self::Uint8Clamped => "Uint8ClampedArray",
            Self::Int16 => "Int16Array",
            Self::Uint16 => "Uint16Array",
            Self::Int32 => "Int32Array",
            Self::Uint32 => "Uint32Array",
            Self::Float32 => "Float32Array",
            Self::Float64 => "Float64Array",
            Self::BigInt64 => "BigInt64Array",
            Self::BigUint64 => "BigUint64Array",
        }
    }
}

/// Typed numeric array.
#[derive(Clone, Debug)]
pub enum TypedArray {
    /// `Int8Array`.
    Int8(Vec<i8>),
    /// `Uint8Array`.
    Uint8(Vec<u8>),
    /// `Uint8ClampedArray`.
    Uint8Clamped(Vec<u8>),
    /// `Int16Array`.
    Int16(Vec<i16>),
    /// `Uint16Array`.
    Uint16(Vec<u16>),
    /// `Int32Array`.
    Int32(Vec<i32>),
    /// `Uint32Array`.
    Uint32(Vec<u32>),
    /// `Float32Array`.
    Float32(Vec<f32>),
    /// `Float64Array`.
    Float64(Vec<f64>),
    /// `BigInt64Array`.
    BigInt64(Vec<i64>),
    /// `BigUint64Array`.
    BigUint64(Vec<u64>),
}

/// Decode little-endian elements of one numeric type.
macro_rules! decode {
    ($bytes:expr, $ty:ty) => {
        $bytes
            .chunks_exact(core::mem::size_of::<$ty>())
            .map(|chunk| {
                let mut raw = [0u8; core::mem::size_of::<$ty>()];
                raw.copy_from_slice(chunk);
                <$ty>::from_le_bytes(raw)
            })
            .collect()
    };
}

impl TypedArray {
    /// Element type.
    pub fn kind(&self) -> TypedArrayKind {
        match self {
            Self::Int8(_) => TypedArrayKind::Int8,
            Self::Uint8(_) => TypedArrayKind::Uint8,
            Self::Uint8Clamped(_) => TypedArrayKind::Uint8Clamped,
            Self::Int16(_) => TypedArrayKind::Int16,
            Self::Uint16(_) => TypedArrayKind::Uint16,
            Self::Int32(_) => TypedArrayKind::Int32,
            Self::Uint32(_) => TypedArrayKind::Uint32,
            Self::Float32(_) => TypedArrayKind::Float32,
            Self::Float64(_) => TypedArrayKind::Float64,
            Self::BigInt64(_) => TypedArrayKind::BigInt64,
            Self::BigUint64(_) => TypedArrayKind::BigUint64,
        }
    }

    /// Element count.
    pub fn len(&self) -> usize {
        match self {
            Self::Int8(v) => v.len(),
            Self::Uint8(v) | Self::Uint8Clamped(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::Uint16(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Uint32(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::BigInt64(v) => v.len(),
            Self::BigUint64(v) => v.len(),
        }
    }

    /// `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View a little-endian byte buffer as elements of `kind`.
    pub fn from_bytes(kind: TypedArrayKind, bytes: &[u8]) -> Result<Self, ValueError> {
        let width = kind.element_width();
        if bytes.len() % width != 0 {
            return Err(ValueError::MisalignedTypedArray { len: bytes.len(), width });
        }
        Ok(match kind {
            TypedArrayKind::Int8 => Self::Int8(bytes.iter().map(|&b| b as i8).collect()),
            TypedArrayKind::Uint8 => Self::Uint8(bytes.to_vec()),
            TypedArrayKind::Uint8Clamped => Self::Uint8Clamped(bytes.to_vec()),
            TypedArrayKind::Int16 => Self::Int16(decode!(bytes, i16)),
            TypedArrayKind::Uint16 => Self::Uint16(decode!(bytes, u16)),
            TypedArrayKind::Int32 => Self::Int32(decode!(bytes, i32)),
            TypedArrayKind::Uint32 => Self::Uint32(decode!(bytes, u32)),
            TypedArrayKind::Float32 => Self::Float32(decode!(bytes, f32)),
            TypedArrayKind::Float64 => Self::Float64(decode!(bytes, f64)),
            TypedArrayKind::BigInt64 => Self::BigInt64(decode!(bytes, i64)),
            TypedArrayKind::BigUint64 => Self::BigUint64(decode!(bytes, u64)),
        })
    }
}
