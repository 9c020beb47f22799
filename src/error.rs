//! Errors raised while building values.
//!
//! Comparison itself never fails: a mismatch is simply `false`. Only the
//! constructors and mutators of the [`crate::value`] model can reject input.

use alloc::string::String;

use thiserror::Error;

/// Failure to construct or mutate a [`crate::Value`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A regular-expression flag outside `dgimsuvy`.
    #[error("invalid regular expression flag `{0}`")]
    InvalidRegExpFlag(char),

    /// A regular-expression flag given more than once.
    #[error("duplicate regular expression flag `{0}`")]
    DuplicateRegExpFlag(char),

    /// Only booleans, numbers and strings have boxed forms.
    #[error("{0} values cannot be boxed")]
    NotBoxable(&'static str),

    /// A byte buffer that does not divide evenly into typed-array elements.
    #[error("{len} bytes is not a multiple of the {width}-byte element width")]
    MisalignedTypedArray {
        /// Buffer length in bytes.
        len: usize,
        /// Element width in bytes.
        width: usize,
    },

    /// Redefinition of a property whose `configurable` flag is clear.
    #[error("property `{0}` is not configurable")]
    NonConfigurableProperty(String),

    /// Assignment to a property whose `writable` flag is clear.
    #[error("property `{0}` is not writable")]
    NonWritableProperty(String),

    /// Array operation on a non-array object.
    #[error("object is not an array")]
    NotAnArray,

    /// Map operation on a non-map object.
    #[error("object is not a map")]
    NotAMap,

    /// Set operation on a non-set object.
    #[error("object is not a set")]
    NotASet,
}
