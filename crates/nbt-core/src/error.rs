//! Error types for NBT reading and writing operations.

use crate::tag::Tag;
use thiserror::Error;

/// Errors that can occur while building, reading or writing an NBT document.
#[derive(Error, Debug)]
pub enum NbtError {
    /// A read needed more bytes than the input had left (decoding path).
    /// `offset` is the absolute position in the input where the read started.
    #[error("read of {needed} bytes at offset {offset} exceeds input ({remaining} remaining)")]
    Bounds {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A typed accessor or a `List::push` saw a different kind than requested.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Tag, found: Tag },

    /// Invalid modified UTF-8. `offset` is the byte position of the offending
    /// sequence (absolute in the input when raised by the reader).
    #[error("malformed input around byte {offset}: {reason}")]
    MalformedText { offset: usize, reason: &'static str },

    /// A string or name encodes to more than 65535 bytes.
    #[error("encoded string is {len} bytes, limit is 65535")]
    StringTooLong { len: usize },

    /// An array or List has more elements than a signed 32-bit count holds.
    #[error("{len} elements do not fit a 32-bit count")]
    CountOverflow { len: usize },

    /// A tag byte outside 1..=12 where a value tag was expected.
    #[error("unknown tag {tag} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    /// `List` indexing past the last element.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Compound/List nesting deeper than `Config::max_depth`.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimit { limit: usize },

    /// The underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NbtError {
    /// Shift the offset of a position-carrying error by `base` bytes.
    /// Used to turn offsets relative to a sub-slice into absolute ones.
    pub(crate) fn offset_by(self, base: usize) -> Self {
        match self {
            NbtError::MalformedText { offset, reason } => NbtError::MalformedText {
                offset: offset + base,
                reason,
            },
            other => other,
        }
    }
}

/// Convenience alias used throughout nbt-core.
pub type Result<T> = std::result::Result<T, NbtError>;
