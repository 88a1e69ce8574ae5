//! The NBT value model.
//!
//! A [`Value`] is a Rust enum, so exactly one kind is active at a time and the
//! compiler drops the previous payload whenever a value is reassigned
//! (`*value = Value::from(..)`). Accessors are checked: asking for a kind other
//! than the active one is a `TypeMismatch`, never a reinterpretation.

use crate::compound::Compound;
use crate::error::{NbtError, Result};
use crate::list::List;
use crate::tag::Tag;
use serde::Serialize;

/// A single NBT value of one of the 12 wire kinds.
///
/// Serializes through serde as its bare payload (numbers, strings,
/// sequences, maps) so documents can be dumped to JSON for inspection.
///
/// Equality compares floats by bit pattern, so a value holding NaN equals
/// itself and survives a write/parse cycle unchanged. `0.0` and `-0.0` are
/// therefore distinct.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::ByteArray(a), Value::ByteArray(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Compound(a), Value::Compound(b)) => a == b,
            (Value::IntArray(a), Value::IntArray(b)) => a == b,
            (Value::LongArray(a), Value::LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// The kind currently held.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    fn mismatch(&self, expected: Tag) -> NbtError {
        NbtError::TypeMismatch {
            expected,
            found: self.tag(),
        }
    }
}

macro_rules! scalar_accessors {
    ($($fn_name:ident => $variant:ident($ty:ty)),* $(,)?) => {
        impl Value {
            $(
                #[doc = concat!("The held `", stringify!($ty), "`, or `TypeMismatch`.")]
                pub fn $fn_name(&self) -> Result<$ty> {
                    match self {
                        Value::$variant(v) => Ok(*v),
                        other => Err(other.mismatch(Tag::$variant)),
                    }
                }
            )*
        }
    };
}

macro_rules! ref_accessors {
    ($($fn_name:ident, $fn_mut:ident => $variant:ident($ty:ty)),* $(,)?) => {
        impl Value {
            $(
                #[doc = concat!("Borrow the held `", stringify!($ty), "`, or `TypeMismatch`.")]
                pub fn $fn_name(&self) -> Result<&$ty> {
                    match self {
                        Value::$variant(v) => Ok(v),
                        other => Err(other.mismatch(Tag::$variant)),
                    }
                }

                #[doc = concat!("Mutably borrow the held `", stringify!($ty), "`, or `TypeMismatch`.")]
                pub fn $fn_mut(&mut self) -> Result<&mut $ty> {
                    match self {
                        Value::$variant(v) => Ok(v),
                        other => Err(other.mismatch(Tag::$variant)),
                    }
                }
            )*
        }
    };
}

scalar_accessors! {
    as_byte => Byte(i8),
    as_short => Short(i16),
    as_int => Int(i32),
    as_long => Long(i64),
    as_float => Float(f32),
    as_double => Double(f64),
}

ref_accessors! {
    as_byte_array, as_byte_array_mut => ByteArray(Vec<i8>),
    as_string, as_string_mut => String(String),
    as_list, as_list_mut => List(List),
    as_compound, as_compound_mut => Compound(Compound),
    as_int_array, as_int_array_mut => IntArray(Vec<i32>),
    as_long_array, as_long_array_mut => LongArray(Vec<i64>),
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    List => List,
    Compound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}
