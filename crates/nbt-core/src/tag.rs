//! Wire tags: the one-byte discriminator written before every named entry
//! and once per List to declare its element kind.

use serde::Serialize;
use std::fmt;

/// Tag byte that terminates a Compound. Never the kind of a value.
pub const TAG_END: u8 = 0;

/// The 12 value kinds of the NBT wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Tag {
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl Tag {
    /// Map a wire byte to its kind. Returns `None` for `TAG_END` and for
    /// anything above 12.
    pub fn from_byte(byte: u8) -> Option<Tag> {
        let tag = match byte {
            1 => Tag::Byte,
            2 => Tag::Short,
            3 => Tag::Int,
            4 => Tag::Long,
            5 => Tag::Float,
            6 => Tag::Double,
            7 => Tag::ByteArray,
            8 => Tag::String,
            9 => Tag::List,
            10 => Tag::Compound,
            11 => Tag::IntArray,
            12 => Tag::LongArray,
            _ => return None,
        };
        Some(tag)
    }

    /// The byte written on the wire for this kind.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Canonical `TAG_*` name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
            Tag::LongArray => "TAG_Long_Array",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
