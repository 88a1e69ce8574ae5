//! NBT Reader — decodes the binary wire format into a [`Compound`].
//!
//! The top level is read as a run of named entries, stopping at the end of
//! the input or at the first end tag, and collected into one Compound. A
//! normal document therefore comes back as `{ name: <document> }`.
//!
//! # Key design decisions
//!
//! - **Bounds before reads**: every read goes through [`ByteCursor::take`],
//!   which checks the remaining length first, so truncated input fails with
//!   `Bounds` and never indexes past the slice.
//! - **Counts are checked against the input**: array bodies are taken as one
//!   slice of `count * width` bytes before anything is allocated, and List
//!   capacity is capped by the bytes left, so a forged count cannot trigger a
//!   huge allocation.
//! - **Depth limit**: Compound/List recursion is bounded by
//!   `Config::max_depth`.
//! - **Nothing borrowed**: decoded strings and arrays are copied out; the
//!   input is not referenced once `parse` returns.

use crate::compound::Compound;
use crate::config::Config;
use crate::error::{NbtError, Result};
use crate::list::List;
use crate::mutf8;
use crate::primitive::Primitive;
use crate::tag::{Tag, TAG_END};
use crate::value::Value;
use std::io::Read;
use tracing::{debug, trace};

/// Decodes documents according to a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Reader {
    config: Config,
}

impl Reader {
    /// A reader using `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse a complete document held in memory.
    pub fn parse(&self, data: &[u8]) -> Result<Compound> {
        let mut decoder = Decoder {
            cursor: ByteCursor::new(data),
            max_depth: self.config.max_depth,
        };
        let root = decoder.top_level()?;
        debug!(
            consumed = decoder.cursor.position(),
            total = data.len(),
            entries = root.len(),
            "parsed NBT document"
        );
        Ok(self.unwrap_root(root))
    }

    /// Parse a document from a stream, reading it to the end first.
    pub fn parse_reader<R: Read>(&self, mut input: R) -> Result<Compound> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;
        self.parse(&data)
    }

    fn unwrap_root(&self, mut root: Compound) -> Compound {
        if !self.config.root_tag || root.len() != 1 {
            return root;
        }
        match root.take("") {
            Some(Value::Compound(inner)) => {
                trace!(entries = inner.len(), "unwrapped anonymous root compound");
                inner
            }
            Some(other) => {
                root.insert("", other);
                root
            }
            None => root,
        }
    }
}

/// Forward-only view over the input with checked reads.
struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(NbtError::Bounds {
                offset: self.pos,
                needed,
                remaining,
            });
        }
        let bytes = &self.data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(bytes)
    }

    fn byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read<T: Primitive>(&mut self) -> Result<T> {
        Ok(T::from_be_slice(self.take(T::SIZE)?))
    }
}

struct Decoder<'a> {
    cursor: ByteCursor<'a>,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    /// Entries until input exhaustion or an end tag.
    fn top_level(&mut self) -> Result<Compound> {
        let mut root = Compound::new();
        while !self.cursor.is_empty() {
            let at = self.cursor.position();
            let byte = self.cursor.byte()?;
            if byte == TAG_END {
                break;
            }
            let tag = value_tag(byte, at)?;
            let name = self.string()?;
            let value = self.payload(tag, 0)?;
            root.insert(name, value);
        }
        Ok(root)
    }

    fn string(&mut self) -> Result<String> {
        let len = usize::from(self.cursor.read::<u16>()?);
        let start = self.cursor.position();
        let bytes = self.cursor.take(len)?;
        mutf8::decode(bytes).map_err(|e| e.offset_by(start))
    }

    /// Signed 4-byte count; negative counts mean empty.
    fn count(&mut self) -> Result<usize> {
        let count = self.cursor.read::<i32>()?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn array<T: Primitive>(&mut self) -> Result<Vec<T>> {
        let count = self.count()?;
        let bytes = self.cursor.take(count.saturating_mul(T::SIZE))?;
        Ok(bytes.chunks_exact(T::SIZE).map(T::from_be_slice).collect())
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(NbtError::DepthLimit {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    /// `depth` is the nesting level of the container holding this payload.
    fn payload(&mut self, tag: Tag, depth: usize) -> Result<Value> {
        let value = match tag {
            Tag::Byte => Value::Byte(self.cursor.read()?),
            Tag::Short => Value::Short(self.cursor.read()?),
            Tag::Int => Value::Int(self.cursor.read()?),
            Tag::Long => Value::Long(self.cursor.read()?),
            Tag::Float => Value::Float(self.cursor.read()?),
            Tag::Double => Value::Double(self.cursor.read()?),
            Tag::ByteArray => Value::ByteArray(self.array()?),
            Tag::String => Value::String(self.string()?),
            Tag::List => Value::List(self.list(depth + 1)?),
            Tag::Compound => Value::Compound(self.compound(depth + 1)?),
            Tag::IntArray => Value::IntArray(self.array()?),
            Tag::LongArray => Value::LongArray(self.array()?),
        };
        Ok(value)
    }

    fn compound(&mut self, depth: usize) -> Result<Compound> {
        self.enter(depth)?;
        let mut compound = Compound::new();
        loop {
            let at = self.cursor.position();
            let byte = self.cursor.byte()?;
            if byte == TAG_END {
                return Ok(compound);
            }
            let tag = value_tag(byte, at)?;
            let name = self.string()?;
            let value = self.payload(tag, depth)?;
            compound.insert(name, value);
        }
    }

    fn list(&mut self, depth: usize) -> Result<List> {
        self.enter(depth)?;
        let at = self.cursor.position();
        let byte = self.cursor.byte()?;
        let count = self.count()?;

        // Element tag 0 is only meaningful for an empty list.
        if byte == TAG_END && count == 0 {
            return Ok(List::from_decoded(None, Vec::new()));
        }
        let element = value_tag(byte, at)?;

        let mut items = Vec::with_capacity(count.min(self.cursor.remaining()));
        for _ in 0..count {
            items.push(self.payload(element, depth)?);
        }
        Ok(List::from_decoded(Some(element), items))
    }
}

fn value_tag(byte: u8, offset: usize) -> Result<Tag> {
    Tag::from_byte(byte).ok_or(NbtError::UnknownTag { tag: byte, offset })
}
