//! NBT Writer — encodes a [`Compound`] into the binary wire format.
//!
//! A document is written as one named Compound entry:
//!
//! ```text
//! [10] [name len: u16] [name] [entries ...] [0]   [0]
//!  tag                         payload     end   root end
//! ```
//!
//! Each entry inside a Compound is `(tag, name, payload)`; List elements are
//! payloads only, after a single element tag and a 4-byte count. With
//! `Config::root_tag` the whole thing is nested inside an anonymous Compound.
//!
//! All output goes through [`Sink`], so [`Writer::encoded_len`] runs the very
//! same walk as [`Writer::write`] with a byte counter in place of a buffer.
//!
//! # Example
//! ```
//! use nbt_core::{Compound, Writer, Config};
//!
//! let mut level = Compound::new();
//! level.insert("byteTest", 127i8);
//!
//! let writer = Writer::new(Config::default());
//! let bytes = writer.write_to_vec(&level, "Level").unwrap();
//! assert_eq!(bytes.len(), writer.encoded_len(&level, "Level").unwrap());
//! ```

use crate::compound::Compound;
use crate::config::Config;
use crate::error::{NbtError, Result};
use crate::list::List;
use crate::mutf8;
use crate::sink::{IoSink, Sink, SizeCounter};
use crate::tag::{Tag, TAG_END};
use crate::value::Value;
use std::io::{BufWriter, Write};
use tracing::debug;

/// Encodes documents according to a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Writer {
    config: Config,
}

impl Writer {
    /// A writer using `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Write `compound` as a document named `name` to `out`, then flush it.
    ///
    /// Output is buffered internally, so `out` may be an unbuffered `File`
    /// or socket.
    pub fn write<W: Write>(&self, out: W, compound: &Compound, name: &str) -> Result<()> {
        let mut sink = IoSink::new(BufWriter::new(out));
        self.encode_document(&mut sink, compound, name)?;
        sink.into_inner().flush()?;
        Ok(())
    }

    /// Encode `compound` as a document named `name` into a buffer sized
    /// exactly by [`Writer::encoded_len`].
    pub fn write_to_vec(&self, compound: &Compound, name: &str) -> Result<Vec<u8>> {
        let capacity = self.encoded_len(compound, name)?;
        let mut buf = Vec::with_capacity(capacity);
        self.encode_document(&mut buf, compound, name)?;
        debug!(capacity, written = buf.len(), "encoded NBT document");
        Ok(buf)
    }

    /// Exact length of the document [`Writer::write`] would produce.
    pub fn encoded_len(&self, compound: &Compound, name: &str) -> Result<usize> {
        let mut counter = SizeCounter::new();
        self.encode_document(&mut counter, compound, name)?;
        Ok(counter.written())
    }

    /// Exact length of `value`'s payload (no tag, no name).
    pub fn value_len(&self, value: &Value) -> Result<usize> {
        let mut counter = SizeCounter::new();
        Encoder::new(&mut counter, self.config.max_depth).payload(value, 0)?;
        Ok(counter.written())
    }

    /// Exact length of a Compound payload, including its end tag.
    pub fn compound_len(&self, compound: &Compound) -> Result<usize> {
        let mut counter = SizeCounter::new();
        Encoder::new(&mut counter, self.config.max_depth).compound(compound, 1)?;
        Ok(counter.written())
    }

    /// Exact length of a List payload, including element tag and count.
    pub fn list_len(&self, list: &List) -> Result<usize> {
        let mut counter = SizeCounter::new();
        Encoder::new(&mut counter, self.config.max_depth).list(list, 1)?;
        Ok(counter.written())
    }

    /// The one encode routine. Every public entry point, byte-producing or
    /// size-only, goes through here.
    pub fn encode_document<S: Sink>(&self, sink: &mut S, compound: &Compound, name: &str) -> Result<()> {
        let mut enc = Encoder::new(sink, self.config.max_depth);
        let mut depth = 1;
        if self.config.root_tag {
            enc.tag(Tag::Compound.as_byte())?;
            enc.string("")?;
            depth += 1;
        }
        enc.tag(Tag::Compound.as_byte())?;
        enc.string(name)?;
        enc.compound(compound, depth)?;
        enc.tag(TAG_END)
    }
}

/// Depth-first walk over the value tree, writing into a [`Sink`].
struct Encoder<'s, S: Sink> {
    sink: &'s mut S,
    max_depth: usize,
}

impl<'s, S: Sink> Encoder<'s, S> {
    fn new(sink: &'s mut S, max_depth: usize) -> Self {
        Self { sink, max_depth }
    }

    fn tag(&mut self, byte: u8) -> Result<()> {
        self.sink.put(&[byte])
    }

    /// Length-prefixed modified UTF-8; used for both names and String payloads.
    fn string(&mut self, s: &str) -> Result<()> {
        let len = mutf8::encoded_len(s);
        let prefix = u16::try_from(len).map_err(|_| NbtError::StringTooLong { len })?;
        self.sink.put_primitive(prefix)?;
        self.sink.put_text(s, len)
    }

    fn count(&mut self, len: usize) -> Result<()> {
        let count = i32::try_from(len).map_err(|_| NbtError::CountOverflow { len })?;
        self.sink.put_primitive(count)
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(NbtError::DepthLimit {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    /// `depth` is the nesting level of the container holding `value`.
    fn payload(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Byte(v) => self.sink.put_primitive(*v),
            Value::Short(v) => self.sink.put_primitive(*v),
            Value::Int(v) => self.sink.put_primitive(*v),
            Value::Long(v) => self.sink.put_primitive(*v),
            Value::Float(v) => self.sink.put_primitive(*v),
            Value::Double(v) => self.sink.put_primitive(*v),
            Value::ByteArray(v) => {
                self.count(v.len())?;
                self.sink.put_i8s(v)
            }
            Value::String(s) => self.string(s),
            Value::List(list) => self.list(list, depth + 1),
            Value::Compound(compound) => self.compound(compound, depth + 1),
            Value::IntArray(v) => {
                self.count(v.len())?;
                v.iter().try_for_each(|x| self.sink.put_primitive(*x))
            }
            Value::LongArray(v) => {
                self.count(v.len())?;
                v.iter().try_for_each(|x| self.sink.put_primitive(*x))
            }
        }
    }

    fn compound(&mut self, compound: &Compound, depth: usize) -> Result<()> {
        self.enter(depth)?;
        for (name, value) in compound {
            self.tag(value.tag().as_byte())?;
            self.string(name)?;
            self.payload(value, depth)?;
        }
        self.tag(TAG_END)
    }

    /// Element kinds are not re-checked here; `List::push` guarantees them.
    fn list(&mut self, list: &List, depth: usize) -> Result<()> {
        self.enter(depth)?;
        self.tag(list.element_type().map_or(TAG_END, Tag::as_byte))?;
        self.count(list.len())?;
        for item in list {
            self.payload(item, depth)?;
        }
        Ok(())
    }
}
