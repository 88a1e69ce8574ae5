//! # nbt-core
//!
//! Pure-Rust reader and writer for **NBT (Named Binary Tag)** documents.
//!
//! NBT is a compact, self-describing binary tree format: every value carries a
//! one-byte tag naming its kind, Compounds map names to values, and Lists hold
//! values of a single kind. Numbers are big-endian and all text uses modified
//! UTF-8.
//!
//! ## Quick start
//!
//! ```rust
//! use nbt_core::{parse, write_to_vec, Compound, List, Tag};
//!
//! let mut level = Compound::new();
//! level.insert("byteTest", 127i8);
//! level.insert("stringTest", "HELLO WORLD ÅÄÖ!");
//! level.insert("listTest", List::from_values(Tag::Long, [11i64, 12, 13]).unwrap());
//!
//! let bytes = write_to_vec(&level, "Level").unwrap();
//! let doc = parse(&bytes).unwrap();
//! assert_eq!(doc.get("Level").unwrap().as_compound().unwrap(), &level);
//! ```
//!
//! ## Modules
//!
//! - [`value`], [`compound`], [`list`] — the document tree
//! - [`tag`] — wire kinds
//! - [`reader`] — bytes → `Compound`
//! - [`writer`] — `Compound` → bytes, plus exact size estimation
//! - [`mutf8`] — modified UTF-8 text codec
//! - [`primitive`] — big-endian conversion of fixed-width numbers
//! - [`sink`] — output targets shared by encoding and size estimation
//! - [`config`] — root-tag wrapping and depth limit
//! - [`error`] — error types
//!
//! The free functions below use [`Config::default`]; build a [`Reader`] or
//! [`Writer`] for anything else.

pub mod compound;
pub mod config;
pub mod error;
pub mod list;
pub mod mutf8;
pub mod primitive;
pub mod reader;
pub mod sink;
pub mod tag;
pub mod value;
pub mod writer;

pub use compound::Compound;
pub use config::Config;
pub use error::{NbtError, Result};
pub use list::List;
pub use reader::Reader;
pub use tag::Tag;
pub use value::Value;
pub use writer::Writer;

use std::io::{Read, Write};

/// Parse a document from a byte slice.
pub fn parse(data: &[u8]) -> Result<Compound> {
    Reader::default().parse(data)
}

/// Parse a document from a stream.
pub fn parse_reader<R: Read>(input: R) -> Result<Compound> {
    Reader::default().parse_reader(input)
}

/// Write `compound` as a document named `name` to a stream. Output is
/// buffered internally.
pub fn write<W: Write>(out: W, compound: &Compound, name: &str) -> Result<()> {
    Writer::default().write(out, compound, name)
}

/// Encode `compound` as a document named `name` into a new buffer.
pub fn write_to_vec(compound: &Compound, name: &str) -> Result<Vec<u8>> {
    Writer::default().write_to_vec(compound, name)
}

/// Exact byte length of the document `write_to_vec` would produce.
pub fn encoded_len(compound: &Compound, name: &str) -> Result<usize> {
    Writer::default().encoded_len(compound, name)
}
