//! Output sinks for the encoder.
//!
//! The writer has a single encode routine that is generic over [`Sink`].
//! Writing bytes and measuring the encoded size are the same walk with a
//! different sink, so the size pass cannot drift from the byte pass.

use crate::error::Result;
use crate::mutf8;
use crate::primitive::{Primitive, MAX_PRIMITIVE_SIZE};
use std::io::Write;

/// Destination for encoded bytes.
pub trait Sink {
    fn put(&mut self, bytes: &[u8]) -> Result<()>;

    /// Modified UTF-8 body of `s`. `encoded_len` has already been computed by
    /// the caller for the length prefix and must equal `mutf8::encoded_len(s)`.
    fn put_text(&mut self, s: &str, encoded_len: usize) -> Result<()>;

    fn put_primitive<T: Primitive>(&mut self, value: T) -> Result<()> {
        let mut buf = [0u8; MAX_PRIMITIVE_SIZE];
        value.store_be(&mut buf);
        self.put(&buf[..T::SIZE])
    }

    /// Signed bytes go out as-is, one byte each.
    fn put_i8s(&mut self, values: &[i8]) -> Result<()> {
        let mut buf = [0u8; 256];
        for chunk in values.chunks(buf.len()) {
            for (dst, &src) in buf.iter_mut().zip(chunk) {
                *dst = src as u8;
            }
            self.put(&buf[..chunk.len()])?;
        }
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn put_text(&mut self, s: &str, _encoded_len: usize) -> Result<()> {
        mutf8::encode_into(s, self);
        Ok(())
    }
}

/// Counts bytes without storing them.
#[derive(Debug, Default)]
pub struct SizeCounter {
    written: usize,
}

impl SizeCounter {
    /// A counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes counted so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl Sink for SizeCounter {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.written += bytes.len();
        Ok(())
    }

    fn put_text(&mut self, _s: &str, encoded_len: usize) -> Result<()> {
        self.written += encoded_len;
        Ok(())
    }

    fn put_primitive<T: Primitive>(&mut self, _value: T) -> Result<()> {
        self.written += T::SIZE;
        Ok(())
    }

    fn put_i8s(&mut self, values: &[i8]) -> Result<()> {
        self.written += values.len();
        Ok(())
    }
}

/// Adapts any `std::io::Write` into a [`Sink`]. Strings are staged through
/// a reusable scratch buffer so each one costs a single `write_all`.
///
/// Every scalar is its own `write_all`; wrap unbuffered targets in a
/// `BufWriter` ([`Writer::write`](crate::Writer::write) does this itself).
pub struct IoSink<W: Write> {
    inner: W,
    scratch: Vec<u8>,
}

impl<W: Write> IoSink<W> {
    /// Wrap `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            scratch: Vec::new(),
        }
    }

    /// Give back the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    fn put_text(&mut self, s: &str, _encoded_len: usize) -> Result<()> {
        self.scratch.clear();
        mutf8::encode_into(s, &mut self.scratch);
        self.inner.write_all(&self.scratch)?;
        Ok(())
    }
}
