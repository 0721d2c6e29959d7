//! Bounds-checked little-endian access to byte buffers.
//!
//! Every multi-byte field in a BMP file is little-endian; every read and
//! write in this crate goes through these two types so a malformed offset
//! fails cleanly instead of reading out of bounds.

use alloc::vec::Vec;

use crate::error::BmpError;

fn truncated() -> BmpError {
    BmpError::MalformedHeader("unexpected end of input".into())
}

pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(truncated());
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or_else(truncated)?;
        if new_pos > self.data.len() {
            return Err(truncated());
        }
        self.pos = new_pos;
        Ok(())
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16, BmpError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes::<2>()?))
    }

    pub(crate) fn read_u32_le(&mut self) -> Result<u32, BmpError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes::<4>()?))
    }

    pub(crate) fn read_i32_le(&mut self) -> Result<i32, BmpError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes::<4>()?))
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let end = self.pos.checked_add(N).ok_or_else(truncated)?;
        let slice = self.data.get(self.pos..end).ok_or_else(truncated)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(slice);
        self.pos = end;
        Ok(buf)
    }

    /// Borrow the next `n` bytes without copying. The view must not be
    /// retained past the current decode call.
    pub(crate) fn read_slice(&mut self, n: usize) -> Result<&'a [u8], BmpError> {
        let end = self.pos.checked_add(n).ok_or_else(truncated)?;
        let slice = self.data.get(self.pos..end).ok_or_else(truncated)?;
        self.pos = end;
        Ok(slice)
    }
}

/// Field-by-field serializer in canonical offset order. The file layout is
/// written explicitly; no in-memory struct layout is relied upon.
pub(crate) struct ByteWriter {
    out: Vec<u8>,
}

impl ByteWriter {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn put_u8(&mut self, v: u8) {
        self.out.push(v);
    }

    pub(crate) fn put_u16_le(&mut self, v: u16) {
        self.out.extend_from_slice(&v.to_le_bytes());
    }

    pub(crate) fn put_u32_le(&mut self, v: u32) {
        self.out.extend_from_slice(&v.to_le_bytes());
    }

    pub(crate) fn put_i32_le(&mut self, v: i32) {
        self.out.extend_from_slice(&v.to_le_bytes());
    }

    pub(crate) fn put_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Append `n` zero bytes (row padding).
    pub(crate) fn pad(&mut self, n: usize) {
        self.out.extend(core::iter::repeat_n(0u8, n));
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.out
    }
}
