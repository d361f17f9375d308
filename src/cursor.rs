//! Bounds-checked reader over a borrowed byte slice.
//!
//! Every read either yields a value and advances the cursor, or fails with
//! [`DecodeError::TruncatedBuffer`]. There is no way to read past the end
//! of the buffer.

use crate::error::DecodeError;

pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read one byte and advance.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or(DecodeError::TruncatedBuffer {
                needed: 1,
                remaining: 0,
            })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a little-endian u16 and advance by two bytes.
    pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        let end = self.pos + 2;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or(DecodeError::TruncatedBuffer {
                needed: 2,
                remaining: self.remaining(),
            })?;
        self.pos = end;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}
