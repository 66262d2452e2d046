//! Bounds-checked little-endian reader over a `.lines` byte buffer
//!
//! The format is strictly sequential with no length fields for variable-size
//! regions, so the cursor only ever moves forward. Every read is checked
//! against the buffer end before the position advances; a failed read leaves
//! the position untouched.

use relines_core::{LinesError, Result};

/// Sequential reader over an immutable byte buffer
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of the buffer
    #[inline]
    #[must_use = "creates a cursor that should be read from"]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset from the start of the buffer
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the buffer end
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Read the next `len` bytes and advance
    ///
    /// # Errors
    ///
    /// Returns [`LinesError::Truncated`] without advancing if fewer than
    /// `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(LinesError::truncated(len, self.remaining()));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Read a little-endian `u32` and advance
    ///
    /// # Errors
    ///
    /// Returns [`LinesError::Truncated`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a little-endian `f32` and advance
    ///
    /// # Errors
    ///
    /// Returns [`LinesError::Truncated`] if fewer than 4 bytes remain.
    pub fn read_f32(&mut self) -> Result<f32> {
        let b = self.read_bytes(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_in_order() {
        let data = [1u8, 0, 0, 0, 2, 0, 0, 0];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u32().unwrap(), 1);
        assert_eq!(cursor.read_u32().unwrap(), 2);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn failed_read_does_not_advance() {
        let data = [0u8; 3];
        let mut cursor = ByteCursor::new(&data);
        let err = cursor.read_u32().unwrap_err();
        assert!(matches!(
            err,
            LinesError::Truncated {
                needed: 4,
                remaining: 3
            }
        ));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.remaining(), 3);
    }

    #[test]
    fn f32_reads_little_endian() {
        let data = 1.5f32.to_le_bytes();
        let mut cursor = ByteCursor::new(&data);
        assert!((cursor.read_f32().unwrap() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn read_past_end_is_truncated() {
        let data = [0u8; 10];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_bytes(8).unwrap();
        assert!(cursor.read_bytes(3).is_err());
        assert_eq!(cursor.position(), 8);
    }
}
