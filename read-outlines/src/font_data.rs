//! raw glyph bytes

use crate::read::{ReadError, ReadScalar};

/// A reference to raw binary glyph data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for bounds-checked reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

/// A cursor for reading a sequence of values from [`FontData`].
///
/// Reads advance the position even when they fail, so a failed read
/// leaves the cursor exhausted.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Read a scalar at the provided location in the data.
    pub fn read_at<T: ReadScalar>(&self, offset: usize) -> Result<T, ReadError> {
        let end = offset
            .checked_add(T::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(T::from_be_slice)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Returns a cursor positioned at the start of the data.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }
}

impl<'a> Cursor<'a> {
    pub fn read<T: ReadScalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos);
        self.pos = self.pos.saturating_add(T::RAW_BYTE_LEN);
        temp
    }

    pub fn remaining_bytes(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reads_big_endian() {
        let data = FontData::new(&[0x01, 0xFF, 0xFF, 0xFF, 0xFE, 0x7F, 0x00]);
        let mut cursor = data.cursor();
        assert_eq!(cursor.read::<u8>(), Ok(1));
        assert_eq!(cursor.read::<i32>(), Ok(-2));
        assert_eq!(cursor.remaining_bytes(), 2);
        assert_eq!(cursor.read::<i32>(), Err(ReadError::OutOfBounds));
        assert_eq!(cursor.remaining_bytes(), 0);
    }
}
