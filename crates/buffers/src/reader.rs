//! Binary buffer reader with bounds-checked cursor tracking.

use std::str;

use crate::BufferError;

/// A big-endian binary reader over a byte slice.
///
/// The reader maintains a cursor position. Every accessor is bounds-checked
/// and returns [`BufferError::EndOfBuffer`] instead of panicking when asked
/// to read past the end of the slice; the cursor does not advance on error.
///
/// # Example
///
/// ```
/// use msgpack_json_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.try_u8(), Ok(0x01));
/// assert_eq!(reader.try_u16(), Ok(0x0203));
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Checks that `n` more bytes are available from the current cursor.
    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.x + n > self.uint8.len() {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn try_peek(&self) -> Result<u8, BufferError> {
        self.check(1)?;
        Ok(self.uint8[self.x])
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn try_i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.try_u8()? as i8)
    }

    /// Reads an unsigned 16-bit big-endian integer.
    #[inline]
    pub fn try_u16(&mut self) -> Result<u16, BufferError> {
        self.check(2)?;
        let val = u16::from_be_bytes([self.uint8[self.x], self.uint8[self.x + 1]]);
        self.x += 2;
        Ok(val)
    }

    /// Reads a signed 16-bit big-endian integer.
    #[inline]
    pub fn try_i16(&mut self) -> Result<i16, BufferError> {
        Ok(self.try_u16()? as i16)
    }

    /// Reads an unsigned 32-bit big-endian integer.
    #[inline]
    pub fn try_u32(&mut self) -> Result<u32, BufferError> {
        self.check(4)?;
        let val = u32::from_be_bytes([
            self.uint8[self.x],
            self.uint8[self.x + 1],
            self.uint8[self.x + 2],
            self.uint8[self.x + 3],
        ]);
        self.x += 4;
        Ok(val)
    }

    /// Reads a signed 32-bit big-endian integer.
    #[inline]
    pub fn try_i32(&mut self) -> Result<i32, BufferError> {
        Ok(self.try_u32()? as i32)
    }

    /// Reads an unsigned 64-bit big-endian integer.
    #[inline]
    pub fn try_u64(&mut self) -> Result<u64, BufferError> {
        self.check(8)?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.uint8[self.x..self.x + 8]);
        self.x += 8;
        Ok(u64::from_be_bytes(bytes))
    }

    /// Reads a signed 64-bit big-endian integer.
    #[inline]
    pub fn try_i64(&mut self) -> Result<i64, BufferError> {
        Ok(self.try_u64()? as i64)
    }

    /// Reads a 32-bit big-endian float.
    #[inline]
    pub fn try_f32(&mut self) -> Result<f32, BufferError> {
        Ok(f32::from_bits(self.try_u32()?))
    }

    /// Reads a 64-bit big-endian float.
    #[inline]
    pub fn try_f64(&mut self) -> Result<f64, BufferError> {
        Ok(f64::from_bits(self.try_u64()?))
    }

    /// Reads `size` raw bytes and advances the cursor.
    pub fn try_buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let x = self.x;
        let end = x + size;
        self.x = end;
        Ok(&self.uint8[x..end])
    }

    /// Reads a UTF-8 string of `size` bytes.
    pub fn try_utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        self.check(size)?;
        let start = self.x;
        self.x += size;
        str::from_utf8(&self.uint8[start..self.x]).map_err(|_| BufferError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_u8_success() {
        let data = [0x42u8];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_u8(), Ok(0x42));
        assert_eq!(reader.x, 1);
    }

    #[test]
    fn test_try_u8_end_of_buffer() {
        let data: [u8; 0] = [];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_u8(), Err(BufferError::EndOfBuffer));
        // Cursor must not advance on error
        assert_eq!(reader.x, 0);
    }

    #[test]
    fn test_try_i8_negative() {
        let data = [0xfeu8]; // -2 in two's complement
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_i8(), Ok(-2i8));
    }

    #[test]
    fn test_try_u16_success() {
        let data = [0x01u8, 0x02];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_u16(), Ok(0x0102u16));
        assert_eq!(reader.x, 2);
    }

    #[test]
    fn test_try_u16_partial() {
        let data = [0x01u8]; // only 1 byte — not enough for u16
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_u16(), Err(BufferError::EndOfBuffer));
        assert_eq!(reader.x, 0);
    }

    #[test]
    fn test_try_i16_negative() {
        let data = (-1000i16).to_be_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_i16(), Ok(-1000i16));
    }

    #[test]
    fn test_try_u32_success() {
        let data = [0x01u8, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_u32(), Ok(0x01020304u32));
    }

    #[test]
    fn test_try_i32_negative() {
        let data = (-123456i32).to_be_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_i32(), Ok(-123456i32));
    }

    #[test]
    fn test_try_u64_success() {
        let data = 0x0102030405060708u64.to_be_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_u64(), Ok(0x0102030405060708u64));
    }

    #[test]
    fn test_try_u64_end_of_buffer() {
        let data = [0u8; 7]; // 7 bytes — not enough for u64
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_u64(), Err(BufferError::EndOfBuffer));
        assert_eq!(reader.x, 0);
    }

    #[test]
    fn test_try_i64_negative() {
        let data = (-9_999_999_999i64).to_be_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_i64(), Ok(-9_999_999_999i64));
    }

    #[test]
    fn test_try_f32_roundtrip() {
        let data = 1.5f32.to_be_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_f32(), Ok(1.5f32));
    }

    #[test]
    fn test_try_f64_roundtrip() {
        let data = std::f64::consts::PI.to_be_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_f64(), Ok(std::f64::consts::PI));
    }

    #[test]
    fn test_try_buf_success() {
        let data = [1u8, 2, 3, 4, 5];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_buf(3), Ok([1u8, 2, 3].as_ref()));
        assert_eq!(reader.x, 3);
    }

    #[test]
    fn test_try_buf_end_of_buffer() {
        let data = [1u8, 2];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_buf(5), Err(BufferError::EndOfBuffer));
        assert_eq!(reader.x, 0);
    }

    #[test]
    fn test_try_utf8_success() {
        let data = b"hello";
        let mut reader = Reader::new(data);
        assert_eq!(reader.try_utf8(5), Ok("hello"));
    }

    #[test]
    fn test_try_utf8_invalid() {
        // 0xff is not valid UTF-8
        let data = [0xffu8, 0xfe];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.try_utf8(2), Err(BufferError::InvalidUtf8));
    }

    #[test]
    fn test_try_peek_does_not_advance() {
        let data = [0x55u8];
        let reader = Reader::new(&data);
        assert_eq!(reader.try_peek(), Ok(0x55));
        assert_eq!(reader.x, 0);
    }

    #[test]
    fn test_size() {
        let data = [1u8, 2, 3];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.size(), 3);
        reader.try_u8().unwrap();
        assert_eq!(reader.size(), 2);
    }
}
