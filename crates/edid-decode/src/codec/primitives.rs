//! Byte-level access to a raw EDID block.
//!
//! Every read is bounds checked and reports the offset and field name on
//! failure, so malformed or short input surfaces as a typed error.

use crate::error::DecodeError;

/// Byte order used when composing a multi-byte field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// First byte is most significant.
    BigEndian,
    /// First byte is least significant (product code, serial number, pixel clock).
    LittleEndian,
}

/// Read-only view over the raw EDID bytes.
///
/// Unlike a streaming reader, fields are addressed by absolute offset since
/// the EDID layout is fixed.
#[derive(Debug, Clone, Copy)]
pub struct RawBlock<'a> {
    data: &'a [u8],
}

impl<'a> RawBlock<'a> {
    /// Wraps a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Returns the total input length, extension blocks included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `count` bytes starting at `offset`.
    #[inline]
    pub fn read_slice(
        &self,
        offset: usize,
        count: usize,
        field: &'static str,
    ) -> Result<&'a [u8], DecodeError> {
        offset
            .checked_add(count)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(DecodeError::OutOfRange {
                field,
                offset,
                count,
                len: self.data.len(),
            })
    }

    /// Reads a fixed-size array starting at `offset`.
    #[inline]
    pub fn read_array<const N: usize>(
        &self,
        offset: usize,
        field: &'static str,
    ) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(offset, N, field)?);
        Ok(out)
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&self, offset: usize, field: &'static str) -> Result<u8, DecodeError> {
        self.read_slice(offset, 1, field).map(|bytes| bytes[0])
    }

    /// Reads `N` bytes as one unsigned integer. `N` is at most 8; wider reads
    /// are rejected at compile time.
    pub fn read_uint<const N: usize>(
        &self,
        offset: usize,
        order: ByteOrder,
        field: &'static str,
    ) -> Result<u64, DecodeError> {
        const { assert!(N <= 8, "read_uint reads at most 8 bytes") };
        let bytes: [u8; N] = self.read_array(offset, field)?;
        let fold = |acc: u64, b: &u8| (acc << 8) | u64::from(*b);
        Ok(match order {
            ByteOrder::BigEndian => bytes.iter().fold(0, fold),
            ByteOrder::LittleEndian => bytes.iter().rev().fold(0, fold),
        })
    }

    /// Reads a 16-bit value.
    #[inline]
    pub fn read_u16(
        &self,
        offset: usize,
        order: ByteOrder,
        field: &'static str,
    ) -> Result<u16, DecodeError> {
        self.read_uint::<2>(offset, order, field).map(|v| v as u16)
    }

    /// Reads a 32-bit value.
    #[inline]
    pub fn read_u32(
        &self,
        offset: usize,
        order: ByteOrder,
        field: &'static str,
    ) -> Result<u32, DecodeError> {
        self.read_uint::<4>(offset, order, field).map(|v| v as u32)
    }

    /// Reads `count` bytes as single-byte characters.
    ///
    /// With `stop_at_terminator`, reading ends before the first line feed
    /// (0x0A) or NUL byte. The full range must still be in bounds.
    pub fn read_chars(
        &self,
        offset: usize,
        count: usize,
        stop_at_terminator: bool,
        field: &'static str,
    ) -> Result<String, DecodeError> {
        let bytes = self.read_slice(offset, count, field)?;
        Ok(bytes
            .iter()
            .take_while(|&&b| !(stop_at_terminator && (b == 0x0A || b == 0x00)))
            .map(|&b| char::from(b))
            .collect())
    }
}

/// Decodes hexadecimal text into bytes.
///
/// Whitespace anywhere in the input is ignored, so `xrandr --verbose` style
/// dumps split across lines are accepted. Digits may be upper or lower case.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(input.len() / 2);
    let mut high: Option<u8> = None;

    for (position, c) in input.char_indices() {
        if c.is_whitespace() {
            continue;
        }
        let nibble = c.to_digit(16).ok_or(DecodeError::InvalidHex {
            position,
            reason: "not a hexadecimal digit",
        })? as u8;
        match high.take() {
            Some(h) => out.push((h << 4) | nibble),
            None => high = Some(nibble),
        }
    }

    if high.is_some() {
        return Err(DecodeError::InvalidHex {
            position: input.len(),
            reason: "odd number of hex digits",
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_uint_byte_order() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let block = RawBlock::new(&data);

        assert_eq!(block.read_uint::<2>(0, ByteOrder::BigEndian, "t").unwrap(), 0x1234);
        assert_eq!(block.read_uint::<2>(0, ByteOrder::LittleEndian, "t").unwrap(), 0x3412);
        assert_eq!(block.read_u32(0, ByteOrder::LittleEndian, "t").unwrap(), 0x78563412);
        assert_eq!(block.read_uint::<3>(1, ByteOrder::BigEndian, "t").unwrap(), 0x345678);
        assert_eq!(block.read_byte(3, "t").unwrap(), 0x78);
    }

    #[test]
    fn test_read_uint_full_width() {
        let data = [0xFF, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x80];
        let block = RawBlock::new(&data);

        // All eight bytes land in the result; none are shifted out.
        assert_eq!(
            block.read_uint::<8>(0, ByteOrder::BigEndian, "t").unwrap(),
            0xFF01_0203_0405_0607
        );
        assert_eq!(
            block.read_uint::<8>(1, ByteOrder::LittleEndian, "t").unwrap(),
            0x8007_0605_0403_0201
        );
        assert_eq!(block.read_uint::<0>(9, ByteOrder::BigEndian, "t").unwrap(), 0);
        assert_eq!(
            block.read_uint::<8>(2, ByteOrder::BigEndian, "t").unwrap_err(),
            DecodeError::OutOfRange {
                field: "t",
                offset: 2,
                count: 8,
                len: 9,
            }
        );
    }

    #[test]
    fn test_read_out_of_range() {
        let data = [0u8; 4];
        let block = RawBlock::new(&data);

        let err = block.read_u16(3, ByteOrder::BigEndian, "gamma").unwrap_err();
        assert_eq!(
            err,
            DecodeError::OutOfRange {
                field: "gamma",
                offset: 3,
                count: 2,
                len: 4,
            }
        );

        assert!(block.read_byte(4, "t").is_err());
        assert!(block.read_slice(usize::MAX, 2, "t").is_err());
        assert!(block.read_slice(4, 0, "t").unwrap().is_empty());
    }

    #[test]
    fn test_read_chars_terminator() {
        let data = *b"Dell\nU2412M\0\0";
        let block = RawBlock::new(&data);

        assert_eq!(block.read_chars(0, 13, true, "t").unwrap(), "Dell");
        assert_eq!(block.read_chars(5, 8, true, "t").unwrap(), "U2412M");
        assert_eq!(block.read_chars(0, 4, false, "t").unwrap(), "Dell");
        assert_eq!(block.read_chars(0, 6, false, "t").unwrap(), "Dell\nU");
        // The range is checked even when a terminator comes first.
        assert!(block.read_chars(0, 14, true, "t").is_err());
    }

    #[test]
    fn test_read_chars_high_bytes() {
        let data = [0x41, 0xE9, 0x0A];
        let block = RawBlock::new(&data);
        assert_eq!(block.read_chars(0, 3, true, "t").unwrap(), "A\u{e9}");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("00ff10Ab").unwrap(), vec![0x00, 0xFF, 0x10, 0xAB]);
        assert_eq!(
            decode_hex("  00 ff\n\tff 00\r\n").unwrap(),
            vec![0x00, 0xFF, 0xFF, 0x00]
        );
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hex_errors() {
        assert_eq!(
            decode_hex("00f").unwrap_err(),
            DecodeError::InvalidHex {
                position: 3,
                reason: "odd number of hex digits",
            }
        );
        assert_eq!(
            decode_hex("00 zz").unwrap_err(),
            DecodeError::InvalidHex {
                position: 3,
                reason: "not a hexadecimal digit",
            }
        );
    }
}
