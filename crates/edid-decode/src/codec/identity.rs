//! Header validation and vendor/product identification.

use tracing::debug;

use crate::codec::primitives::{ByteOrder, RawBlock};
use crate::error::DecodeError;
use crate::limits::{
    HEADER, MANUFACTURER_ID, PRODUCT_CODE, REVISION, SERIAL_NUMBER, VERSION,
    WEEK_OF_MANUFACTURE, YEAR_EPOCH, YEAR_OF_MANUFACTURE,
};
use crate::model::Identity;
use crate::vendor::VendorRegistry;

/// Checks the fixed 8-byte header signature.
pub fn check_header(block: &RawBlock<'_>) -> Result<(), DecodeError> {
    let found: [u8; 8] = block.read_array(0, "header")?;
    if found != HEADER {
        return Err(DecodeError::InvalidHeader { found });
    }
    Ok(())
}

/// Unpacks the three 5-bit letters of a PNP manufacturer id.
///
/// Bits 14..10, 9..5 and 4..0 of the big-endian value each hold a letter
/// code where 1 = `A`.
pub fn unpack_manufacturer_id(packed: u16) -> String {
    [packed >> 10, packed >> 5, packed]
        .into_iter()
        .map(|v| char::from((v & 0b11111) as u8 + 64))
        .collect()
}

/// Decodes the identity fields (bytes 0x08..0x14).
pub fn decode_identity(
    block: &RawBlock<'_>,
    registry: &VendorRegistry,
) -> Result<Identity, DecodeError> {
    let packed = block.read_u16(MANUFACTURER_ID, ByteOrder::BigEndian, "manufacturer_id")?;
    let manufacturer_id = unpack_manufacturer_id(packed);
    let manufacturer_name = registry.lookup(&manufacturer_id).map(str::to_owned);
    if manufacturer_name.is_none() {
        debug!(manufacturer_id = %manufacturer_id, "manufacturer id not in vendor registry");
    }

    let product_code = block.read_u16(PRODUCT_CODE, ByteOrder::LittleEndian, "product_code")?;
    let serial_number = block.read_u32(SERIAL_NUMBER, ByteOrder::LittleEndian, "serial_number")?;
    let week_of_manufacture = block.read_byte(WEEK_OF_MANUFACTURE, "week_of_manufacture")?;
    let year = block.read_byte(YEAR_OF_MANUFACTURE, "year_of_manufacture")?;

    Ok(Identity {
        manufacturer_id,
        manufacturer_name,
        product_code,
        serial_number,
        week_of_manufacture,
        year_of_manufacture: YEAR_EPOCH + u16::from(year),
        version: block.read_byte(VERSION, "version")?,
        revision: block.read_byte(REVISION, "revision")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_bytes() -> Vec<u8> {
        let mut data = HEADER.to_vec();
        // "DEL" = 00100 00101 01100 -> 0x10AC
        data.extend_from_slice(&[0x10, 0xAC]);
        data.extend_from_slice(&[0x7A, 0xA0]); // product 0xA07A
        data.extend_from_slice(&[0x4C, 0x4B, 0x35, 0x30]); // serial 0x30354B4C
        data.extend_from_slice(&[0x05, 0x14, 0x01, 0x03]);
        data
    }

    #[test]
    fn test_check_header() {
        let data = identity_bytes();
        assert!(check_header(&RawBlock::new(&data)).is_ok());

        let mut bad = data.clone();
        bad[7] = 0x01;
        assert!(matches!(
            check_header(&RawBlock::new(&bad)),
            Err(DecodeError::InvalidHeader { .. })
        ));

        let short = [0x00, 0xFF, 0xFF];
        assert!(matches!(
            check_header(&RawBlock::new(&short)),
            Err(DecodeError::OutOfRange { field: "header", .. })
        ));
    }

    #[test]
    fn test_unpack_manufacturer_id() {
        assert_eq!(unpack_manufacturer_id(0x10AC), "DEL");
        // "ACI" = 00001 00011 01001
        assert_eq!(unpack_manufacturer_id(0b0_00001_00011_01001), "ACI");
        // Top bit is reserved and ignored.
        assert_eq!(unpack_manufacturer_id(0x8000 | 0x10AC), "DEL");
    }

    #[test]
    fn test_decode_identity() {
        let data = identity_bytes();
        let identity = decode_identity(&RawBlock::new(&data), VendorRegistry::builtin()).unwrap();

        assert_eq!(identity.manufacturer_id, "DEL");
        assert_eq!(identity.manufacturer_name.as_deref(), Some("Dell Inc."));
        assert_eq!(identity.product_code, 0xA07A);
        assert_eq!(identity.serial_number, 0x30354B4C);
        assert_eq!(identity.week_of_manufacture, 5);
        assert_eq!(identity.year_of_manufacture, 2010);
        assert_eq!(identity.version, 1);
        assert_eq!(identity.revision, 3);
        assert!(identity.is_at_least_1_3());
    }

    #[test]
    fn test_unregistered_vendor_has_no_name() {
        let data = identity_bytes();
        let identity = decode_identity(&RawBlock::new(&data), &VendorRegistry::new()).unwrap();
        assert_eq!(identity.manufacturer_id, "DEL");
        assert_eq!(identity.manufacturer_name, None);
    }

    #[test]
    fn test_identity_out_of_range() {
        let data = &identity_bytes()[..0x0e];
        let err = decode_identity(&RawBlock::new(data), VendorRegistry::builtin()).unwrap_err();
        assert_eq!(err.offset(), Some(SERIAL_NUMBER));
    }
}
