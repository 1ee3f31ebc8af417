//! Property tests over arbitrary input.

mod common;

use common::{HEADER, pack_manufacturer_id, sample_monitor};
use edid_decode::codec::unpack_manufacturer_id;
use edid_decode::{decode_edid, DecodeError, ErrorCode};
use proptest::prelude::*;

fn block_with_body() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 120).prop_map(|body| {
        let mut data = HEADER.to_vec();
        data.extend(body);
        data
    })
}

proptest! {
    #[test]
    fn short_input_is_rejected(data in proptest::collection::vec(any::<u8>(), 0..128)) {
        let err = decode_edid(&data).unwrap_err();
        prop_assert!(matches!(err.code(), ErrorCode::OutOfRange | ErrorCode::InvalidFormat));
    }

    #[test]
    fn short_input_with_header_is_out_of_range(len in 8usize..128) {
        let data = sample_monitor();
        let err = decode_edid(&data[..len]).unwrap_err();
        prop_assert_eq!(err, DecodeError::Truncated { len });
    }

    #[test]
    fn any_body_decodes(data in block_with_body()) {
        prop_assert!(decode_edid(&data).is_ok());
    }

    #[test]
    fn header_mutation_is_invalid_format(index in 0usize..8, value in any::<u8>()) {
        prop_assume!(value != HEADER[index]);
        let mut data = sample_monitor();
        data[index] = value;
        let err = decode_edid(&data).unwrap_err();
        prop_assert!(
            matches!(err, DecodeError::InvalidHeader { .. }),
            "expected InvalidHeader, got {:?}",
            err
        );
        prop_assert_eq!(err.code(), ErrorCode::InvalidFormat);
    }

    #[test]
    fn manufacturer_id_round_trip(id in "[A-Z]{3}") {
        let packed = u16::from_be_bytes(pack_manufacturer_id(&id));
        prop_assert_eq!(unpack_manufacturer_id(packed), id);
    }

    #[test]
    fn decode_is_pure(data in block_with_body()) {
        prop_assert_eq!(decode_edid(&data).unwrap(), decode_edid(&data).unwrap());
    }

    #[test]
    fn trailing_extension_bytes_are_ignored(
        data in block_with_body(),
        extension in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let base = decode_edid(&data).unwrap();
        let mut extended = data.clone();
        extended.extend(extension);
        prop_assert_eq!(decode_edid(&extended).unwrap(), base);
    }
}

#[test]
fn aci_round_trip() {
    let packed = u16::from_be_bytes(pack_manufacturer_id("ACI"));
    assert_eq!(unpack_manufacturer_id(packed), "ACI");
}
