//! Binary decoding for the EDID base block.
//!
//! Each submodule decodes one region of the 128-byte block; [`edid`] runs
//! them in order and assembles the record.

pub mod descriptor;
pub mod display;
pub mod edid;
pub mod identity;
pub mod primitives;
pub mod timing;

pub use descriptor::{decode_descriptor, decode_detailed_timing, frame_rate};
pub use edid::{
    decode_edid, decode_edid_hex, decode_edid_hex_with_options, decode_edid_with_options,
    DecodeOptions,
};
pub use identity::unpack_manufacturer_id;
pub use primitives::{decode_hex, ByteOrder, RawBlock};
