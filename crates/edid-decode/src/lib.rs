//! EDID: decoder for the Extended Display Identification Data base block.
//!
//! Displays describe themselves with a 128-byte EDID block (optionally
//! followed by extension blocks). This crate decodes the base block into an
//! [`EdidRecord`]: vendor and product identity, display parameters, color
//! characteristics, established/standard timings and the four descriptor
//! slots.
//!
//! # Quick Start
//!
//! ```rust
//! use edid_decode::{decode_edid, DescriptorBlock};
//!
//! let mut edid = [0u8; 128];
//! edid[..8].copy_from_slice(&[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
//! edid[0x08..0x0a].copy_from_slice(&[0x10, 0xAC]); // "DEL"
//! edid[0x12] = 1; // EDID 1.4
//! edid[0x13] = 4;
//! edid[0x36..0x42].copy_from_slice(b"\0\0\0\xFC\0U2412M\n");
//!
//! let record = decode_edid(&edid).unwrap();
//! assert_eq!(record.identity.manufacturer_id, "DEL");
//! assert_eq!(record.monitor_name(), Some("U2412M"));
//! assert!(matches!(record.descriptors[0], DescriptorBlock::Monitor(_)));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Output types (record, coded values, timings, descriptors)
//! - [`codec`]: Byte-level decoders
//! - [`vendor`]: PNP vendor name registry
//! - [`error`]: Error types
//! - [`limits`]: Wire-format constants
//!
//! # Untrusted input
//!
//! Short input and a bad header signature are reported as [`DecodeError`]s
//! with the offending offset. Reserved or undefined bit patterns are not
//! errors: they decode to a [`CodedValue`] with the raw pattern and no label.
//! The checksum is not verified.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod vendor;

// Re-export commonly used types at crate root
pub use codec::{
    decode_edid, decode_edid_hex, decode_edid_hex_with_options, decode_edid_with_options,
    DecodeOptions,
};
pub use error::{DecodeError, ErrorCode};
pub use model::{
    AnalogInput, AspectRatio, Chromaticity, CodedValue, ColorCharacteristics, DescriptorBlock,
    DetailedTiming, DigitalInput, DisplayParameters, EdidRecord, EstablishedTimings,
    FeatureSupport, Identity, MonitorDescriptor, OtherDescriptor, OtherKind, RangeLimits,
    Resolution, SignalLevel, StandardTiming, SyncConfig, TextKind, VideoInput,
};
pub use vendor::VendorRegistry;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
