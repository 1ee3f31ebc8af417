//! Wire-format constants for the EDID base block.

/// Length of the EDID base block. Extension blocks follow it and are not decoded.
pub const BLOCK_LEN: usize = 128;

/// Fixed header signature at offset 0.
pub const HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Year of manufacture is stored as an offset from this year.
pub const YEAR_EPOCH: u16 = 1990;

// Identity
pub const MANUFACTURER_ID: usize = 0x08;
pub const PRODUCT_CODE: usize = 0x0a;
pub const SERIAL_NUMBER: usize = 0x0c;
pub const WEEK_OF_MANUFACTURE: usize = 0x10;
pub const YEAR_OF_MANUFACTURE: usize = 0x11;
pub const VERSION: usize = 0x12;
pub const REVISION: usize = 0x13;

// Basic display parameters
pub const VIDEO_INPUT: usize = 0x14;
pub const H_SIZE: usize = 0x15;
pub const V_SIZE: usize = 0x16;
pub const GAMMA: usize = 0x17;
pub const FEATURE_SUPPORT: usize = 0x18;

/// Red/green low bits, blue/white low bits, then eight high-order coordinate bytes.
pub const COLOR_CHARACTERISTICS: usize = 0x19;

// Timings
pub const ESTABLISHED_TIMINGS: usize = 0x23;
pub const STANDARD_TIMINGS: usize = 0x26;
pub const STANDARD_TIMING_COUNT: usize = 8;

/// Standard timing slot value meaning "unused".
pub const STANDARD_TIMING_UNUSED: u16 = 0x0101;

/// Offsets of the four 18-byte descriptor slots.
pub const DESCRIPTOR_SLOTS: [usize; 4] = [0x36, 0x48, 0x5a, 0x6c];
pub const DESCRIPTOR_LEN: usize = 18;

/// Payload length of monitor descriptors (bytes 5..18 of the slot).
pub const DESCRIPTOR_PAYLOAD_LEN: usize = 13;

// Trailer
pub const EXTENSION_COUNT: usize = 0x7e;
pub const CHECKSUM: usize = 0x7f;
