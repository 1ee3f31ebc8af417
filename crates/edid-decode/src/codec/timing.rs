//! Established timings (bytes 0x23..0x26) and standard timings (bytes 0x26..0x36).

use tracing::trace;

use crate::codec::primitives::{ByteOrder, RawBlock};
use crate::error::DecodeError;
use crate::limits::{
    ESTABLISHED_TIMINGS, STANDARD_TIMING_COUNT, STANDARD_TIMING_UNUSED, STANDARD_TIMINGS,
};
use crate::model::{
    resolve, AspectRatio, CodedValue, EstablishedTimings, Identity, Resolution, StandardTiming,
};

/// Established timings I, bits 7..0 of byte 0x23.
const ESTABLISHED_I: [Resolution; 8] = [
    Resolution::new(720, 400, 70),
    Resolution::new(720, 400, 88),
    Resolution::new(640, 480, 60),
    Resolution::new(640, 480, 67),
    Resolution::new(640, 480, 72),
    Resolution::new(640, 480, 75),
    Resolution::new(800, 600, 56),
    Resolution::new(800, 600, 60),
];

/// Established timings II, bits 7..0 of byte 0x24.
const ESTABLISHED_II: [Resolution; 8] = [
    Resolution::new(800, 600, 72),
    Resolution::new(800, 600, 75),
    Resolution::new(832, 624, 75),
    Resolution::interlaced(1024, 768, 87),
    Resolution::new(1024, 768, 60),
    Resolution::new(1024, 768, 70),
    Resolution::new(1024, 768, 75),
    Resolution::new(1280, 1024, 75),
];

/// Manufacturer's timings, bit 7 of byte 0x25.
const ESTABLISHED_MANUFACTURER: Resolution = Resolution::new(1152, 870, 75);

fn set_bits(byte: u8, table: &[Resolution; 8]) -> impl Iterator<Item = Resolution> + '_ {
    table
        .iter()
        .enumerate()
        .filter(move |&(i, _)| byte >> (7 - i) & 1 == 1)
        .map(|(_, mode)| *mode)
}

/// Decodes the established timing bitmasks.
///
/// Set bits contribute in table order: byte 0x23 bits 7..0, byte 0x24 bits
/// 7..0, then bit 7 of byte 0x25.
pub fn decode_established_timings(block: &RawBlock<'_>) -> Result<EstablishedTimings, DecodeError> {
    let [first, second, manufacturer] =
        block.read_array::<3>(ESTABLISHED_TIMINGS, "established_timings")?;

    let mut modes: Vec<Resolution> = set_bits(first, &ESTABLISHED_I)
        .chain(set_bits(second, &ESTABLISHED_II))
        .collect();
    if manufacturer >> 7 & 1 == 1 {
        modes.push(ESTABLISHED_MANUFACTURER);
    }

    Ok(EstablishedTimings {
        modes,
        manufacturer_reserved: manufacturer & 0b111_1111,
    })
}

/// Returns the aspect ratio table for an EDID structure version.
///
/// Code `00` meant 1:1 before EDID 1.3 and 16:10 from 1.3 on.
pub fn aspect_ratios(identity: &Identity) -> [(u8, AspectRatio); 4] {
    let code_00 = if identity.is_at_least_1_3() {
        AspectRatio::new(16, 10)
    } else {
        AspectRatio::new(1, 1)
    };
    [
        (0b00, code_00),
        (0b01, AspectRatio::new(4, 3)),
        (0b10, AspectRatio::new(5, 4)),
        (0b11, AspectRatio::new(16, 9)),
    ]
}

/// Decodes one 2-byte standard timing slot. Returns `None` for unused slots.
pub fn decode_standard_timing(raw: u16, ratios: &[(u8, AspectRatio)]) -> Option<StandardTiming> {
    if raw == STANDARD_TIMING_UNUSED {
        return None;
    }
    let [first, second] = raw.to_be_bytes();

    // (active pixels / 8) - 31
    let width = (u16::from(first) + 31) * 8;
    let aspect_ratio: CodedValue<AspectRatio> = resolve(second >> 6 & 0b11, ratios);
    // All four 2-bit codes are mapped.
    let ratio = aspect_ratio.label.unwrap_or(AspectRatio::new(1, 1));
    // Square pixels are assumed; the product fits easily in u32.
    let height = (u32::from(width) * u32::from(ratio.denominator) / u32::from(ratio.numerator)) as u16;
    let refresh_hz = u32::from(second & 0b11_1111) + 60;

    Some(StandardTiming {
        raw,
        aspect_ratio,
        resolution: Resolution::new(width, height, refresh_hz),
    })
}

/// Decodes the eight standard timing slots, skipping unused ones.
pub fn decode_standard_timings(
    block: &RawBlock<'_>,
    identity: &Identity,
) -> Result<Vec<StandardTiming>, DecodeError> {
    let ratios = aspect_ratios(identity);
    let mut timings = Vec::with_capacity(STANDARD_TIMING_COUNT);

    for slot in 0..STANDARD_TIMING_COUNT {
        let raw = block.read_u16(STANDARD_TIMINGS + slot * 2, ByteOrder::BigEndian, "standard_timing")?;
        match decode_standard_timing(raw, &ratios) {
            Some(timing) => timings.push(timing),
            None => trace!(slot, "standard timing slot unused"),
        }
    }

    Ok(timings)
}
