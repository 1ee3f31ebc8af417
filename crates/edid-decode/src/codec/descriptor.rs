//! Descriptor slot decoding (four 18-byte slots at 0x36, 0x48, 0x5A, 0x6C).
//!
//! The first five bytes of a slot decide its kind. A monitor descriptor starts
//! with `00 00 00 Fx`, or is exactly the dummy tag `00 00 00 10 00`. Anything
//! else is a detailed timing, whose first two bytes are a non-zero pixel clock.

use tracing::debug;

use crate::codec::primitives::{ByteOrder, RawBlock};
use crate::error::DecodeError;
use crate::limits::DESCRIPTOR_PAYLOAD_LEN;
use crate::model::{
    resolve, CodeTable, CodedValue, DescriptorBlock, DetailedTiming, MonitorDescriptor,
    OtherDescriptor, OtherKind, RangeLimits, SyncConfig, TextKind,
};

const MONITOR_DESCRIPTOR_MASK: u64 = 0xFF_FFFF_F000;
const MONITOR_DESCRIPTOR_PATTERN: u64 = 0xF000;
const DUMMY_DESCRIPTOR: u64 = 0x1000;
const RANGE_LIMITS_TAG: u8 = 0xFD;

/// Pixel clock field unit.
const PIXEL_CLOCK_UNIT_HZ: u64 = 10_000;

const STEREO_MODES: &CodeTable<&str> = &[
    (0b000, "normal display, no stereo"),
    (0b001, "normal display, no stereo"),
    (0b010, "field sequential, right during stereo sync"),
    (0b100, "field sequential, left during stereo sync"),
    (0b011, "2-way interleaved, right image on even lines"),
    (0b101, "2-way interleaved, left image on even lines"),
    (0b110, "4-way interleaved"),
    (0b111, "side-by-side interleaved"),
];

const ANALOG_SYNC_TYPES: &CodeTable<&str> = &[(0, "analog composite"), (1, "bipolar analog composite")];

const SERRATIONS: &CodeTable<&str> = &[
    (0, "without serrations"),
    (1, "with serrations (H-sync during V-sync)"),
];

const SYNC_ON: &CodeTable<&str> = &[
    (0, "sync on green signal only"),
    (1, "sync on all three (RGB) video signals"),
];

const POLARITIES: &CodeTable<&str> = &[(0, "negative"), (1, "positive")];

const EXTENDED_TIMING_TYPES: &CodeTable<&str> = &[
    (0x00, "Default GTF"),
    (0x01, "No timing information"),
    (0x02, "Secondary GTF supported"),
    (0x04, "CVT"),
];

/// Returns true if the leading 40 bits of a slot mark a monitor descriptor.
pub fn is_monitor_descriptor(leading: u64) -> bool {
    leading & MONITOR_DESCRIPTOR_MASK == MONITOR_DESCRIPTOR_PATTERN || leading == DUMMY_DESCRIPTOR
}

/// Decodes the descriptor slot starting at `offset`.
///
/// Returns `None` for slots that hold nothing recognizable: unknown monitor
/// descriptor tags, set reserved bits, or a zero pixel clock.
pub fn decode_descriptor(
    block: &RawBlock<'_>,
    offset: usize,
) -> Result<Option<DescriptorBlock>, DecodeError> {
    let leading = block.read_uint::<5>(offset, ByteOrder::BigEndian, "descriptor")?;
    if is_monitor_descriptor(leading) {
        let tag = (leading >> 8) as u8;
        let reserved = leading as u8;
        decode_monitor_descriptor(block, offset, tag, reserved)
    } else {
        decode_detailed_timing(block, offset).map(|t| t.map(DescriptorBlock::DetailedTiming))
    }
}

fn decode_monitor_descriptor(
    block: &RawBlock<'_>,
    offset: usize,
    tag: u8,
    reserved: u8,
) -> Result<Option<DescriptorBlock>, DecodeError> {
    if tag == RANGE_LIMITS_TAG {
        if reserved >> 4 != 0 {
            debug!(offset, reserved, "range limits descriptor with reserved bits set, skipped");
            return Ok(None);
        }
        return decode_range_limits(block, offset, reserved)
            .map(|r| Some(DescriptorBlock::RangeLimits(r)));
    }

    if reserved != 0 {
        debug!(offset, tag, reserved, "monitor descriptor with non-zero reserved byte, skipped");
        return Ok(None);
    }

    let payload = offset + 5;
    if let Some(kind) = TextKind::from_tag(tag) {
        let text = block.read_chars(payload, DESCRIPTOR_PAYLOAD_LEN, true, "descriptor_text")?;
        return Ok(Some(DescriptorBlock::Monitor(MonitorDescriptor { kind, text })));
    }
    if let Some(kind) = OtherKind::from_tag(tag) {
        let payload = block.read_array::<DESCRIPTOR_PAYLOAD_LEN>(payload, "descriptor_payload")?;
        return Ok(Some(DescriptorBlock::Other(OtherDescriptor { kind, payload })));
    }

    debug!(offset, tag, "unrecognized monitor descriptor tag, skipped");
    Ok(None)
}

/// Decodes a display range limits descriptor.
///
/// `offsets` is byte 4 of the slot: bits 3..2 for horizontal and 1..0 for
/// vertical rates. `10` adds 255 to the maximum, `11` to both the minimum and
/// the maximum.
fn decode_range_limits(
    block: &RawBlock<'_>,
    offset: usize,
    offsets: u8,
) -> Result<RangeLimits, DecodeError> {
    let [min_v, max_v, min_h, max_h, max_clock, extended] =
        block.read_array::<6>(offset + 5, "range_limits")?;
    let timing_data = block.read_array::<7>(offset + 11, "range_limits_timing_data")?;

    let bounds = |min: u8, max: u8, code: u8| {
        let min_extra = if code == 0b11 { 255 } else { 0 };
        let max_extra = if code & 0b10 != 0 { 255 } else { 0 };
        (u16::from(min) + min_extra, u16::from(max) + max_extra)
    };
    let (min_v_rate_hz, max_v_rate_hz) = bounds(min_v, max_v, offsets & 0b11);
    let (min_h_rate_khz, max_h_rate_khz) = bounds(min_h, max_h, offsets >> 2 & 0b11);

    Ok(RangeLimits {
        min_v_rate_hz,
        max_v_rate_hz,
        min_h_rate_khz,
        max_h_rate_khz,
        max_pixel_clock_mhz: u16::from(max_clock) * 10,
        extended_timing_type: resolve(extended, EXTENDED_TIMING_TYPES),
        timing_data,
    })
}

/// Computes `round(pixel_clock / total)` with ties going to the even value.
pub fn frame_rate(pixel_clock_hz: u64, h_total: u32, v_total: u32) -> u32 {
    let total = u64::from(h_total) * u64::from(v_total);
    if total == 0 {
        return 0;
    }
    let quotient = pixel_clock_hz / total;
    let twice_remainder = (pixel_clock_hz % total) * 2;
    let rounded = if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    rounded as u32
}

/// Label of a sync polarity pattern.
pub fn polarity(pattern: u8) -> CodedValue<&'static str> {
    resolve(pattern, POLARITIES)
}

/// Decodes the sync configuration from the features byte.
pub fn decode_sync(features: u8) -> SyncConfig {
    let bit = |n: u8| features >> n & 1;
    if bit(4) == 0 {
        SyncConfig::Analog {
            sync_type: resolve(bit(3), ANALOG_SYNC_TYPES),
            serration: resolve(bit(2), SERRATIONS),
            sync_on: resolve(bit(1), SYNC_ON),
        }
    } else if bit(3) == 0 {
        SyncConfig::DigitalComposite {
            serration: resolve(bit(2), SERRATIONS),
            h_polarity: polarity(bit(1)),
        }
    } else {
        SyncConfig::DigitalSeparate {
            v_polarity: polarity(bit(2)),
            h_polarity: polarity(bit(1)),
        }
    }
}

/// Decodes a detailed timing descriptor. Returns `None` if the pixel clock is zero.
pub fn decode_detailed_timing(
    block: &RawBlock<'_>,
    offset: usize,
) -> Result<Option<DetailedTiming>, DecodeError> {
    let clock = block.read_u16(offset, ByteOrder::LittleEndian, "pixel_clock")?;
    if clock == 0 {
        debug!(offset, "descriptor slot with zero pixel clock, skipped");
        return Ok(None);
    }
    let pixel_clock_hz = u64::from(clock) * PIXEL_CLOCK_UNIT_HZ;

    let b: [u8; 16] = block.read_array(offset + 2, "detailed_timing")?;
    let lo = |i: usize| u16::from(b[i]);
    let high_nibble = |i: usize| u16::from(b[i] >> 4) << 8;
    let low_nibble = |i: usize| u16::from(b[i] & 0x0F) << 8;

    // 12-bit counts: 8 low bits plus a shared byte of high nibbles.
    let h_active = lo(0) | high_nibble(2);
    let h_blanking = lo(1) | low_nibble(2);
    let v_active = lo(3) | high_nibble(5);
    let v_blanking = lo(4) | low_nibble(5);

    // 10-bit horizontal and 6-bit vertical porch/sync fields; byte 9 holds
    // the two high bits of each.
    let msbits = b[9];
    let h_front_porch = lo(6) | u16::from(msbits >> 6 & 0b11) << 8;
    let h_sync_width = lo(7) | u16::from(msbits >> 4 & 0b11) << 8;
    let v_front_porch = u16::from(b[8] >> 4) | u16::from(msbits >> 2 & 0b11) << 4;
    let v_sync_width = u16::from(b[8] & 0x0F) | u16::from(msbits & 0b11) << 4;

    let h_image_size_mm = lo(10) | high_nibble(12);
    let v_image_size_mm = lo(11) | low_nibble(12);

    let features = b[15];
    let interlaced = features >> 7 & 1 == 1;
    let stereo_mode = resolve(features >> 4 & 0b110 | features & 1, STEREO_MODES);

    let frame_rate = frame_rate(
        pixel_clock_hz,
        u32::from(h_active) + u32::from(h_blanking),
        u32::from(v_active) + u32::from(v_blanking),
    );

    Ok(Some(DetailedTiming {
        pixel_clock_hz,
        frame_rate,
        h_active,
        h_blanking,
        v_active,
        v_blanking,
        h_front_porch,
        h_sync_width,
        v_front_porch,
        v_sync_width,
        h_image_size_mm,
        v_image_size_mm,
        h_border: b[13],
        v_border: b[14],
        interlaced,
        stereo_mode,
        sync: decode_sync(features),
    }))
}
