//! Basic display parameters (bytes 0x14..0x19) and color characteristics
//! (bytes 0x19..0x23).

use crate::codec::primitives::RawBlock;
use crate::error::DecodeError;
use crate::limits::{COLOR_CHARACTERISTICS, FEATURE_SUPPORT, GAMMA, H_SIZE, V_SIZE, VIDEO_INPUT};
use crate::model::{
    resolve, AnalogInput, CodeTable, ColorCharacteristics, DigitalInput, DisplayParameters,
    FeatureSupport, SignalLevel, VideoInput,
};

const BIT_DEPTHS: &CodeTable<u8> = &[
    (0b001, 6),
    (0b010, 8),
    (0b011, 10),
    (0b100, 12),
    (0b110, 16),
];

const INTERFACES: &CodeTable<&str> = &[
    (0b0010, "HDMIa"),
    (0b0011, "HDMIb"),
    (0b0100, "MDDI"),
    (0b0101, "DisplayPort"),
];

const fn level(white_v: f32, sync_v: f32, peak_to_peak_v: f32) -> SignalLevel {
    SignalLevel {
        white_v,
        sync_v,
        peak_to_peak_v,
    }
}

const SIGNAL_LEVELS: &CodeTable<SignalLevel> = &[
    (0b00, level(0.700, 0.300, 1.000)),
    (0b01, level(0.714, 0.286, 1.000)),
    (0b10, level(1.000, 0.400, 1.400)),
    (0b11, level(0.700, 0.000, 0.700)),
];

const DIGITAL_DISPLAY_TYPES: &CodeTable<&str> = &[
    (0b00, "RGB 4:4:4"),
    (0b01, "RGB 4:4:4 + YCrCb 4:4:4"),
    (0b10, "RGB 4:4:4 + YCrCb 4:2:2"),
    (0b11, "RGB 4:4:4 + YCrCb 4:4:4 + YCrCb 4:2:2"),
];

const ANALOG_DISPLAY_TYPES: &CodeTable<&str> = &[
    (0b00, "Monochrome / grayscale display"),
    (0b01, "RGB color display"),
    (0b10, "Non-RGB multicolor display"),
    (0b11, "Undefined"),
];

#[inline]
fn bit(byte: u8, n: u8) -> bool {
    byte >> n & 1 == 1
}

/// Decodes the video input byte.
pub fn decode_video_input(video_input: u8) -> VideoInput {
    if bit(video_input, 7) {
        VideoInput::Digital(DigitalInput {
            bit_depth: resolve(video_input >> 4 & 0b111, BIT_DEPTHS),
            interface: resolve(video_input & 0b1111, INTERFACES),
            dfp1_compatible: video_input & 0b111_1111 == 1,
        })
    } else {
        VideoInput::Analog(AnalogInput {
            signal_level: resolve(video_input >> 5 & 0b11, SIGNAL_LEVELS),
            setup: bit(video_input, 4),
            separate_sync: bit(video_input, 3),
            composite_sync: bit(video_input, 2),
            sync_on_green: bit(video_input, 1),
            vsync_serration: bit(video_input, 0),
        })
    }
}

/// Decodes the feature support byte. The display type table depends on
/// whether the input is digital.
pub fn decode_features(feature: u8, digital: bool) -> FeatureSupport {
    let display_types = if digital {
        DIGITAL_DISPLAY_TYPES
    } else {
        ANALOG_DISPLAY_TYPES
    };
    FeatureSupport {
        standby: bit(feature, 7),
        suspend: bit(feature, 6),
        active_off: bit(feature, 5),
        display_type: resolve(feature >> 3 & 0b11, display_types),
        srgb: bit(feature, 2),
        preferred_timing_mode: bit(feature, 1),
        default_gtf: bit(feature, 0),
    }
}

/// Decodes the basic display parameters.
pub fn decode_display_parameters(block: &RawBlock<'_>) -> Result<DisplayParameters, DecodeError> {
    let video_input = decode_video_input(block.read_byte(VIDEO_INPUT, "video_input")?);
    let h_size_cm = block.read_byte(H_SIZE, "h_size")?;
    let v_size_cm = block.read_byte(V_SIZE, "v_size")?;
    let gamma_raw = block.read_byte(GAMMA, "gamma")?;
    let features = decode_features(
        block.read_byte(FEATURE_SUPPORT, "feature_support")?,
        video_input.is_digital(),
    );

    Ok(DisplayParameters {
        video_input,
        h_size_cm,
        v_size_cm,
        gamma_raw,
        features,
    })
}

/// Reads the ten color characteristic bytes as stored.
pub fn decode_colors(block: &RawBlock<'_>) -> Result<ColorCharacteristics, DecodeError> {
    let [
        red_green_low_bits,
        blue_white_low_bits,
        red_x,
        red_y,
        green_x,
        green_y,
        blue_x,
        blue_y,
        white_x,
        white_y,
    ] = block.read_array::<10>(COLOR_CHARACTERISTICS, "color_characteristics")?;

    Ok(ColorCharacteristics {
        red_green_low_bits,
        blue_white_low_bits,
        red_x,
        red_y,
        green_x,
        green_y,
        blue_x,
        blue_y,
        white_x,
        white_y,
    })
}
