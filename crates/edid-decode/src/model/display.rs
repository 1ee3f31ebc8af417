//! Basic display parameters and color characteristics.

use serde::Serialize;

use crate::model::coded::CodedValue;

/// Analog video signal level standard (bits 6..5 of the video input byte).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalLevel {
    /// Reference white above blank, in volts.
    pub white_v: f32,
    /// Sync tip below blank, in volts.
    pub sync_v: f32,
    /// Total signal swing, in volts peak-to-peak.
    pub peak_to_peak_v: f32,
}

/// Video input definition for a digital display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigitalInput {
    /// Bits per primary color channel.
    pub bit_depth: CodedValue<u8>,
    /// Video interface standard.
    pub interface: CodedValue<&'static str>,
    /// Signal compatible with VESA DFP 1.x (low seven bits equal exactly 1).
    pub dfp1_compatible: bool,
}

/// Video input definition for an analog display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalogInput {
    pub signal_level: CodedValue<SignalLevel>,
    /// Blank-to-black setup (pedestal) expected.
    pub setup: bool,
    pub separate_sync: bool,
    /// Composite sync on the HSync line.
    pub composite_sync: bool,
    pub sync_on_green: bool,
    /// VSync serration required with composite sync or sync-on-green.
    pub vsync_serration: bool,
}

/// Video input definition (byte 0x14). Bit 7 selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "signal_type", rename_all = "snake_case")]
pub enum VideoInput {
    Digital(DigitalInput),
    Analog(AnalogInput),
}

impl VideoInput {
    /// Returns true for a digital input.
    pub fn is_digital(&self) -> bool {
        matches!(self, VideoInput::Digital(_))
    }
}

/// Feature support flags (byte 0x18).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureSupport {
    /// DPMS standby.
    pub standby: bool,
    /// DPMS suspend.
    pub suspend: bool,
    /// Active-off / very low power.
    pub active_off: bool,
    /// Color encoding for digital inputs, color class for analog inputs.
    pub display_type: CodedValue<&'static str>,
    /// sRGB is the default color space.
    pub srgb: bool,
    /// The first detailed timing is the preferred mode.
    pub preferred_timing_mode: bool,
    /// Default GTF timings supported (continuous frequency on 1.4).
    pub default_gtf: bool,
}

/// Basic display parameters (bytes 0x14..0x19).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayParameters {
    pub video_input: VideoInput,
    /// Maximum horizontal image size in centimetres. 0 if undefined.
    pub h_size_cm: u8,
    /// Maximum vertical image size in centimetres. 0 if undefined.
    pub v_size_cm: u8,
    /// Gamma as stored: `(gamma * 100) - 100`.
    pub gamma_raw: u8,
    pub features: FeatureSupport,
}

impl DisplayParameters {
    /// Returns the display gamma, or `None` when it is defined in an extension block.
    pub fn gamma(&self) -> Option<f32> {
        match self.gamma_raw {
            0xFF => None,
            raw => Some((f32::from(raw) + 100.0) / 100.0),
        }
    }
}

/// A CIE 1931 coordinate pair at full 10-bit precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chromaticity {
    pub x: u16,
    pub y: u16,
}

impl Chromaticity {
    /// Returns `(x, y)` as fractions in `[0, 1)`.
    pub fn as_f64(&self) -> (f64, f64) {
        (f64::from(self.x) / 1024.0, f64::from(self.y) / 1024.0)
    }
}

/// Color characteristics (bytes 0x19..0x23), as stored.
///
/// The coordinate fields hold only the high-order 8 bits of each 10-bit
/// value. The two low-bit bytes are kept raw; use [`red`](Self::red) and
/// friends for the combined values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorCharacteristics {
    /// Red x/y and green x/y low bits, two bits each (bits 7..0).
    pub red_green_low_bits: u8,
    /// Blue x/y and white x/y low bits, two bits each (bits 7..0).
    pub blue_white_low_bits: u8,
    pub red_x: u8,
    pub red_y: u8,
    pub green_x: u8,
    pub green_y: u8,
    pub blue_x: u8,
    pub blue_y: u8,
    pub white_x: u8,
    pub white_y: u8,
}

impl ColorCharacteristics {
    fn combine(high_x: u8, high_y: u8, low: u8, shift: u8) -> Chromaticity {
        let low_x = u16::from(low >> (shift + 2) & 0b11);
        let low_y = u16::from(low >> shift & 0b11);
        Chromaticity {
            x: u16::from(high_x) << 2 | low_x,
            y: u16::from(high_y) << 2 | low_y,
        }
    }

    pub fn red(&self) -> Chromaticity {
        Self::combine(self.red_x, self.red_y, self.red_green_low_bits, 4)
    }

    pub fn green(&self) -> Chromaticity {
        Self::combine(self.green_x, self.green_y, self.red_green_low_bits, 0)
    }

    pub fn blue(&self) -> Chromaticity {
        Self::combine(self.blue_x, self.blue_y, self.blue_white_low_bits, 4)
    }

    /// Default white point.
    pub fn white(&self) -> Chromaticity {
        Self::combine(self.white_x, self.white_y, self.blue_white_low_bits, 0)
    }
}
