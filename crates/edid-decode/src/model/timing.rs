//! Video modes from the established and standard timing tables.

use std::fmt;

use serde::Serialize;

use crate::model::coded::CodedValue;

/// A video mode summary: active resolution and refresh rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: u16,
    pub height: u16,
    pub refresh_hz: u32,
    pub interlaced: bool,
}

impl Resolution {
    pub const fn new(width: u16, height: u16, refresh_hz: u32) -> Self {
        Self {
            width,
            height,
            refresh_hz,
            interlaced: false,
        }
    }

    pub const fn interlaced(width: u16, height: u16, refresh_hz: u32) -> Self {
        Self {
            width,
            height,
            refresh_hz,
            interlaced: true,
        }
    }
}

impl fmt::Display for Resolution {
    /// Formats as `1920x1080 @ 60Hz`, with an `i` suffix on the height for
    /// interlaced modes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}{} @ {}Hz",
            self.width,
            self.height,
            if self.interlaced { "i" } else { "" },
            self.refresh_hz
        )
    }
}

/// Image aspect ratio of a standard timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AspectRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl AspectRatio {
    pub const fn new(numerator: u16, denominator: u16) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// One decoded standard timing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardTiming {
    /// The two slot bytes, first byte high.
    pub raw: u16,
    pub aspect_ratio: CodedValue<AspectRatio>,
    pub resolution: Resolution,
}

/// Established timings I & II (bytes 0x23..0x26).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstablishedTimings {
    /// Modes whose bit is set, in table order.
    pub modes: Vec<Resolution>,
    /// Low seven bits of byte 0x25, reserved for manufacturer timings.
    pub manufacturer_reserved: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::new(1920, 1080, 60).to_string(), "1920x1080 @ 60Hz");
        assert_eq!(Resolution::interlaced(1024, 768, 87).to_string(), "1024x768i @ 87Hz");
    }

    #[test]
    fn test_aspect_ratio_display() {
        assert_eq!(AspectRatio::new(16, 10).to_string(), "16:10");
        assert_eq!(
            CodedValue::known(0b11, AspectRatio::new(16, 9)).to_string(),
            "16:9"
        );
    }
}
