//! The four 18-byte descriptor slots.
//!
//! Each slot holds either a detailed timing or a monitor descriptor. The
//! kinds are mutually exclusive and selected by the slot's leading bytes, so
//! a decoded slot is one [`DescriptorBlock`] variant.

use serde::Serialize;

use crate::limits::DESCRIPTOR_PAYLOAD_LEN;
use crate::model::coded::CodedValue;
use crate::model::timing::Resolution;

/// A decoded descriptor slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum DescriptorBlock {
    DetailedTiming(DetailedTiming),
    Monitor(MonitorDescriptor),
    RangeLimits(RangeLimits),
    Other(OtherDescriptor),
}

/// Sync signal configuration of a detailed timing (features bits 4..1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum SyncConfig {
    /// Bit 4 clear.
    Analog {
        /// Plain or bipolar composite.
        sync_type: CodedValue<&'static str>,
        serration: CodedValue<&'static str>,
        /// Sync on green only, or on all three RGB signals.
        sync_on: CodedValue<&'static str>,
    },
    /// Bits 4..3 = `10`.
    DigitalComposite {
        serration: CodedValue<&'static str>,
        /// Horizontal sync polarity outside VSync.
        h_polarity: CodedValue<&'static str>,
    },
    /// Bits 4..3 = `11`.
    DigitalSeparate {
        /// Vertical sync polarity (bit 2).
        v_polarity: CodedValue<&'static str>,
        /// Horizontal sync polarity (bit 1).
        h_polarity: CodedValue<&'static str>,
    },
}

impl SyncConfig {
    /// Returns the single sync polarity of a digital sync configuration.
    ///
    /// For digital-separate sync this is the horizontal polarity: older
    /// decoders read both polarities into one field and kept the last one
    /// written, which was bit 1. Use the variant fields for both values.
    pub fn polarity(&self) -> Option<&CodedValue<&'static str>> {
        match self {
            SyncConfig::Analog { .. } => None,
            SyncConfig::DigitalComposite { h_polarity, .. }
            | SyncConfig::DigitalSeparate { h_polarity, .. } => Some(h_polarity),
        }
    }

    /// Returns true for either digital variant.
    pub fn is_digital(&self) -> bool {
        !matches!(self, SyncConfig::Analog { .. })
    }
}

/// A fully specified video mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedTiming {
    /// Pixel clock in Hz (stored in 10 kHz units).
    pub pixel_clock_hz: u64,
    /// `round(pixel_clock / (h_total * v_total))`, halves to even. 0 when the
    /// total is zero.
    pub frame_rate: u32,
    pub h_active: u16,
    pub h_blanking: u16,
    pub v_active: u16,
    pub v_blanking: u16,
    pub h_front_porch: u16,
    pub h_sync_width: u16,
    pub v_front_porch: u16,
    pub v_sync_width: u16,
    /// Image size in millimetres.
    pub h_image_size_mm: u16,
    pub v_image_size_mm: u16,
    pub h_border: u8,
    pub v_border: u8,
    pub interlaced: bool,
    pub stereo_mode: CodedValue<&'static str>,
    pub sync: SyncConfig,
}

impl DetailedTiming {
    pub fn h_total(&self) -> u32 {
        u32::from(self.h_active) + u32::from(self.h_blanking)
    }

    pub fn v_total(&self) -> u32 {
        u32::from(self.v_active) + u32::from(self.v_blanking)
    }

    /// Returns the mode summary used in the combined timing list.
    pub fn resolution(&self) -> Resolution {
        Resolution {
            width: self.h_active,
            height: self.v_active,
            refresh_hz: self.frame_rate,
            interlaced: self.interlaced,
        }
    }
}

/// Text-carrying monitor descriptor tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TextKind {
    Name = 0xFC,
    Text = 0xFE,
    Serial = 0xFF,
}

impl TextKind {
    /// Creates a TextKind from its tag byte.
    pub fn from_tag(tag: u8) -> Option<TextKind> {
        match tag {
            0xFC => Some(TextKind::Name),
            0xFE => Some(TextKind::Text),
            0xFF => Some(TextKind::Serial),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextKind::Name => "Monitor name",
            TextKind::Text => "ASCII text",
            TextKind::Serial => "Monitor serial number",
        }
    }
}

/// Monitor name, serial number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorDescriptor {
    pub kind: TextKind,
    /// Up to 13 characters, cut at the first line feed or NUL.
    pub text: String,
}

/// Descriptor tags that are recognized but not decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum OtherKind {
    WhitePoint = 0xFB,
    StandardTimings = 0xFA,
    ColorManagement = 0xF9,
    CvtTimingCodes = 0xF8,
    EstablishedTimingsIii = 0xF7,
    Dummy = 0x10,
}

impl OtherKind {
    /// Creates an OtherKind from its tag byte.
    pub fn from_tag(tag: u8) -> Option<OtherKind> {
        match tag {
            0xFB => Some(OtherKind::WhitePoint),
            0xFA => Some(OtherKind::StandardTimings),
            0xF9 => Some(OtherKind::ColorManagement),
            0xF8 => Some(OtherKind::CvtTimingCodes),
            0xF7 => Some(OtherKind::EstablishedTimingsIii),
            0x10 => Some(OtherKind::Dummy),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OtherKind::WhitePoint => "Additional white point data",
            OtherKind::StandardTimings => "Additional standard timing identifiers",
            OtherKind::ColorManagement => "Display Color Management",
            OtherKind::CvtTimingCodes => "CVT 3-Byte Timing Codes",
            OtherKind::EstablishedTimingsIii => "Additional standard timing 3",
            OtherKind::Dummy => "Dummy identifier",
        }
    }
}

/// A recognized descriptor whose payload is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherDescriptor {
    pub kind: OtherKind,
    pub payload: [u8; DESCRIPTOR_PAYLOAD_LEN],
}

/// Display range limits (tag 0xFD).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeLimits {
    pub min_v_rate_hz: u16,
    pub max_v_rate_hz: u16,
    pub min_h_rate_khz: u16,
    pub max_h_rate_khz: u16,
    /// Maximum pixel clock, rounded up to a multiple of 10 MHz.
    pub max_pixel_clock_mhz: u16,
    pub extended_timing_type: CodedValue<&'static str>,
    /// Bytes 11..18: secondary GTF or CVT parameters, depending on the type.
    pub timing_data: [u8; 7],
}
