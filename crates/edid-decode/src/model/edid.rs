//! The decoded EDID record.

use serde::Serialize;

use crate::model::descriptor::{DescriptorBlock, DetailedTiming, RangeLimits, TextKind};
use crate::model::display::{ColorCharacteristics, DisplayParameters};
use crate::model::identity::Identity;
use crate::model::timing::{EstablishedTimings, Resolution, StandardTiming};

/// Everything decoded from an EDID base block.
///
/// Built once per decode call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdidRecord {
    pub identity: Identity,
    pub display: DisplayParameters,
    pub colors: ColorCharacteristics,
    pub established_timings: EstablishedTimings,
    /// Used standard timing slots, in slot order.
    pub standard_timings: Vec<StandardTiming>,
    /// Recognized descriptor slots, in slot order. Unrecognized slots are omitted.
    pub descriptors: Vec<DescriptorBlock>,
    /// Whether the first descriptor slot (0x36) holds a detailed timing. When
    /// true it is `descriptors[0]`.
    pub first_slot_is_timing: bool,
    /// All modes: detailed timings, then standard, then established.
    /// Duplicates are kept.
    pub timings: Vec<Resolution>,
    /// Number of extension blocks that follow (byte 0x7E).
    pub extension_count: u8,
    /// Checksum byte (0x7F), not verified.
    pub checksum: u8,
}

impl EdidRecord {
    /// Returns the detailed timings, in slot order.
    pub fn detailed_timings(&self) -> impl Iterator<Item = &DetailedTiming> {
        self.descriptors.iter().filter_map(|d| match d {
            DescriptorBlock::DetailedTiming(t) => Some(t),
            _ => None,
        })
    }

    /// Returns the preferred mode: the detailed timing in the first slot, when
    /// the features byte declares one.
    pub fn preferred_timing(&self) -> Option<&DetailedTiming> {
        if !self.display.features.preferred_timing_mode || !self.first_slot_is_timing {
            return None;
        }
        match self.descriptors.first() {
            Some(DescriptorBlock::DetailedTiming(t)) => Some(t),
            _ => None,
        }
    }

    /// Returns the range limits descriptor, if present.
    pub fn range_limits(&self) -> Option<&RangeLimits> {
        self.descriptors.iter().find_map(|d| match d {
            DescriptorBlock::RangeLimits(r) => Some(r),
            _ => None,
        })
    }

    /// Returns the first monitor-name descriptor text.
    pub fn monitor_name(&self) -> Option<&str> {
        self.monitor_text(TextKind::Name)
    }

    /// Returns the first serial-number descriptor text.
    pub fn serial_text(&self) -> Option<&str> {
        self.monitor_text(TextKind::Serial)
    }

    fn monitor_text(&self, kind: TextKind) -> Option<&str> {
        self.descriptors.iter().find_map(|d| match d {
            DescriptorBlock::Monitor(m) if m.kind == kind => Some(m.text.as_str()),
            _ => None,
        })
    }

    /// Returns the combined timing list as strings, e.g. `"1920x1080 @ 60Hz"`.
    pub fn timing_strings(&self) -> Vec<String> {
        self.timings.iter().map(ToString::to_string).collect()
    }
}
