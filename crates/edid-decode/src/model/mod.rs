//! Data model types for decoded EDID data.
//!
//! This module contains the output types:
//! - Coded values (bit pattern + resolved label)
//! - Identity (vendor, product, serial, date, version)
//! - Display parameters and color characteristics
//! - Established and standard timings
//! - Descriptor slots (detailed timing, monitor text, range limits, opaque)
//! - The top-level record

pub mod coded;
pub mod descriptor;
pub mod display;
pub mod edid;
pub mod identity;
pub mod timing;

pub use coded::{resolve, CodeTable, CodedValue};
pub use descriptor::{
    DescriptorBlock, DetailedTiming, MonitorDescriptor, OtherDescriptor, OtherKind, RangeLimits,
    SyncConfig, TextKind,
};
pub use display::{
    AnalogInput, Chromaticity, ColorCharacteristics, DigitalInput, DisplayParameters,
    FeatureSupport, SignalLevel, VideoInput,
};
pub use edid::EdidRecord;
pub use identity::Identity;
pub use timing::{AspectRatio, EstablishedTimings, Resolution, StandardTiming};
