//! Top-level EDID decoding.

use tracing::instrument;

use crate::codec::descriptor::decode_descriptor;
use crate::codec::display::{decode_colors, decode_display_parameters};
use crate::codec::identity::{check_header, decode_identity};
use crate::codec::primitives::{decode_hex, RawBlock};
use crate::codec::timing::{decode_established_timings, decode_standard_timings};
use crate::error::DecodeError;
use crate::limits::{BLOCK_LEN, CHECKSUM, DESCRIPTOR_SLOTS, EXTENSION_COUNT};
use crate::model::{DescriptorBlock, EdidRecord, Resolution};
use crate::vendor::VendorRegistry;

/// Options for decoding.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions<'r> {
    /// Registry used to resolve the manufacturer name.
    pub registry: &'r VendorRegistry,
}

impl Default for DecodeOptions<'static> {
    fn default() -> Self {
        Self {
            registry: VendorRegistry::builtin(),
        }
    }
}

impl DecodeOptions<'static> {
    /// Creates default options using the built-in vendor registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'r> DecodeOptions<'r> {
    /// Creates options that resolve vendor names through `registry`.
    pub fn with_registry(registry: &'r VendorRegistry) -> Self {
        Self { registry }
    }
}

/// Decodes an EDID base block.
///
/// `input` must start with the 128-byte base block; any extension blocks
/// after it are ignored.
///
/// ```
/// use edid_decode::{decode_edid, DecodeError};
///
/// let err = decode_edid(&[0u8; 128]).unwrap_err();
/// assert!(matches!(err, DecodeError::InvalidHeader { .. }));
/// ```
pub fn decode_edid(input: &[u8]) -> Result<EdidRecord, DecodeError> {
    decode_edid_with_options(input, DecodeOptions::default())
}

/// Decodes an EDID base block given as hexadecimal text.
///
/// Whitespace is ignored, so multi-line dumps can be passed as-is.
pub fn decode_edid_hex(input: &str) -> Result<EdidRecord, DecodeError> {
    decode_edid_hex_with_options(input, DecodeOptions::default())
}

/// Decodes hexadecimal text with the given options.
pub fn decode_edid_hex_with_options(
    input: &str,
    options: DecodeOptions<'_>,
) -> Result<EdidRecord, DecodeError> {
    let bytes = decode_hex(input)?;
    decode_edid_with_options(&bytes, options)
}

/// Decodes an EDID base block with the given options.
#[instrument(name = "decode-edid", skip_all, fields(len = input.len()))]
pub fn decode_edid_with_options(
    input: &[u8],
    options: DecodeOptions<'_>,
) -> Result<EdidRecord, DecodeError> {
    let block = RawBlock::new(input);

    check_header(&block)?;
    if block.len() < BLOCK_LEN {
        return Err(DecodeError::Truncated { len: block.len() });
    }

    let identity = decode_identity(&block, options.registry)?;
    let display = decode_display_parameters(&block)?;
    let colors = decode_colors(&block)?;
    let established_timings = decode_established_timings(&block)?;
    let standard_timings = decode_standard_timings(&block, &identity)?;

    let mut descriptors = Vec::with_capacity(DESCRIPTOR_SLOTS.len());
    let mut first_slot_is_timing = false;
    for (slot, offset) in DESCRIPTOR_SLOTS.into_iter().enumerate() {
        if let Some(descriptor) = decode_descriptor(&block, offset)? {
            if slot == 0 {
                first_slot_is_timing = matches!(descriptor, DescriptorBlock::DetailedTiming(_));
            }
            descriptors.push(descriptor);
        }
    }

    // Detailed, then standard, then established.
    let timings: Vec<Resolution> = descriptors
        .iter()
        .filter_map(|d| match d {
            DescriptorBlock::DetailedTiming(t) => Some(t.resolution()),
            _ => None,
        })
        .chain(standard_timings.iter().map(|t| t.resolution))
        .chain(established_timings.modes.iter().copied())
        .collect();

    Ok(EdidRecord {
        identity,
        display,
        colors,
        established_timings,
        standard_timings,
        descriptors,
        first_slot_is_timing,
        timings,
        extension_count: block.read_byte(EXTENSION_COUNT, "extension_count")?,
        checksum: block.read_byte(CHECKSUM, "checksum")?,
    })
}
