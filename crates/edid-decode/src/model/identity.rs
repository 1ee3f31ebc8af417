//! Vendor and product identification.

use serde::Serialize;

/// Vendor/product identification and EDID structure version (bytes 0x08..0x14).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Three-letter PNP manufacturer id, e.g. `"DEL"`.
    pub manufacturer_id: String,
    /// Vendor display name, when the id is in the registry.
    pub manufacturer_name: Option<String>,
    /// Vendor-assigned product code.
    pub product_code: u16,
    /// Vendor-assigned serial number (0 when unused).
    pub serial_number: u32,
    /// Week of manufacture as stored (0 = unspecified, 0xFF = model year).
    pub week_of_manufacture: u8,
    /// Year of manufacture.
    pub year_of_manufacture: u16,
    /// EDID structure version.
    pub version: u8,
    /// EDID structure revision.
    pub revision: u8,
}

impl Identity {
    /// Returns true when the EDID structure is version 1.3 or later.
    ///
    /// Several fields (standard timing aspect ratio `00`, preferred timing)
    /// changed meaning at 1.3.
    pub fn is_at_least_1_3(&self) -> bool {
        (self.version == 1 && self.revision >= 3) || self.version > 1
    }
}
