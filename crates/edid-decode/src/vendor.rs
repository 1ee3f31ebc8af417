//! Manufacturer name lookup for PNP vendor ids.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Maps three-letter PNP ids (uppercase ASCII) to vendor display names.
///
/// The crate ships a small [`builtin`](VendorRegistry::builtin) registry of
/// common display vendors. Callers with the full PNP id list can build their
/// own and pass it through [`DecodeOptions`](crate::DecodeOptions).
#[derive(Debug, Clone, Default)]
pub struct VendorRegistry {
    names: FxHashMap<[u8; 3], String>,
}

lazy_static! {
    static ref BUILTIN: VendorRegistry = [
        ("ACI", "Ancor Communications Inc"),
        ("ACR", "Acer Technologies"),
        ("AOC", "AOC International"),
        ("APP", "Apple Computer Inc"),
        ("AUO", "AU Optronics"),
        ("BNQ", "BenQ Corporation"),
        ("BOE", "BOE Technology Group"),
        ("CMN", "Chimei Innolux Corporation"),
        ("DEL", "Dell Inc."),
        ("ENC", "Eizo Nanao Corporation"),
        ("GSM", "Goldstar Company Ltd"),
        ("HWP", "Hewlett Packard"),
        ("IVM", "Iiyama North America"),
        ("LEN", "Lenovo Group Limited"),
        ("LGD", "LG Display"),
        ("NEC", "NEC Corporation"),
        ("PHL", "Philips Consumer Electronics Company"),
        ("SAM", "Samsung Electric Company"),
        ("SDC", "Samsung Display Corp"),
        ("SHP", "Sharp Corporation"),
        ("SNY", "Sony"),
        ("VSC", "ViewSonic Corporation"),
    ]
    .into_iter()
    .collect();
}

fn normalize(code: &str) -> Option<[u8; 3]> {
    let bytes: [u8; 3] = code.as_bytes().try_into().ok()?;
    if !bytes.iter().all(u8::is_ascii_alphabetic) {
        return None;
    }
    Some(bytes.map(|b| b.to_ascii_uppercase()))
}

impl VendorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide built-in registry.
    pub fn builtin() -> &'static VendorRegistry {
        &BUILTIN
    }

    /// Registers a vendor name. Returns false if `code` is not three ASCII letters.
    pub fn insert(&mut self, code: &str, name: impl Into<String>) -> bool {
        match normalize(code) {
            Some(key) => {
                self.names.insert(key, name.into());
                true
            }
            None => false,
        }
    }

    /// Looks up the vendor name for a PNP id.
    pub fn lookup(&self, code: &str) -> Option<&str> {
        let key = normalize(code)?;
        self.names.get(&key).map(String::as_str)
    }

    /// Returns the number of registered vendors.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no vendors are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for VendorRegistry {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut registry = VendorRegistry::new();
        for (code, name) in iter {
            registry.insert(code, name);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = VendorRegistry::builtin();
        assert_eq!(registry.lookup("DEL"), Some("Dell Inc."));
        assert_eq!(registry.lookup("ACI"), Some("Ancor Communications Inc"));
        assert_eq!(registry.lookup("ZZZ"), None);
    }

    #[test]
    fn test_lookup_normalizes_case() {
        let registry: VendorRegistry = [("abc", "Example Corp")].into_iter().collect();
        assert_eq!(registry.lookup("ABC"), Some("Example Corp"));
        assert_eq!(registry.lookup("abc"), Some("Example Corp"));
    }

    #[test]
    fn test_insert_rejects_bad_codes() {
        let mut registry = VendorRegistry::new();
        assert!(!registry.insert("AB", "too short"));
        assert!(!registry.insert("ABCD", "too long"));
        assert!(!registry.insert("A1C", "digit"));
        assert!(registry.is_empty());

        assert!(registry.insert("XYZ", "Xyz Displays"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("A@C"), None);
    }
}
