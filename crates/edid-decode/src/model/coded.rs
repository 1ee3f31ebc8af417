//! Enumerated bit-fields.
//!
//! Every fixed enumeration in the format (bit depth, interface, display type,
//! aspect ratio, stereo mode, sync type, extended timing type, ...) decodes to a
//! [`CodedValue`]: the raw bit pattern plus the resolved label, if the pattern
//! is one the format defines.

use std::fmt;

use serde::Serialize;

/// Static mapping from bit pattern to label.
pub type CodeTable<T> = [(u8, T)];

/// A raw bit pattern and its resolved label.
///
/// `label` is `None` for reserved or undefined patterns. The raw pattern is
/// always preserved so callers can interpret values from newer revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CodedValue<T> {
    /// The bit pattern as read from the block.
    pub raw: u8,
    /// The label the pattern maps to, or `None` when unmapped.
    pub label: Option<T>,
}

impl<T> CodedValue<T> {
    /// Creates a value with a known label.
    pub fn known(raw: u8, label: T) -> Self {
        Self {
            raw,
            label: Some(label),
        }
    }

    /// Creates a value whose pattern has no label.
    pub fn unknown(raw: u8) -> Self {
        Self { raw, label: None }
    }

    /// Returns true if the pattern resolved to a label.
    pub fn is_known(&self) -> bool {
        self.label.is_some()
    }

    /// Returns the label, if any.
    pub fn label(&self) -> Option<&T> {
        self.label.as_ref()
    }

    /// Maps the label, keeping the raw pattern.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CodedValue<U> {
        CodedValue {
            raw: self.raw,
            label: self.label.map(f),
        }
    }
}

impl<T: fmt::Display> fmt::Display for CodedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => label.fmt(f),
            None => f.write_str("unknown"),
        }
    }
}

/// Looks up `pattern` in `table`.
///
/// An unmapped pattern is not an error; it yields a value with no label.
pub fn resolve<T: Clone>(pattern: u8, table: &CodeTable<T>) -> CodedValue<T> {
    table
        .iter()
        .find(|(key, _)| *key == pattern)
        .map(|(_, label)| CodedValue::known(pattern, label.clone()))
        .unwrap_or_else(|| CodedValue::unknown(pattern))
}
