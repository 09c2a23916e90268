//! Static key -> display label tables
//!
//! Unknown keys are shown as-is rather than treated as errors.

use std::borrow::Cow;

/// A static lookup table of `(key, label)` pairs
#[derive(Clone, Copy, Debug)]
pub struct LabelTable {
    entries: &'static [(&'static str, &'static str)],
}

impl LabelTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Label for a key, if the table knows it
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
    }

    /// Label for a key, falling back to the key itself
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resource categories
pub const CATEGORY_LABELS: LabelTable = LabelTable::new(&[
    ("lead-magnet", "Lead Magnet"),
    ("template", "Template"),
    ("sales-collateral", "Sales Collateral"),
    ("diagram", "Diagram"),
    ("deck", "Deck"),
]);

/// Downloadable file types
pub const FILE_TYPE_LABELS: LabelTable = LabelTable::new(&[
    ("pdf", "PDF"),
    ("docx", "Word"),
    ("pptx", "PowerPoint"),
]);

/// Enforcement stack layers, keyed by layer number
pub const LAYER_NAMES: LabelTable = LabelTable::new(&[
    ("1", "Authority Gate"),
    ("2", "Immutable Receipts"),
    ("3", "Drift Guard"),
    ("4", "Gated Substrate"),
]);

/// Name of an enforcement layer, or its number for unknown layers
pub fn layer_name(layer: u8) -> Cow<'static, str> {
    let key = layer.to_string();
    match LAYER_NAMES.get(&key) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(key),
    }
}

/// Short badge for an enforcement layer (`L1`, `L2`, ...)
pub fn layer_badge(layer: u8) -> String {
    format!("L{}", layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(CATEGORY_LABELS.label("lead-magnet"), "Lead Magnet");
        assert_eq!(FILE_TYPE_LABELS.label("pptx"), "PowerPoint");
        assert_eq!(LAYER_NAMES.label("3"), "Drift Guard");
    }

    #[test]
    fn test_unknown_key_returned_unchanged() {
        assert_eq!(CATEGORY_LABELS.label("podcast"), "podcast");
        assert_eq!(FILE_TYPE_LABELS.label("xlsx"), "xlsx");
        assert_eq!(CATEGORY_LABELS.get("podcast"), None);
    }

    #[test]
    fn test_layer_name_fallback() {
        assert_eq!(layer_name(1), "Authority Gate");
        assert_eq!(layer_name(9), "9");
        assert_eq!(layer_badge(4), "L4");
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(CATEGORY_LABELS.len(), 5);
        assert_eq!(FILE_TYPE_LABELS.len(), 3);
        assert!(!LAYER_NAMES.is_empty());
    }
}
