//! Parsed palette document.

use super::ColorEntry;

/// An ordered list of colour entries, in source line order.
///
/// Entries are never merged or deduplicated, even when names or colours
/// repeat. `name` and `columns` are taken from the optional GIMP header
/// lines and are informational only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteDocument {
    pub name: Option<String>,
    pub columns: Option<u32>,
    entries: Vec<ColorEntry>,
}

impl PaletteDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end of the document.
    pub fn push(&mut self, entry: ColorEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.iter()
    }
}

impl From<Vec<ColorEntry>> for PaletteDocument {
    fn from(entries: Vec<ColorEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }
}
