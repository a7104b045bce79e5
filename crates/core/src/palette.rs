//! Saved colors, in the order they were saved.
//!
//! The palette only grows: there is no removal and no deduplication.

use serde::{Deserialize, Serialize};

/// Ordered list of saved `"#rrggbb"` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<String>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `hex` after every existing entry.
    pub fn push(&mut self, hex: String) {
        tracing::debug!(color = %hex, index = self.entries.len(), "palette save");
        self.entries.push(hex);
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Iterates entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_palette_is_empty() {
        let palette = Palette::new();
        assert!(palette.is_empty());
        assert_eq!(palette.len(), 0);
        assert_eq!(palette.get(0), None);
    }

    #[test]
    fn push_preserves_order_and_duplicates() {
        let mut palette = Palette::new();
        palette.push("#ff0000".into());
        palette.push("#00ff00".into());
        palette.push("#ff0000".into());
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(0), Some("#ff0000"));
        assert_eq!(palette.get(2), Some("#ff0000"));
        let all: Vec<&str> = palette.iter().collect();
        assert_eq!(all, vec!["#ff0000", "#00ff00", "#ff0000"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut palette = Palette::new();
        palette.push("#010203".into());
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r##"["#010203"]"##);
    }
}
