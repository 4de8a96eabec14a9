use super::serde_helpers::color_entries;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Name of the palette entry that restores the terminal's default styling.
pub const RESET_KEY: &str = "Reset";

/// Escape sequence used when a palette has no usable `Reset` entry.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

const DEFAULT_COLORS: [(&str, &str); 7] = [
    ("Red", "\x1b[31m"),
    ("Green", "\x1b[32m"),
    ("Yellow", "\x1b[33m"),
    ("Blue", "\x1b[34m"),
    ("Magenta", "\x1b[35m"),
    ("Cyan", "\x1b[36m"),
    (RESET_KEY, RESET_SEQUENCE),
];

/// Raw contents of a palette file, already normalized to escape sequences.
#[derive(Debug, Deserialize, Default)]
#[serde(transparent)]
pub struct PaletteFile {
    #[serde(deserialize_with = "color_entries")]
    pub colors: BTreeMap<String, String>,
}

/// Named terminal colors used to paint the progress bar.
///
/// A palette always holds a `Reset` entry. Entries are kept ordered by name so
/// the set of candidate colors is stable for a given palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Palette {
    /// Builds a palette from arbitrary entries, synthesizing `Reset` if absent.
    pub fn from_colors(colors: BTreeMap<String, String>) -> Self {
        let mut palette = Palette { colors };
        palette.ensure_reset();
        palette
    }

    /// Overrides or extends entries with the ones from `overrides`.
    ///
    /// Keys missing from `overrides` keep their current value.
    pub fn merge(&mut self, overrides: PaletteFile) {
        self.colors.extend(overrides.colors);
        self.ensure_reset();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn reset(&self) -> &str {
        self.get(RESET_KEY).unwrap_or(RESET_SEQUENCE)
    }

    /// Escape sequences eligible for painting glyphs, i.e. everything but `Reset`.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.colors
            .iter()
            .filter(|(name, _)| name.as_str() != RESET_KEY)
            .map(|(_, sequence)| sequence.as_str())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    fn ensure_reset(&mut self) {
        self.colors
            .entry(RESET_KEY.to_string())
            .or_insert_with(|| RESET_SEQUENCE.to_string());
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = DEFAULT_COLORS
            .iter()
            .map(|(name, sequence)| (name.to_string(), sequence.to_string()))
            .collect();

        Palette { colors }
    }
}
