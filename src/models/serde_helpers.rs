//! Custom serde deserializers for palette files.

use crate::color::process_color;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Deserializes a JSON object of color definitions into escape sequences.
///
/// Palette files map color names to either a hex code or a raw escape
/// sequence. Entries whose value is not a string are dropped, hex codes are
/// converted and every other string is kept verbatim.
///
/// # Examples
/// ```text
/// Input:  {"Red": "#FF0000", "Bold": "\u001b[1m", "Width": 3}
/// Output: {"Bold": "\x1b[1m", "Red": "\x1b[38;5;196m"}
/// ```
pub fn color_entries<'a, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'a>,
{
    let raw: HashMap<String, Value> = HashMap::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(color) => Some((name, process_color(&color))),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::models::palette::PaletteFile;

    #[test]
    fn keeps_only_string_values() {
        let file: PaletteFile =
            serde_json::from_str(r#"{"Red": "\u001b[31m", "Width": 3, "Nested": {"a": 1}, "On": true}"#)
                .expect("valid palette json");

        assert_eq!(file.colors.len(), 1);
        assert_eq!(file.colors["Red"], "\x1b[31m");
    }

    #[test]
    fn converts_hex_values() {
        let file: PaletteFile = serde_json::from_str(r##"{"Red": "#FF0000", "Green": "00ff00"}"##)
            .expect("valid palette json");

        assert_eq!(file.colors["Red"], "\x1b[38;5;196m");
        assert_eq!(file.colors["Green"], "\x1b[38;5;46m");
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(serde_json::from_str::<PaletteFile>(r##"["#FF0000"]"##).is_err());
        assert!(serde_json::from_str::<PaletteFile>("\"#FF0000\"").is_err());
    }
}
