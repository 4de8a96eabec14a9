//! Conversion of hex color codes into 256-color terminal escape sequences.
//!
//! Palette files may describe colors either as hex codes (`#FF8800` or
//! `FF8800`) or as raw escape sequences. Hex codes are mapped onto the nearest
//! entry of the xterm 256-color table; anything else is passed through as-is.

use regex::Regex;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9A-Fa-f]{6})$").expect("Invalid regex pattern"));

/// First index of the 24-step grayscale ramp.
const GRAYSCALE_START: u8 = 232;
/// Pure white in the 6x6x6 color cube.
const CUBE_WHITE: u8 = 231;
/// First index of the 6x6x6 color cube.
const CUBE_START: u8 = 16;

/// Returns `true` if `value` looks like `#RRGGBB` or `RRGGBB`.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Converts a hex color code into a 256-color foreground escape sequence.
///
/// Returns `None` when `hex` is not a six digit hex code.
///
/// # Mapping
/// - Gray values (r == g == b) use the grayscale ramp `232..=255`, with values
///   below 8 pinned to 232 and values above 248 pinned to cube white (231).
/// - Everything else is quantized to six levels per channel and placed in the
///   color cube at `16 + 36r + 6g + b`.
pub fn hex_to_ansi(hex: &str) -> Option<String> {
    let digits = HEX_COLOR.captures(hex)?.get(1)?.as_str();

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);

    Some(foreground(ansi_index(r, g, b)))
}

/// Normalizes a palette value: hex codes become escape sequences, any other
/// string is assumed to already be an escape sequence and returned unchanged.
pub fn process_color(value: &str) -> String {
    hex_to_ansi(value).unwrap_or_else(|| value.to_string())
}

fn ansi_index(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        return match r {
            0..8 => GRAYSCALE_START,
            249.. => CUBE_WHITE,
            gray => GRAYSCALE_START + ((u16::from(gray) - 8) * 24 / 247) as u8,
        };
    }

    let level = |channel: u8| channel / 51;
    CUBE_START + 36 * level(r) + 6 * level(g) + level(b)
}

fn foreground(index: u8) -> String {
    format!("\x1b[38;5;{}m", index)
}
