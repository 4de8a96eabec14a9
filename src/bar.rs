//! Progress bar rendering.

use crate::models::palette::Palette;
use rand::{CryptoRng, RngCore};
use tracing::warn;

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';

/// Number of filled and empty glyphs for `percentage` on a bar of `length`.
///
/// The percentage is clamped to `[0, 100]` first, so the two counts always add
/// up to `length`.
pub fn glyph_counts(percentage: f64, length: usize) -> (usize, usize) {
    let percentage = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };

    let filled = ((percentage / 100.0 * length as f64).floor() as usize).min(length);
    (filled, length - filled)
}

/// Renders a bracketed bar where every glyph gets its own random color.
///
/// Colors are drawn (near-)uniformly from the palette's non-`Reset` entries and each
/// glyph is followed by the palette's reset sequence. When the palette has no
/// candidates, or `rng` fails, the glyph is painted with the reset sequence.
///
/// # Arguments
/// * `percentage` - Elapsed share of the year, clamped to `[0, 100]`
/// * `length` - Total number of glyphs in the bar
/// * `palette` - Colors to pick from
/// * `rng` - Cryptographically strong random source
///
/// # Returns
/// The bar wrapped in `[` and `]`, filled glyphs first
pub fn render_progress_bar<R>(
    percentage: f64,
    length: usize,
    palette: &Palette,
    rng: &mut R,
) -> String
where
    R: RngCore + CryptoRng,
{
    let (filled, empty) = glyph_counts(percentage, length);
    let candidates: Vec<&str> = palette.candidates().collect();
    let reset = palette.reset();

    let mut bar = String::from("[");
    let glyphs = std::iter::repeat_n(FILLED_GLYPH, filled)
        .chain(std::iter::repeat_n(EMPTY_GLYPH, empty));
    for glyph in glyphs {
        bar.push_str(pick_color(&candidates, reset, rng));
        bar.push(glyph);
        bar.push_str(reset);
    }
    bar.push(']');

    bar
}

/// Renders the bar without any escape sequences.
pub fn render_monochrome_bar(percentage: f64, length: usize) -> String {
    let (filled, empty) = glyph_counts(percentage, length);

    let mut bar = String::from("[");
    bar.extend(std::iter::repeat_n(FILLED_GLYPH, filled));
    bar.extend(std::iter::repeat_n(EMPTY_GLYPH, empty));
    bar.push(']');

    bar
}

fn pick_color<'a, R: RngCore>(candidates: &[&'a str], reset: &'a str, rng: &mut R) -> &'a str {
    if candidates.is_empty() {
        return reset;
    }

    match random_index(rng, candidates.len()) {
        Ok(index) => candidates[index],
        Err(err) => {
            warn!(error = %err, "failed to generate random number");
            reset
        }
    }
}

/// Maps 64 random bits onto `0..len` by fixed-point multiplication.
///
/// Nearly uniform: some indices are hit once more than others out of 2^64
/// draws, a skew of at most `len / 2^64`.
fn random_index<R: RngCore>(rng: &mut R, len: usize) -> Result<usize, rand::Error> {
    let mut bytes = [0u8; 8];
    rng.try_fill_bytes(&mut bytes)?;

    let value = u64::from_le_bytes(bytes);
    Ok(((u128::from(value) * len as u128) >> 64) as usize)
}
