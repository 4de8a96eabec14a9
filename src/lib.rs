//! Year progress as a percentage and a colorful terminal bar.
//!
//! The pieces compose linearly: [`progress`] computes how much of the year
//! has elapsed, [`parser`] loads a color [`models::palette::Palette`] and
//! [`bar`] paints the progress bar with it.

pub mod bar;
pub mod color;
pub mod error;
pub mod models;
pub mod parser;
pub mod progress;
pub mod ui;
