//! Palette file loading.
//!
//! A missing or broken palette file never aborts the program: the caller keeps
//! the palette it started with and learns what happened from [`LoadOutcome`].

use crate::error::ConfigError;
use crate::models::palette::{Palette, PaletteFile};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// What happened while trying to load a palette file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read and merged into the palette.
    Loaded(PathBuf),
    /// No file at the path; the palette was left untouched.
    Missing(PathBuf),
    /// The file exists but could not be used; the palette was left untouched.
    Failed(ConfigError),
}

/// Palette after a load attempt, together with the attempt's outcome.
#[derive(Debug)]
pub struct PaletteLoad {
    pub palette: Palette,
    pub outcome: LoadOutcome,
}

impl PaletteLoad {
    /// The failure worth reporting, if any. A missing file is not one.
    pub fn diagnostic(&self) -> Option<&ConfigError> {
        match &self.outcome {
            LoadOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Reads and normalizes a palette file.
///
/// # Errors
/// Returns [`ConfigError::Read`] if the file cannot be read (including when it
/// does not exist) and [`ConfigError::Parse`] if it is not a JSON object.
pub fn read_palette_file(path: &Path) -> Result<PaletteFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merges the palette file at `path` over `palette`.
///
/// Failures leave `palette` as it was. Only debug logs are emitted here; the
/// caller decides whether [`PaletteLoad::diagnostic`] deserves a warning.
pub fn load_palette(path: &Path, mut palette: Palette) -> PaletteLoad {
    let outcome = match read_palette_file(path) {
        Ok(file) => {
            debug!(path = %path.display(), entries = file.colors.len(), "loaded palette file");
            palette.merge(file);
            LoadOutcome::Loaded(path.to_path_buf())
        }
        Err(err) if err.is_not_found() => {
            debug!(path = %path.display(), "no palette file, using defaults");
            LoadOutcome::Missing(path.to_path_buf())
        }
        Err(err) => {
            debug!(error = %err, "palette file unusable, keeping defaults");
            LoadOutcome::Failed(err)
        }
    };

    PaletteLoad { palette, outcome }
}
