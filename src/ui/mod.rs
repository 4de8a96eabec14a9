//! User interface module.
//!
//! This module contains all UI-related functionality, including:
//! - CLI argument parsing and palette discovery (cli module)
//! - Output formatting and color decisions (output module)

pub mod cli;
pub mod output;
