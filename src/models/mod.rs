//! Data models and serialization helpers.
//!
//! This module contains the color palette used to paint the progress bar and
//! the custom deserializer that normalizes palette files.
pub mod palette;
pub mod serde_helpers;
