//! Data models for the felt and its colors.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of UI and business logic.

pub mod felt;
pub mod rgb;

// Re-export all model types
pub use felt::{FeltPalette, PocketColor};
pub use rgb::RgbColor;
