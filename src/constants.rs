//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the wire-level input tokens.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Felt Board";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "feltboard";

/// Number of pockets on a European wheel (0 through 36).
pub const POCKET_COUNT: usize = 37;

/// Wire token that tells the bet engine to retract the last input.
pub const UNDO_TOKEN: &str = "-U";
