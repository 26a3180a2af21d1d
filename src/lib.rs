//! Felt Board Library
//!
//! This library provides core functionality for the Felt Board application:
//! the 37-pocket number panel, the bet-engine contract seam, felt data and
//! colors, and the terminal UI built on Ratatui.

// Module declarations
pub mod config;
pub mod constants;
pub mod engine;
pub mod models;
pub mod panel;
pub mod shortcuts;
pub mod tui;
