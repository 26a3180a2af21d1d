//! European felt data: pocket classification, control naming, and table geometry.
//!
//! Everything the panel needs to know about the felt itself lives here,
//! independent of any terminal rendering: which pockets are red, black, or
//! green, how controls are named, where each pocket sits on the classic
//! three-row table grid, and the fixed palette the panel starts from.

use serde::{Deserialize, Serialize};

use crate::constants::POCKET_COUNT;
use crate::models::RgbColor;

/// Prefix shared by every number control identity (`number0`..`number36`).
pub const NUMBER_CONTROL_PREFIX: &str = "number";

/// Identity of the undo control.
///
/// Deliberately does not start with [`NUMBER_CONTROL_PREFIX`]: failing the
/// numeral parse is how the undo control is recognized.
pub const UNDO_CONTROL: &str = "undo";

/// Rows on the number grid (street rows of the table layout).
pub const GRID_ROWS: usize = 3;

/// Columns on the number grid (one per street of three numbers).
pub const GRID_COLS: usize = 12;

/// The 18 red pockets of a European wheel.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Felt color class of a single pocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PocketColor {
    /// The zero pocket.
    Green,
    /// One of the 18 red pockets.
    Red,
    /// One of the 18 black pockets.
    Black,
}

impl PocketColor {
    /// Classifies a pocket number.
    #[must_use]
    pub fn of(number: u8) -> Self {
        if number == 0 {
            Self::Green
        } else if RED_NUMBERS.contains(&number) {
            Self::Red
        } else {
            Self::Black
        }
    }
}

/// Returns the control identity for a pocket number.
#[must_use]
pub fn control_name(number: u8) -> String {
    format!("{NUMBER_CONTROL_PREFIX}{number}")
}

/// Extracts the pocket number from a control identity.
///
/// Returns `None` when the identity carries no parseable numeral after the
/// prefix. The undo control lands here, and so does any foreign identity;
/// the caller treats parse failure as "this is the undo control".
#[must_use]
pub fn parse_control_number(name: &str) -> Option<u8> {
    name.strip_prefix(NUMBER_CONTROL_PREFIX)?.parse().ok()
}

/// Returns the `(row, col)` grid position of a nonzero pocket.
///
/// The grid follows the classic table layout: column `c` holds the street
/// `3c+1 ..= 3c+3`, with the highest number of each street on the top row.
/// Zero sits outside the grid (rendered as its own cell) and returns `None`.
#[must_use]
pub fn grid_position(number: u8) -> Option<(usize, usize)> {
    if number == 0 || number as usize >= POCKET_COUNT {
        return None;
    }
    let col = (number as usize - 1) / GRID_ROWS;
    let row = GRID_ROWS - 1 - (number as usize - 1) % GRID_ROWS;
    Some((row, col))
}

/// Returns the pocket number at a grid position.
#[must_use]
pub fn number_at(row: usize, col: usize) -> u8 {
    debug_assert!(row < GRID_ROWS && col < GRID_COLS);
    (col * GRID_ROWS + (GRID_ROWS - 1 - row) + 1) as u8
}

/// Fixed felt palette: the initial colors every control starts from.
///
/// These mirror the traditional felt: green zero, crimson reds, black blacks,
/// navy undo, yellow hover highlight. All of them can be overridden from the
/// config file before the panel is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeltPalette {
    /// Background of the zero pocket.
    pub green: RgbColor,
    /// Background of red pockets.
    pub red: RgbColor,
    /// Background of black pockets.
    pub black: RgbColor,
    /// Background of the undo control (the fixed navy default).
    pub undo: RgbColor,
    /// Background of whichever control the pointer is over.
    pub highlight: RgbColor,
    /// Foreground of the hovered control.
    pub highlight_foreground: RgbColor,
    /// Foreground of every control not hovered.
    pub neutral_foreground: RgbColor,
}

impl Default for FeltPalette {
    fn default() -> Self {
        Self {
            green: RgbColor::new(0, 128, 0),
            red: RgbColor::new(178, 34, 34),
            black: RgbColor::new(20, 20, 20),
            undo: RgbColor::new(0, 0, 128),
            highlight: RgbColor::new(255, 255, 0),
            highlight_foreground: RgbColor::new(0, 0, 0),
            neutral_foreground: RgbColor::new(255, 255, 255),
        }
    }
}

impl FeltPalette {
    /// Returns the default background for a pocket number under this palette.
    #[must_use]
    pub fn pocket_color(&self, number: u8) -> RgbColor {
        match PocketColor::of(number) {
            PocketColor::Green => self.green,
            PocketColor::Red => self.red,
            PocketColor::Black => self.black,
        }
    }
}
