//! The number panel: input tracking and hover color state for the felt.
//!
//! This is the core of the application and is deliberately free of any
//! terminal dependency. The panel owns two construction-time lookup tables
//! (the default color table indexed by pocket number, and the control color
//! map keyed by control identity), the current appearance of every control,
//! and the single registered [`InputSink`]. The TUI layer translates terminal
//! events into the operations below; tests drive them directly.

use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::constants::{POCKET_COUNT, UNDO_TOKEN};
use crate::engine::{BetInput, InputSink};
use crate::models::felt::{self, FeltPalette, UNDO_CONTROL};
use crate::models::RgbColor;

/// Current display colors of one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    /// Background (the felt color of the control).
    pub background: RgbColor,
    /// Foreground (label color).
    pub foreground: RgbColor,
}

/// The 37-pocket input panel plus its undo control.
///
/// Constructed once from the set of controls and their initial colors; both
/// lookup tables are read-only afterwards. Every interactive operation mirrors
/// one event of the original input surface: click, undo action, hover-enter,
/// hover-leave.
pub struct NumberPanel {
    /// Fixed palette (highlight pair, neutral foreground, undo navy).
    palette: FeltPalette,
    /// Default color table: index = pocket number. Read-only after construction.
    default_colors: [RgbColor; POCKET_COUNT],
    /// Control color map: identity -> default background, undo included.
    /// Read-only after construction.
    control_defaults: HashMap<String, RgbColor>,
    /// Current appearance of every control.
    appearance: HashMap<String, Appearance>,
    /// The one registered consumer of emitted tokens.
    sink: Box<dyn InputSink>,
}

impl std::fmt::Debug for NumberPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberPanel")
            .field("palette", &self.palette)
            .field("default_colors", &self.default_colors)
            .field("control_defaults", &self.control_defaults)
            .field("appearance", &self.appearance)
            .field("sink", &"<dyn InputSink>")
            .finish()
    }
}

impl NumberPanel {
    /// Builds a panel from pre-existing controls.
    ///
    /// `controls` must contain every number control `number0`..`number36`
    /// (any order, each exactly once) plus the undo control. Each number
    /// control's initial color is recorded, in index order, into the default
    /// color table and the control color map. The undo control's map entry is
    /// always the palette's fixed undo color, regardless of the color it was
    /// supplied with. Unknown extra controls are ignored.
    ///
    /// # Errors
    ///
    /// Fails fast with a descriptive error when a number control is missing
    /// or duplicated, or when the undo control is absent.
    pub fn new(
        controls: &[(String, RgbColor)],
        palette: FeltPalette,
        sink: Box<dyn InputSink>,
    ) -> Result<Self> {
        let mut by_name: HashMap<&str, RgbColor> = HashMap::new();
        for (name, color) in controls {
            if by_name.insert(name.as_str(), *color).is_some() {
                bail!("Duplicate control identity '{name}'");
            }
        }
        if !by_name.contains_key(UNDO_CONTROL) {
            bail!("Undo control '{UNDO_CONTROL}' not found");
        }

        let mut default_colors = [RgbColor::default(); POCKET_COUNT];
        let mut control_defaults = HashMap::with_capacity(POCKET_COUNT + 1);
        let mut appearance = HashMap::with_capacity(POCKET_COUNT + 1);

        for number in 0..POCKET_COUNT {
            let name = felt::control_name(number as u8);
            let Some(color) = by_name.get(name.as_str()) else {
                bail!(
                    "Number control '{name}' not found; a panel needs all {POCKET_COUNT} \
                     number controls"
                );
            };
            default_colors[number] = *color;
            control_defaults.insert(name.clone(), *color);
            appearance.insert(
                name,
                Appearance {
                    background: *color,
                    foreground: palette.neutral_foreground,
                },
            );
        }

        control_defaults.insert(UNDO_CONTROL.to_string(), palette.undo);
        appearance.insert(
            UNDO_CONTROL.to_string(),
            Appearance {
                background: palette.undo,
                foreground: palette.neutral_foreground,
            },
        );

        Ok(Self {
            palette,
            default_colors,
            control_defaults,
            appearance,
            sink,
        })
    }

    /// Builds the standard felt: every pocket colored by classification,
    /// undo on its fixed color.
    ///
    /// # Errors
    ///
    /// Construction of the standard control set cannot itself be short, so
    /// this only fails if panel validation does.
    pub fn with_standard_felt(palette: FeltPalette, sink: Box<dyn InputSink>) -> Result<Self> {
        let mut controls: Vec<(String, RgbColor)> = (0..POCKET_COUNT as u8)
            .map(|n| (felt::control_name(n), palette.pocket_color(n)))
            .collect();
        controls.push((UNDO_CONTROL.to_string(), palette.undo));
        Self::new(&controls, palette, sink)
    }

    /// A click on a control: emits one normalized token to the sink.
    ///
    /// The token is the decimal numeral parsed out of the control identity;
    /// parse failure is the undo discriminator, not an error.
    pub fn click(&mut self, control: &str) {
        let token = match felt::parse_control_number(control) {
            Some(number) => number.to_string(),
            None => UNDO_TOKEN.to_string(),
        };
        self.sink.on_new_input(&token);
    }

    /// The undo action (menu/key path): always emits the undo token.
    pub fn undo_action(&mut self) {
        self.sink.on_new_input(UNDO_TOKEN);
    }

    /// Pointer entered a control.
    ///
    /// The entered control takes the highlight pair; every other control in
    /// the map is reset to its own stored default with the neutral
    /// foreground. The highlight is therefore single-valued without tracking
    /// a "currently hovered" control.
    pub fn hover_enter(&mut self, control: &str) {
        if !self.control_defaults.contains_key(control) {
            return;
        }
        for (name, appearance) in &mut self.appearance {
            if name == control {
                appearance.background = self.palette.highlight;
                appearance.foreground = self.palette.highlight_foreground;
            } else {
                appearance.background = self.control_defaults[name];
                appearance.foreground = self.palette.neutral_foreground;
            }
        }
    }

    /// Pointer left a control: restore its default colors.
    ///
    /// Number controls restore from the default color table at the parsed
    /// index; the undo control (any identity that fails the parse) restores
    /// the fixed undo color.
    pub fn hover_leave(&mut self, control: &str) {
        let Some(entry) = self.appearance.get_mut(control) else {
            return;
        };
        entry.background = match felt::parse_control_number(control) {
            Some(number) => self.default_colors[number as usize],
            None => self.palette.undo,
        };
        entry.foreground = self.palette.neutral_foreground;
    }

    /// Current appearance of a control.
    #[must_use]
    pub fn appearance(&self, control: &str) -> Option<Appearance> {
        self.appearance.get(control).copied()
    }

    /// Default color of a pocket, from the construction-time table.
    #[must_use]
    pub fn default_color(&self, number: u8) -> RgbColor {
        self.default_colors[number as usize]
    }

    /// Default color of a control, from the construction-time map.
    #[must_use]
    pub fn mapped_default(&self, control: &str) -> Option<RgbColor> {
        self.control_defaults.get(control).copied()
    }

    /// The fixed palette the panel was built with.
    #[must_use]
    pub fn palette(&self) -> &FeltPalette {
        &self.palette
    }
}

impl BetInput for NumberPanel {
    /// Pass-through: the bet string comes back unchanged. The input string is
    /// reserved by the contract and unused by an input panel.
    fn input(&mut self, _input_string: &str, bet_string: &str) -> String {
        bet_string.to_string()
    }
}
