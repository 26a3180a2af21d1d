//! Centralized shortcut and action system.
//!
//! Keyboard input is resolved into semantic actions here, keeping the event
//! handler free of key-matching and the status bar hints in one place with
//! the bindings they describe.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible keyboard actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the cursor up one control
    NavigateUp,
    /// Move the cursor down one control
    NavigateDown,
    /// Move the cursor left one control
    NavigateLeft,
    /// Move the cursor right one control
    NavigateRight,
    /// Click the control under the cursor
    Activate,
    /// Emit the undo token (menu path, independent of the cursor)
    Undo,
    /// Toggle the about overlay
    About,
    /// Dismiss the active overlay
    Cancel,
    /// Quit the application
    Quit,
}

/// Maps key events to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<(KeyCode, KeyModifiers), Action>,
}

impl ShortcutRegistry {
    /// Creates the registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code, action| {
            bindings.insert((code, KeyModifiers::NONE), action);
        };

        bind(KeyCode::Up, Action::NavigateUp);
        bind(KeyCode::Char('k'), Action::NavigateUp);
        bind(KeyCode::Down, Action::NavigateDown);
        bind(KeyCode::Char('j'), Action::NavigateDown);
        bind(KeyCode::Left, Action::NavigateLeft);
        bind(KeyCode::Char('h'), Action::NavigateLeft);
        bind(KeyCode::Right, Action::NavigateRight);
        bind(KeyCode::Char('l'), Action::NavigateRight);
        bind(KeyCode::Enter, Action::Activate);
        bind(KeyCode::Char(' '), Action::Activate);
        bind(KeyCode::Char('u'), Action::Undo);
        bind(KeyCode::Char('a'), Action::About);
        bind(KeyCode::Esc, Action::Cancel);
        bind(KeyCode::Char('q'), Action::Quit);

        Self { bindings }
    }

    /// Looks up the action bound to a key event.
    #[must_use]
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        self.bindings.get(&(key.code, key.modifiers)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
