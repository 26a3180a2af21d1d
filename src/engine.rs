//! Contract seam between the felt panel and a bet engine.
//!
//! The panel does not know anything about betting strategy. It emits
//! normalized wire tokens to exactly one registered [`InputSink`] and answers
//! the [`BetInput`] pass-through query. Any bet engine that wants to consume
//! the panel implements `InputSink`; the panel side of the contract is
//! implemented by [`crate::panel::NumberPanel`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::UNDO_TOKEN;

/// Consumer of normalized input tokens.
///
/// Exactly one sink is registered with a panel. Tokens are the wire contract:
/// a decimal numeral `"0"`..`"36"` for a spun number, or [`UNDO_TOKEN`] to
/// retract the last input.
pub trait InputSink {
    /// Called once for every emitted token, in emission order.
    fn on_new_input(&mut self, token: &str);
}

/// Query side of the bet-engine contract.
///
/// The host passes an input string and a bet string through every loaded
/// skin. An input panel does not transform bets: the contract requires the
/// bet string back unchanged, with the input string reserved for skins that
/// do react to it.
pub trait BetInput {
    /// Processes incoming input and bet strings, returning the processed bet.
    fn input(&mut self, input_string: &str, bet_string: &str) -> String;
}

// Single-threaded shared sinks: the TUI reads the tape it also registers.
impl<S: InputSink> InputSink for Rc<RefCell<S>> {
    fn on_new_input(&mut self, token: &str) {
        self.borrow_mut().on_new_input(token);
    }
}

/// In-memory token tape: the default sink wired up by the binary.
///
/// Keeps the raw emission log plus the spin list with undos applied, so the
/// status bar can show what the panel has sent. Nothing is persisted.
#[derive(Debug, Default)]
pub struct TokenTape {
    /// Every token in emission order, undos included.
    sent: Vec<String>,
    /// Spun numbers with undo tokens applied.
    spins: Vec<u8>,
}

impl TokenTape {
    /// Creates an empty tape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one emitted token.
    ///
    /// An undo token retracts the most recent spin; an undo on an empty tape
    /// is kept in the raw log but retracts nothing.
    pub fn record(&mut self, token: &str) {
        if token == UNDO_TOKEN {
            self.spins.pop();
        } else if let Some(number) = Self::parse_spin(token) {
            self.spins.push(number);
        }
        self.sent.push(token.to_string());
    }

    /// Parses a number token into a pocket number.
    fn parse_spin(token: &str) -> Option<u8> {
        token
            .parse::<u8>()
            .ok()
            .filter(|n| (*n as usize) < crate::constants::POCKET_COUNT)
    }

    /// Raw emission log, in order.
    #[must_use]
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    /// Spin history with undos applied.
    #[must_use]
    pub fn spins(&self) -> &[u8] {
        &self.spins
    }

    /// The most recently emitted token, if any.
    #[must_use]
    pub fn last_sent(&self) -> Option<&str> {
        self.sent.last().map(String::as_str)
    }
}

impl InputSink for TokenTape {
    fn on_new_input(&mut self, token: &str) {
        self.record(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tape_records_numbers() {
        let mut tape = TokenTape::new();
        tape.on_new_input("17");
        tape.on_new_input("0");
        assert_eq!(tape.spins(), &[17, 0]);
        assert_eq!(tape.sent(), &["17".to_string(), "0".to_string()]);
        assert_eq!(tape.last_sent(), Some("0"));
    }

    #[test]
    fn test_undo_retracts_last_spin() {
        let mut tape = TokenTape::new();
        tape.on_new_input("5");
        tape.on_new_input("23");
        tape.on_new_input(UNDO_TOKEN);
        assert_eq!(tape.spins(), &[5]);
        // Raw log keeps the undo itself
        assert_eq!(tape.sent().len(), 3);
        assert_eq!(tape.last_sent(), Some(UNDO_TOKEN));
    }

    #[test]
    fn test_undo_on_empty_tape_is_harmless() {
        let mut tape = TokenTape::new();
        tape.on_new_input(UNDO_TOKEN);
        assert!(tape.spins().is_empty());
        assert_eq!(tape.sent(), &[UNDO_TOKEN.to_string()]);
    }

    #[test]
    fn test_shared_tape_sink() {
        let tape = Rc::new(RefCell::new(TokenTape::new()));
        let mut sink = Rc::clone(&tape);
        sink.on_new_input("12");
        assert_eq!(tape.borrow().spins(), &[12]);
    }
}
