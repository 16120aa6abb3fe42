//! L-System Grammar - Production rules and turtle actions
//!
//! An immutable Lindenmayer system definition: a start string, a
//! symbol → replacement map (identity when absent), a symbol → turtle
//! action map (absent means pure syntax), and a fixed turn angle.

use std::collections::HashMap;

/// Turtle effect of a single symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Draw,
    RotateRight,
    RotateLeft,
    PushState,
    PopState,
}

/// Immutable L-system definition, constructed once per preset and
/// shared by reference across expansions
#[derive(Debug, Clone)]
pub struct Grammar {
    start: String,
    productions: HashMap<char, String>,
    actions: HashMap<char, Action>,
    turn_degrees: f64,
}

impl Grammar {
    pub fn new(
        start: &str,
        productions: &[(char, &str)],
        actions: &[(char, Action)],
        turn_degrees: f64,
    ) -> Self {
        Self {
            start: start.to_string(),
            productions: productions
                .iter()
                .map(|&(symbol, replacement)| (symbol, replacement.to_string()))
                .collect(),
            actions: actions.iter().copied().collect(),
            turn_degrees,
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// Replacement string for `symbol`. None means the symbol rewrites
    /// to itself.
    pub fn replacement(&self, symbol: char) -> Option<&str> {
        self.productions.get(&symbol).map(String::as_str)
    }

    /// Turtle action for `symbol`. None means the symbol has no turtle
    /// effect (pure syntax, e.g. the plant's X).
    pub fn action(&self, symbol: char) -> Option<Action> {
        self.actions.get(&symbol).copied()
    }

    /// Turn increment in degrees applied per rotate action
    pub fn turn_degrees(&self) -> f64 {
        self.turn_degrees
    }
}
