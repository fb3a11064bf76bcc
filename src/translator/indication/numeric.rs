//! Numeric Braille indication
//!
//! [`Indicator`] is a simple state machine to keep track of the state of a
//! translation. As soon as a character is encountered that is in the set of
//! [`Indicator::numeric_chars`] the state is changed to [`State::Numeric`].
//! Any other character, including the space, changes the state back to
//! [`State::Default`].
//!
//! An indication for a start is only emitted if there is a
//! [`Indicator::start_indicator`] and the state is changed to
//! `State::Numeric`. The end of a run needs no indicator.

use crate::{cell::Cell, translator::indication::Indication};

use std::collections::HashSet;

/// Possible states for the [`Indicator`] state machine
#[derive(Debug, Clone, PartialEq)]
enum State {
    Default,
    Numeric,
}

/// A builder for [`Indicator`]
#[derive(Debug)]
pub struct IndicatorBuilder(Indicator);

impl IndicatorBuilder {
    pub fn new() -> Self {
        IndicatorBuilder(Indicator {
            state: State::Default,
            numeric_chars: HashSet::default(),
            start_indicator: None,
        })
    }

    pub fn build(self) -> Indicator {
        self.0
    }

    pub fn numsign(mut self, cell: Cell) -> Self {
        self.0.start_indicator = Some(cell);
        self
    }

    pub fn numeric_characters(mut self, chars: HashSet<char>) -> Self {
        self.0.numeric_chars = chars;
        self
    }
}

/// A very simple state machine to keep track when a numeric indication is
/// required
#[derive(Debug, Clone)]
pub struct Indicator {
    state: State,
    /// The set of characters that will trigger a state change to the
    /// [State::Numeric] mode
    numeric_chars: HashSet<char>,
    /// The cell to indicate the start of a sequence of numerical characters
    start_indicator: Option<Cell>,
}

impl Indicator {
    /// The transition method of the numeric indication state machine.
    ///
    /// Takes a string slice to examine the next character. Returns an
    /// [Indication] when entering numeric mode or `None` when no indication
    /// is needed (or there is no `numsign`).
    pub fn next(&mut self, s: &str) -> Option<Indication> {
        let Some(c) = s.chars().next() else {
            return None;
        };
        if self.start_indicator.is_none() {
            return None;
        }
        match (&self.state, self.numeric_chars.contains(&c)) {
            (State::Default, true) => {
                self.state = State::Numeric;
                Some(Indication::NumericStart)
            }
            (State::Numeric, false) => {
                self.state = State::Default;
                None
            }
            _ => None,
        }
    }

    pub fn start_indicator(&self) -> Option<Cell> {
        self.start_indicator
    }
}
