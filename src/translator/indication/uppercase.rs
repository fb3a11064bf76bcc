//! Uppercase Braille indication
//!
//! Only single letter capitalization is supported: every uppercase letter is
//! preceded by its own [`Indicator::capsletter`] cell. There are no word or
//! passage indicators, so unlike the numeric indicator there is no state that
//! carries over from one letter to the next.

use crate::{cell::Cell, translator::indication::Indication};

use std::collections::HashSet;

/// A builder for [`Indicator`]
#[derive(Debug)]
pub struct IndicatorBuilder(Indicator);

impl IndicatorBuilder {
    pub fn new() -> Self {
        IndicatorBuilder(Indicator {
            uppercase_chars: HashSet::default(),
            capsletter: None,
        })
    }

    pub fn build(self) -> Indicator {
        self.0
    }

    pub fn capsletter(mut self, cell: Cell) -> Self {
        self.0.capsletter = Some(cell);
        self
    }

    pub fn uppercase_characters(mut self, chars: HashSet<char>) -> Self {
        self.0.uppercase_chars = chars;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Indicator {
    /// The set of characters that need an [`Indication::UppercaseLetter`]
    uppercase_chars: HashSet<char>,
    /// The cell to indicate a single uppercase letter
    capsletter: Option<Cell>,
}

impl Indicator {
    /// The transition method of the uppercase indication state machine.
    ///
    /// Returns [`Indication::UppercaseLetter`] for every uppercase letter at
    /// the start of `s`, the indication never extends to the next letter.
    pub fn next(&self, s: &str) -> Option<Indication> {
        let Some(c) = s.chars().next() else {
            return None;
        };
        if self.capsletter.is_some() && self.uppercase_chars.contains(&c) {
            Some(Indication::UppercaseLetter)
        } else {
            None
        }
    }

    pub fn capsletter(&self) -> Option<Cell> {
        self.capsletter
    }
}
