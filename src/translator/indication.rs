//! Braille indication
//!
//! Braille indicators are cells which are inserted into the braille text to
//! indicate that the following cell(s) have to be read differently, such as
//! an uppercase letter or a digit.
//!
//! Braille indication is handled with the help of simple state machines that
//! keep track in which state a translation currently is. When given the next
//! pending character(s) to translate, they keep track of state changes and
//! will notify the caller whether an indication is required by optionally
//! returning an [`Indication`].
//!
//! * [`numeric::Indicator`]: knows whether the translation is in numeric mode
//! * [`uppercase::Indicator`]: knows whether the next letter needs a capital indicator

pub mod numeric;
pub mod uppercase;

/// Possible indication events that the indicator state machine(s) support
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Indication {
    /// A run of digits starts
    NumericStart,
    /// The next letter is uppercase
    UppercaseLetter,
}
