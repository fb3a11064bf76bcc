//! Detect whether an input is braille, English or neither

use crate::cell::is_braille_dot;

/// The kind of text an input was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Every character is `O` or `.`
    Braille,
    /// Every character is a letter, a digit or a space
    English,
    Other,
}

/// Characters accepted as English. Unicode letters and digits are let through
/// here, the encoder decides which of them it has cells for. Letters are the
/// `Alphabetic` property, which includes spacing marks such as U+093E.
pub fn is_english(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || c == ' '
}

/// Classify `input`. Braille takes precedence, so that the braille rendering
/// is never mistaken for English even though `O` is a letter. The braille
/// check does not look at the length, that is left to the decoder.
pub fn classify(input: &str) -> Classification {
    if input.is_empty() {
        Classification::Other
    } else if input.chars().all(is_braille_dot) {
        Classification::Braille
    } else if input.chars().all(is_english) {
        Classification::English
    } else {
        Classification::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_braille() {
        assert_eq!(classify(".....OO....."), Classification::Braille);
        assert_eq!(classify(".O.OO"), Classification::Braille);
        assert_eq!(classify("O"), Classification::Braille);
        assert_eq!(classify("OOO"), Classification::Braille);
    }

    #[test]
    fn classify_english() {
        assert_eq!(classify("Abc"), Classification::English);
        assert_eq!(classify("Abc 123"), Classification::English);
        assert_eq!(classify("hello world"), Classification::English);
        assert_eq!(classify("42"), Classification::English);
        // accepted here, rejected by the encoder
        assert_eq!(classify("café"), Classification::English);
        assert_eq!(classify("\u{093E}"), Classification::English);
    }

    #[test]
    fn classify_other() {
        assert_eq!(classify(""), Classification::Other);
        assert_eq!(classify("hello!"), Classification::Other);
        assert_eq!(classify("O.O\t..."), Classification::Other);
        assert_eq!(classify("a.b"), Classification::Other);
    }
}
