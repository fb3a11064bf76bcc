//! Translate between English and six dot braille rendered as ASCII
//!
//! A braille cell is written as six characters, `O` for a raised dot and `.`
//! for an unraised one. Letters, digits and spaces are supported, uppercase
//! letters and digits are marked with indicator cells.
//!
//! ```
//! assert_eq!(braille::translate("Hi"), Ok(".....OO.OO...OO...".to_string()));
//! assert_eq!(braille::translate(".....OO.OO...OO..."), Ok("Hi".to_string()));
//! ```

pub mod cell;
pub mod check;
pub mod classifier;
pub mod translator;
pub mod yaml;

pub use classifier::{Classification, classify};
pub use translator::{
    Direction, ResolvedTranslation, TranslationError, decode, encode, prepare_input, trace,
    trace_with, translate, translate_with,
};
