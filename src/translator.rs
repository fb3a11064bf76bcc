//! Translation between English and six dot braille
//!
//! The direction of a translation is either given explicitly or detected from
//! the input with [`classify`]. Both directions produce a trace, a list of
//! [`ResolvedTranslation`]s, and the translation is the concatenation of
//! their outputs.

use log::debug;

use crate::classifier::{Classification, classify, is_english};

mod backward;
mod forward;
pub mod indication;
pub mod table;

pub use table::CellTable;

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum TranslationError {
    #[error("missing required cli arguments")]
    MissingArguments,
    #[error("the supplied input is neither English nor braille")]
    UnclassifiableInput,
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },
    #[error("braille of length {length} does not consist of complete cells")]
    TruncatedCell { length: usize },
    #[error("unknown cell {cell} at cell {position}")]
    UnknownCell { cell: String, position: usize },
    #[error("invalid sequence at cell {position} ({cell}): {reason}")]
    InvalidSequence {
        cell: String,
        position: usize,
        reason: &'static str,
    },
    #[error("capital indicator at cell {position} is not followed by a letter")]
    DanglingCapital { position: usize },
}

impl TranslationError {
    /// Name of the error kind, independent of its context
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationError::MissingArguments => "MissingArguments",
            TranslationError::UnclassifiableInput => "UnclassifiableInput",
            TranslationError::UnsupportedCharacter { .. } => "UnsupportedCharacter",
            TranslationError::TruncatedCell { .. } => "TruncatedCell",
            TranslationError::UnknownCell { .. } => "UnknownCell",
            TranslationError::InvalidSequence { .. } => "InvalidSequence",
            TranslationError::DanglingCapital { .. } => "DanglingCapital",
        }
    }
}

/// Direction of a translation
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    /// From English to braille
    Forward,
    /// From braille back to English
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// One step of a translation, the `input` that was consumed and the
/// `output` that was produced for it. Indicators have an empty input in the
/// forward direction and an empty output in the backward direction.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ResolvedTranslation {
    input: String,
    output: String,
}

impl ResolvedTranslation {
    pub fn new(input: &str, output: &str) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

/// Join the words given on the command line with single spaces and trim the
/// result. Nothing left to translate is a [`TranslationError::MissingArguments`].
pub fn prepare_input(words: &[String]) -> Result<String, TranslationError> {
    let input = words.join(" ").trim().to_string();
    if input.is_empty() {
        return Err(TranslationError::MissingArguments);
    }
    Ok(input)
}

/// Decide the direction of a translation from the input.
///
/// Braille goes backward and English goes forward. Input that is neither is
/// rejected. If it contains letters or digits it is taken as English with
/// characters that cannot be translated, and the first of those is reported.
pub fn detect_direction(input: &str) -> Result<Direction, TranslationError> {
    let classification = classify(input);
    debug!("input classified as {:?}", classification);
    match classification {
        Classification::Braille => Ok(Direction::Backward),
        Classification::English => Ok(Direction::Forward),
        Classification::Other => {
            if !input.chars().any(char::is_alphanumeric) {
                return Err(TranslationError::UnclassifiableInput);
            }
            match input.chars().enumerate().find(|(_, c)| !is_english(*c)) {
                Some((position, character)) => Err(TranslationError::UnsupportedCharacter {
                    character,
                    position,
                }),
                None => Err(TranslationError::UnclassifiableInput),
            }
        }
    }
}

/// Trace the translation of `input`, detecting its direction
pub fn trace(input: &str) -> Result<Vec<ResolvedTranslation>, TranslationError> {
    let direction = detect_direction(input)?;
    trace_with(direction, input)
}

/// Trace the translation of `input` in the given `direction`
pub fn trace_with(
    direction: Direction,
    input: &str,
) -> Result<Vec<ResolvedTranslation>, TranslationError> {
    if input.is_empty() {
        return Err(TranslationError::UnclassifiableInput);
    }
    debug!("translating {:?} {}", input, direction);
    let table = CellTable::standard();
    match direction {
        Direction::Forward => forward::trace(table, input),
        Direction::Backward => {
            if classify(input) != Classification::Braille {
                return Err(TranslationError::UnclassifiableInput);
            }
            backward::trace(table, input)
        }
    }
}

/// Translate `input` to braille or back to English, whichever it is not
pub fn translate(input: &str) -> Result<String, TranslationError> {
    Ok(trace(input)?.iter().map(|t| t.output()).collect())
}

/// Translate `input` in the given `direction`
pub fn translate_with(direction: Direction, input: &str) -> Result<String, TranslationError> {
    Ok(trace_with(direction, input)?
        .iter()
        .map(|t| t.output())
        .collect())
}

/// Translate English to braille
pub fn encode(input: &str) -> Result<String, TranslationError> {
    translate_with(Direction::Forward, input)
}

/// Translate braille to English
pub fn decode(input: &str) -> Result<String, TranslationError> {
    translate_with(Direction::Backward, input)
}
