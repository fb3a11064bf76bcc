use log::trace as log_trace;

use crate::{
    cell::{Cell, Cells, ParseError},
    translator::{
        ResolvedTranslation, TranslationError,
        table::{CellTable, NUMBER_FOLLOWS, Symbol},
    },
};

/// Where the decoder is with respect to numeric mode
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Letters,
    /// A number indicator was read at the given cell but no digit yet
    NumberIndicated(usize),
    Digits,
}

/// State machine that reads braille one cell at a time.
///
/// A capital indicator applies to the next cell only. A number indicator
/// applies until a space or the end of the input.
#[derive(Debug)]
struct Decoder<'a> {
    table: &'a CellTable,
    /// The position of a capital indicator that has not been applied yet
    capital_pending: Option<usize>,
    mode: Mode,
}

impl<'a> Decoder<'a> {
    fn new(table: &'a CellTable) -> Self {
        Self {
            table,
            capital_pending: None,
            mode: Mode::Letters,
        }
    }

    fn in_number_mode(&self) -> bool {
        self.mode != Mode::Letters
    }

    /// Consume the cell at `position` and return the text it decodes to,
    /// indicators decode to nothing
    fn next(&mut self, position: usize, cell: &Cell) -> Result<String, TranslationError> {
        let invalid = |reason| TranslationError::InvalidSequence {
            cell: cell.to_string(),
            position,
            reason,
        };
        match self.table.symbol(cell) {
            Some(Symbol::CapitalFollows) => {
                if self.capital_pending.is_some() {
                    return Err(invalid("capital indicator after a capital indicator"));
                }
                self.capital_pending = Some(position);
                Ok(String::new())
            }
            Some(Symbol::NumberFollows) => {
                if self.capital_pending.is_some() {
                    return Err(invalid("number indicator after a capital indicator"));
                }
                if self.in_number_mode() {
                    return Err(invalid("number indicator in numeric mode"));
                }
                self.mode = Mode::NumberIndicated(position);
                Ok(String::new())
            }
            Some(Symbol::Space) => {
                if self.capital_pending.is_some() {
                    return Err(invalid("space after a capital indicator"));
                }
                if let Mode::NumberIndicated(start) = self.mode {
                    return Err(TranslationError::InvalidSequence {
                        cell: NUMBER_FOLLOWS.to_string(),
                        position: start,
                        reason: "number indicator not followed by a digit",
                    });
                }
                self.mode = Mode::Letters;
                Ok(" ".to_string())
            }
            _ if self.in_number_mode() => {
                let digit = self
                    .table
                    .digit_of(cell)
                    .ok_or_else(|| TranslationError::UnknownCell {
                        cell: cell.to_string(),
                        position,
                    })?;
                if self.capital_pending.is_some() {
                    return Err(invalid("digit after a capital indicator"));
                }
                self.mode = Mode::Digits;
                Ok(digit.to_string())
            }
            Some(Symbol::Letter(letter)) => match self.capital_pending.take() {
                Some(_) => Ok(letter.to_ascii_uppercase().to_string()),
                None => Ok(letter.to_string()),
            },
            None => Err(TranslationError::UnknownCell {
                cell: cell.to_string(),
                position,
            }),
        }
    }

    /// Check that no indicator is left dangling at the end of the input
    fn finish(self) -> Result<(), TranslationError> {
        if let Some(position) = self.capital_pending {
            return Err(TranslationError::DanglingCapital { position });
        }
        if let Mode::NumberIndicated(position) = self.mode {
            return Err(TranslationError::InvalidSequence {
                cell: NUMBER_FOLLOWS.to_string(),
                position,
                reason: "number indicator not followed by a digit",
            });
        }
        Ok(())
    }
}

/// Translate braille back to English. The input has to consist of complete
/// cells, otherwise nothing is translated.
pub fn trace(
    table: &CellTable,
    input: &str,
) -> Result<Vec<ResolvedTranslation>, TranslationError> {
    let cells: Cells = input.parse().map_err(|e| match e {
        ParseError::InvalidLength { length } => TranslationError::TruncatedCell { length },
        ParseError::InvalidBraille { .. } => TranslationError::UnclassifiableInput,
    })?;

    let mut decoder = Decoder::new(table);
    let mut translations = Vec::with_capacity(cells.len());
    for (position, cell) in cells.iter().enumerate() {
        let output = decoder.next(position, cell)?;
        log_trace!("{} → {:?}", cell, output);
        translations.push(ResolvedTranslation::new(&cell.to_string(), &output));
    }
    decoder.finish()?;
    Ok(translations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(input: &str) -> Result<String, TranslationError> {
        let table = CellTable::new();
        Ok(trace(&table, input)?.iter().map(|t| t.output()).collect())
    }

    #[test]
    fn letters() {
        assert_eq!(translate("O....."), Ok("a".to_string()));
        assert_eq!(translate("O.....O.O...OO...."), Ok("abc".to_string()));
        assert_eq!(translate("O...........O.O..."), Ok("a b".to_string()));
    }

    #[test]
    fn capital_indicator() {
        assert_eq!(translate(".....OO....."), Ok("A".to_string()));
        assert_eq!(
            translate(".....OO.....O.O...OO...."),
            Ok("Abc".to_string())
        );
        assert_eq!(
            translate(".....OO..........OO.O..."),
            Ok("AB".to_string())
        );
    }

    #[test]
    fn number_indicator() {
        assert_eq!(translate(".O.OOOO....."), Ok("1".to_string()));
        assert_eq!(translate(".O.OOO.OOO.."), Ok("0".to_string()));
        assert_eq!(
            translate(".O.OOOO.....O.O.........O....."),
            Ok("12 a".to_string())
        );
        // numeric mode lasts until a space, letter cells read as digits
        assert_eq!(
            translate(".O.OOOO.....O....."),
            Ok("11".to_string())
        );
    }

    #[test]
    fn space_ends_number_mode() {
        assert_eq!(
            translate(".O.OOOO...........O....."),
            Ok("1 a".to_string())
        );
    }

    #[test]
    fn truncated() {
        assert_eq!(
            translate(".O.OO"),
            Err(TranslationError::TruncatedCell { length: 5 })
        );
        assert_eq!(
            translate("O.....O"),
            Err(TranslationError::TruncatedCell { length: 7 })
        );
    }

    #[test]
    fn unknown_cells() {
        assert_eq!(
            translate("O.....OOOOOO"),
            Err(TranslationError::UnknownCell {
                cell: "OOOOOO".to_string(),
                position: 1
            })
        );
        // k has no digit
        assert_eq!(
            translate(".O.OOOO...O."),
            Err(TranslationError::UnknownCell {
                cell: "O...O.".to_string(),
                position: 1
            })
        );
    }

    #[test]
    fn invalid_sequences() {
        for braille in [
            ".....O.....OO.....",
            ".....O.O.OOOO.....",
            ".....O......O.....",
            ".O.OOO.....OO.....",
            ".O.OOO.O.OOOO.....",
            ".O.OOO......O.....",
            ".O.OOO",
        ] {
            assert!(
                matches!(
                    translate(braille),
                    Err(TranslationError::InvalidSequence { .. })
                ),
                "{}",
                braille
            );
        }
    }

    #[test]
    fn invalid_sequence_names_the_cell() {
        assert_eq!(
            translate(".....O.O.OOOO....."),
            Err(TranslationError::InvalidSequence {
                cell: ".O.OOO".to_string(),
                position: 1,
                reason: "number indicator after a capital indicator",
            })
        );
        // an empty number is reported at its indicator
        assert_eq!(
            translate("O......O.OOO......"),
            Err(TranslationError::InvalidSequence {
                cell: ".O.OOO".to_string(),
                position: 1,
                reason: "number indicator not followed by a digit",
            })
        );
    }

    #[test]
    fn dangling_capital() {
        assert_eq!(
            translate(".....O"),
            Err(TranslationError::DanglingCapital { position: 0 })
        );
        assert_eq!(
            translate("O..........O"),
            Err(TranslationError::DanglingCapital { position: 1 })
        );
    }

    #[test]
    fn indicators_have_no_output() {
        let table = CellTable::new();
        let trace = trace(&table, ".....OO.....").unwrap();
        assert_eq!(
            trace,
            vec![
                ResolvedTranslation::new(".....O", ""),
                ResolvedTranslation::new("O.....", "A"),
            ]
        );
    }
}
