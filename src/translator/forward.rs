use std::collections::HashSet;

use log::trace as log_trace;

use crate::translator::{
    ResolvedTranslation, TranslationError,
    indication::{Indication, numeric, uppercase},
    table::{CAPITAL_FOLLOWS, CellTable, NUMBER_FOLLOWS},
};

fn numeric_indicator(table: &CellTable) -> numeric::Indicator {
    let digits: HashSet<char> = table.digits().into_iter().map(|(c, _)| c).collect();
    numeric::IndicatorBuilder::new()
        .numsign(NUMBER_FOLLOWS)
        .numeric_characters(digits)
        .build()
}

fn uppercase_indicator(table: &CellTable) -> uppercase::Indicator {
    let uppercase: HashSet<char> = table
        .letters()
        .into_iter()
        .map(|(c, _)| c.to_ascii_uppercase())
        .collect();
    uppercase::IndicatorBuilder::new()
        .capsletter(CAPITAL_FOLLOWS)
        .uppercase_characters(uppercase)
        .build()
}

/// Translate English text to braille, one character at a time.
///
/// A run of digits is preceded by a single number indicator, the run ends at
/// the first character that is not a digit. Every uppercase letter is
/// preceded by its own capital indicator.
pub fn trace(
    table: &CellTable,
    input: &str,
) -> Result<Vec<ResolvedTranslation>, TranslationError> {
    let mut numeric = numeric_indicator(table);
    let uppercase = uppercase_indicator(table);
    let mut translations = Vec::new();

    for (position, (offset, c)) in input.char_indices().enumerate() {
        let pending = &input[offset..];
        let capital = uppercase.next(pending);
        let cell = match capital {
            Some(Indication::UppercaseLetter) => table.letter(c.to_ascii_lowercase()),
            _ => table.digit(c).or_else(|| table.letter(c)),
        }
        .ok_or(TranslationError::UnsupportedCharacter {
            character: c,
            position,
        })?;

        if let Some(Indication::NumericStart) = numeric.next(pending) {
            if let Some(indicator) = numeric.start_indicator() {
                log_trace!("number indicator before {:?}", c);
                translations.push(ResolvedTranslation::new("", &indicator.to_string()));
            }
        }
        if capital.is_some() {
            if let Some(indicator) = uppercase.capsletter() {
                log_trace!("capital indicator before {:?}", c);
                translations.push(ResolvedTranslation::new("", &indicator.to_string()));
            }
        }
        log_trace!("{:?} → {}", c, cell);
        translations.push(ResolvedTranslation::new(&c.to_string(), &cell.to_string()));
    }
    Ok(translations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(input: &str) -> Result<String, TranslationError> {
        let table = CellTable::new();
        Ok(trace(&table, input)?.iter().map(|t| t.output()).collect())
    }

    /// Number of cells the translation of `s` is expected to have
    fn expected_cells(s: &str) -> usize {
        let chars: Vec<char> = s.chars().collect();
        let uppercase = chars.iter().filter(|c| c.is_ascii_uppercase()).count();
        let digit_runs = chars
            .iter()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() && (*i == 0 || !chars[i - 1].is_ascii_digit()))
            .count();
        chars.len() + uppercase + digit_runs
    }

    #[test]
    fn lowercase() {
        assert_eq!(translate("a"), Ok("O.....".to_string()));
        assert_eq!(translate("abc"), Ok("O.....O.O...OO....".to_string()));
        assert_eq!(translate("a b"), Ok("O...........O.O...".to_string()));
    }

    #[test]
    fn capital_applies_to_single_letter() {
        assert_eq!(translate("A"), Ok(".....OO.....".to_string()));
        assert_eq!(
            translate("AB"),
            Ok(".....OO..........OO.O...".to_string())
        );
        assert_eq!(translate("Ab"), Ok(".....OO.....O.O...".to_string()));
    }

    #[test]
    fn number_indicator_spans_a_run() {
        assert_eq!(translate("1"), Ok(".O.OOOO.....".to_string()));
        assert_eq!(translate("0"), Ok(".O.OOO.OOO..".to_string()));
        assert_eq!(translate("12"), Ok(".O.OOOO.....O.O...".to_string()));
        assert_eq!(
            translate("1 2"),
            Ok(".O.OOOO............O.OOOO.O...".to_string())
        );
    }

    #[test]
    fn letter_ends_number_mode() {
        assert_eq!(
            translate("1a2"),
            Ok(".O.OOOO.....O......O.OOOO.O...".to_string())
        );
        assert_eq!(
            translate("9Z"),
            Ok(".O.OOO.OO........OO..OOO".to_string())
        );
    }

    #[test]
    fn cell_count() {
        for s in ["Abc 123", "42 a", "a1b22C333 d", "ABC", "x", "7 7 7"] {
            let braille = translate(s).unwrap();
            assert_eq!(braille.len() % 6, 0);
            assert_eq!(braille.len() / 6, expected_cells(s), "{}", s);
        }
    }

    #[test]
    fn unsupported_characters() {
        assert_eq!(
            translate("hello!"),
            Err(TranslationError::UnsupportedCharacter {
                character: '!',
                position: 5
            })
        );
        assert_eq!(
            translate("café"),
            Err(TranslationError::UnsupportedCharacter {
                character: 'é',
                position: 3
            })
        );
        assert_eq!(
            translate("É"),
            Err(TranslationError::UnsupportedCharacter {
                character: 'É',
                position: 0
            })
        );
        assert_eq!(
            translate("a\tb"),
            Err(TranslationError::UnsupportedCharacter {
                character: '\t',
                position: 1
            })
        );
        assert_eq!(
            translate("٣"),
            Err(TranslationError::UnsupportedCharacter {
                character: '٣',
                position: 0
            })
        );
    }
}
