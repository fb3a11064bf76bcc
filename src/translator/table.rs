//! The fixed cell tables for letters, digits, the space and the indicators
//!
//! Lookup works in both directions. The forward direction maps a character
//! to its [`Cell`]. The backward direction maps a cell to a [`Symbol`] when
//! translating letters and to a digit when in numeric mode.

use std::{collections::HashMap, sync::OnceLock};

use enumset::enum_set;

use crate::cell::{BrailleDot, Cell};

/// Indicates that the next letter is uppercase (dot 6)
pub const CAPITAL_FOLLOWS: Cell = Cell::new(enum_set!(BrailleDot::Dot6));

/// Indicates that the following cells are digits (dots 3456)
pub const NUMBER_FOLLOWS: Cell = Cell::new(enum_set!(
    BrailleDot::Dot3 | BrailleDot::Dot4 | BrailleDot::Dot5 | BrailleDot::Dot6
));

pub const SPACE: Cell = Cell::BLANK;

const LETTERS: [(char, Cell); 26] = [
    ('a', Cell::new(enum_set!(BrailleDot::Dot1))),
    ('b', Cell::new(enum_set!(BrailleDot::Dot1 | BrailleDot::Dot2))),
    ('c', Cell::new(enum_set!(BrailleDot::Dot1 | BrailleDot::Dot4))),
    (
        'd',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot4 | BrailleDot::Dot5
        )),
    ),
    ('e', Cell::new(enum_set!(BrailleDot::Dot1 | BrailleDot::Dot5))),
    (
        'f',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot4
        )),
    ),
    (
        'g',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot4 | BrailleDot::Dot5
        )),
    ),
    (
        'h',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot5
        )),
    ),
    ('i', Cell::new(enum_set!(BrailleDot::Dot2 | BrailleDot::Dot4))),
    (
        'j',
        Cell::new(enum_set!(
            BrailleDot::Dot2 | BrailleDot::Dot4 | BrailleDot::Dot5
        )),
    ),
    ('k', Cell::new(enum_set!(BrailleDot::Dot1 | BrailleDot::Dot3))),
    (
        'l',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot3
        )),
    ),
    (
        'm',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot3 | BrailleDot::Dot4
        )),
    ),
    (
        'n',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot3 | BrailleDot::Dot4 | BrailleDot::Dot5
        )),
    ),
    (
        'o',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot3 | BrailleDot::Dot5
        )),
    ),
    (
        'p',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot3 | BrailleDot::Dot4
        )),
    ),
    (
        'q',
        Cell::new(enum_set!(
            BrailleDot::Dot1
                | BrailleDot::Dot2
                | BrailleDot::Dot3
                | BrailleDot::Dot4
                | BrailleDot::Dot5
        )),
    ),
    (
        'r',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot3 | BrailleDot::Dot5
        )),
    ),
    (
        's',
        Cell::new(enum_set!(
            BrailleDot::Dot2 | BrailleDot::Dot3 | BrailleDot::Dot4
        )),
    ),
    (
        't',
        Cell::new(enum_set!(
            BrailleDot::Dot2 | BrailleDot::Dot3 | BrailleDot::Dot4 | BrailleDot::Dot5
        )),
    ),
    (
        'u',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot3 | BrailleDot::Dot6
        )),
    ),
    (
        'v',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot3 | BrailleDot::Dot6
        )),
    ),
    (
        'w',
        Cell::new(enum_set!(
            BrailleDot::Dot2 | BrailleDot::Dot4 | BrailleDot::Dot5 | BrailleDot::Dot6
        )),
    ),
    (
        'x',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot3 | BrailleDot::Dot4 | BrailleDot::Dot6
        )),
    ),
    (
        'y',
        Cell::new(enum_set!(
            BrailleDot::Dot1
                | BrailleDot::Dot3
                | BrailleDot::Dot4
                | BrailleDot::Dot5
                | BrailleDot::Dot6
        )),
    ),
    (
        'z',
        Cell::new(enum_set!(
            BrailleDot::Dot1 | BrailleDot::Dot3 | BrailleDot::Dot5 | BrailleDot::Dot6
        )),
    ),
];

/// Digits share the cells of the letters `a` to `j`, `1` is `a` and `0` is `j`
const DIGITS: [(char, char); 10] = [
    ('1', 'a'),
    ('2', 'b'),
    ('3', 'c'),
    ('4', 'd'),
    ('5', 'e'),
    ('6', 'f'),
    ('7', 'g'),
    ('8', 'h'),
    ('9', 'i'),
    ('0', 'j'),
];

/// What a cell means outside of numeric mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    CapitalFollows,
    NumberFollows,
    Space,
    Letter(char),
}

#[derive(Debug)]
pub struct CellTable {
    letters: HashMap<char, Cell>,
    digits: HashMap<char, Cell>,
    cell_to_symbol: HashMap<Cell, Symbol>,
    cell_to_digit: HashMap<Cell, char>,
}

impl Default for CellTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CellTable {
    pub fn new() -> Self {
        let letters: HashMap<char, Cell> = HashMap::from(LETTERS);
        let digits: HashMap<char, Cell> = DIGITS
            .iter()
            .filter_map(|(digit, letter)| letters.get(letter).map(|cell| (*digit, *cell)))
            .collect();

        let mut cell_to_symbol: HashMap<Cell, Symbol> = letters
            .iter()
            .map(|(letter, cell)| (*cell, Symbol::Letter(*letter)))
            .collect();
        // the space and the indicators never decode to a letter
        cell_to_symbol.insert(SPACE, Symbol::Space);
        cell_to_symbol.insert(CAPITAL_FOLLOWS, Symbol::CapitalFollows);
        cell_to_symbol.insert(NUMBER_FOLLOWS, Symbol::NumberFollows);

        let cell_to_digit = digits.iter().map(|(digit, cell)| (*cell, *digit)).collect();

        CellTable {
            letters,
            digits,
            cell_to_symbol,
            cell_to_digit,
        }
    }

    /// The table shared by all translations
    pub fn standard() -> &'static CellTable {
        static TABLE: OnceLock<CellTable> = OnceLock::new();
        TABLE.get_or_init(CellTable::new)
    }

    /// Cell of a lowercase letter or the space
    pub fn letter(&self, c: char) -> Option<Cell> {
        if c == ' ' {
            Some(SPACE)
        } else {
            self.letters.get(&c).copied()
        }
    }

    pub fn digit(&self, c: char) -> Option<Cell> {
        self.digits.get(&c).copied()
    }

    /// Backward lookup outside of numeric mode
    pub fn symbol(&self, cell: &Cell) -> Option<Symbol> {
        self.cell_to_symbol.get(cell).copied()
    }

    /// Backward lookup in numeric mode
    pub fn digit_of(&self, cell: &Cell) -> Option<char> {
        self.cell_to_digit.get(cell).copied()
    }

    /// All letters with their cells in alphabetical order
    pub fn letters(&self) -> Vec<(char, Cell)> {
        let mut letters: Vec<_> = self.letters.iter().map(|(c, cell)| (*c, *cell)).collect();
        letters.sort_by_key(|(c, _)| *c);
        letters
    }

    /// All digits with their cells in numerical order
    pub fn digits(&self) -> Vec<(char, Cell)> {
        let mut digits: Vec<_> = self.digits.iter().map(|(c, cell)| (*c, *cell)).collect();
        digits.sort_by_key(|(c, _)| *c);
        digits
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn cell(s: &str) -> Cell {
        s.parse().unwrap()
    }

    #[test]
    fn letter_cells() {
        let table = CellTable::new();
        assert_eq!(table.letter('a'), Some(cell("O.....")));
        assert_eq!(table.letter('b'), Some(cell("O.O...")));
        assert_eq!(table.letter('j'), Some(cell(".OOO..")));
        assert_eq!(table.letter('w'), Some(cell(".OOO.O")));
        assert_eq!(table.letter('z'), Some(cell("O..OOO")));
        assert_eq!(table.letter(' '), Some(cell("......")));
        assert_eq!(table.letter('A'), None);
        assert_eq!(table.letter('1'), None);
    }

    #[test]
    fn letter_cells_are_distinct() {
        let table = CellTable::new();
        let cells: HashSet<Cell> = table.letters().into_iter().map(|(_, c)| c).collect();
        assert_eq!(cells.len(), 26);
        assert!(!cells.contains(&SPACE));
        assert!(!cells.contains(&CAPITAL_FOLLOWS));
        assert!(!cells.contains(&NUMBER_FOLLOWS));
    }

    #[test]
    fn digits_collide_with_letters() {
        let table = CellTable::new();
        for (digit, letter) in DIGITS {
            assert_eq!(table.digit(digit), table.letter(letter));
        }
        assert_eq!(table.digit('0'), Some(cell(".OOO..")));
        assert_eq!(table.digit('9'), Some(cell(".OO...")));
        assert_eq!(table.digits().len(), 10);
    }

    #[test]
    fn backward_lookup() {
        let table = CellTable::new();
        assert_eq!(table.symbol(&cell("O.....")), Some(Symbol::Letter('a')));
        assert_eq!(table.symbol(&cell("......")), Some(Symbol::Space));
        assert_eq!(
            table.symbol(&cell(".....O")),
            Some(Symbol::CapitalFollows)
        );
        assert_eq!(table.symbol(&cell(".O.OOO")), Some(Symbol::NumberFollows));
        assert_eq!(table.symbol(&cell("OOOOOO")), None);
        assert_eq!(table.digit_of(&cell(".OOO..")), Some('0'));
        assert_eq!(table.digit_of(&cell("O...O.")), None);
    }
}
