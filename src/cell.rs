//! Six dot braille cells in their ASCII rendering
//!
//! A [`Cell`] is written as six characters, `O` for a raised dot and `.` for
//! an unraised one. The characters are read row by row, so the rendering
//! `O.O...` holds the dots in the order 1, 4, 2, 5, 3, 6.

use enumset::{EnumSet, EnumSetType};

/// Number of ASCII characters needed to render one cell
pub const CELL_WIDTH: usize = 6;

/// Rendering of a raised dot
pub const RAISED: char = 'O';
/// Rendering of an unraised dot
pub const FLAT: char = '.';

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid braille {character:?}")]
    InvalidBraille { character: Option<char> },
    #[error("Braille of length {length} is not a multiple of {CELL_WIDTH}")]
    InvalidLength { length: usize },
}

#[derive(EnumSetType, Debug)]
pub enum BrailleDot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
}

/// The dot rendered at each position of the ASCII form
const POSITIONS: [BrailleDot; CELL_WIDTH] = [
    BrailleDot::Dot1,
    BrailleDot::Dot4,
    BrailleDot::Dot2,
    BrailleDot::Dot5,
    BrailleDot::Dot3,
    BrailleDot::Dot6,
];

impl BrailleDot {
    fn number(&self) -> u8 {
        match self {
            BrailleDot::Dot1 => 1,
            BrailleDot::Dot2 => 2,
            BrailleDot::Dot3 => 3,
            BrailleDot::Dot4 => 4,
            BrailleDot::Dot5 => 5,
            BrailleDot::Dot6 => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(EnumSet<BrailleDot>);

impl Cell {
    /// The cell without any raised dots, used for a space
    pub const BLANK: Cell = Cell(EnumSet::empty());

    pub const fn new(dots: EnumSet<BrailleDot>) -> Self {
        Cell(dots)
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// The raised dots as digits, i.e. `145` for the letter `d`. A blank cell
    /// is shown as `0`, the way braille tables write it.
    pub fn dot_numbers(&self) -> String {
        if self.is_blank() {
            return "0".to_string();
        }
        self.0.iter().map(|dot| dot.number().to_string()).collect()
    }

    /// Build a cell from exactly [`CELL_WIDTH`] characters of ASCII braille
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Result<Self, ParseError> {
        let mut dots = EnumSet::new();
        let mut count = 0;
        for c in chars {
            if count == CELL_WIDTH {
                return Err(ParseError::InvalidLength { length: count + 1 });
            }
            match c {
                RAISED => {
                    dots.insert(POSITIONS[count]);
                }
                FLAT => (),
                invalid => {
                    return Err(ParseError::InvalidBraille {
                        character: Some(invalid),
                    });
                }
            }
            count += 1;
        }
        if count != CELL_WIDTH {
            return Err(ParseError::InvalidLength { length: count });
        }
        Ok(Cell(dots))
    }
}

impl std::str::FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cell::from_chars(s.chars())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: String = POSITIONS
            .iter()
            .map(|dot| if self.0.contains(*dot) { RAISED } else { FLAT })
            .collect();
        write!(f, "{}", rendered)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cells(Vec<Cell>);

impl std::ops::Deref for Cells {
    type Target = Vec<Cell>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Cells {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

impl FromIterator<Cell> for Cells {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Cells(iter.into_iter().collect())
    }
}

impl std::str::FromStr for Cells {
    type Err = ParseError;

    /// Split a braille document into its cells. The document has to be a
    /// concatenation of complete cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() % CELL_WIDTH != 0 {
            return Err(ParseError::InvalidLength {
                length: chars.len(),
            });
        }
        chars
            .chunks(CELL_WIDTH)
            .map(|chunk| Cell::from_chars(chunk.iter().copied()))
            .collect()
    }
}

pub fn is_braille_dot(c: char) -> bool {
    matches!(c, RAISED | FLAT)
}

#[cfg(test)]
mod tests {
    use enumset::enum_set;

    use super::*;

    #[test]
    fn parse_cell() {
        assert_eq!("O.....".parse::<Cell>(), Ok(Cell(enum_set!(BrailleDot::Dot1))));
        assert_eq!(
            "OO.O..".parse::<Cell>(),
            Ok(Cell(enum_set!(
                BrailleDot::Dot1 | BrailleDot::Dot4 | BrailleDot::Dot5
            )))
        );
        assert_eq!(".....O".parse::<Cell>(), Ok(Cell(enum_set!(BrailleDot::Dot6))));
        assert_eq!("......".parse::<Cell>(), Ok(Cell::BLANK));
        assert_eq!(
            "O.x...".parse::<Cell>(),
            Err(ParseError::InvalidBraille {
                character: Some('x')
            })
        );
        assert_eq!(
            "O....".parse::<Cell>(),
            Err(ParseError::InvalidLength { length: 5 })
        );
        assert_eq!(
            "O......".parse::<Cell>(),
            Err(ParseError::InvalidLength { length: 7 })
        );
    }

    #[test]
    fn render_cell() {
        let cell = Cell(enum_set!(
            BrailleDot::Dot3 | BrailleDot::Dot4 | BrailleDot::Dot5 | BrailleDot::Dot6
        ));
        assert_eq!(cell.to_string(), ".O.OOO");
        assert_eq!(Cell::BLANK.to_string(), "......");
    }

    #[test]
    fn dot_numbers() {
        assert_eq!("OO.O..".parse::<Cell>().unwrap().dot_numbers(), "145");
        assert_eq!(Cell::BLANK.dot_numbers(), "0");
    }

    #[test]
    fn parse_cells() {
        let cells: Cells = ".....OO.....".parse().unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells.to_string(), ".....OO.....");
        assert_eq!(
            ".O.OO".parse::<Cells>(),
            Err(ParseError::InvalidLength { length: 5 })
        );
        assert_eq!("".parse::<Cells>(), Ok(Cells::default()));
    }
}
