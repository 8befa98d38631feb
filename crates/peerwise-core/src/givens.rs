//! Parsing the textual clues of a puzzle.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit};

/// The given clues of a puzzle: 81 optional digits in row-major order.
///
/// Parsed from any string containing exactly 81 grid symbols: `'1'`-`'9'`
/// for a given, `'0'` or `'.'` for a blank. Every other character —
/// whitespace, separators, decoration — is ignored and does not count
/// toward the 81.
///
/// # Examples
///
/// ```
/// use peerwise_core::{Cell, Digit, Givens};
///
/// let givens: Givens = "
///     4.. ... 8.5
///     .3. ... ...
///     ... 7.. ...
///     .2. ... .6.
///     ... .8. 4..
///     ... .1. ...
///     ... 6.3 .7.
///     5.. 2.. ...
///     1.4 ... ...
/// "
/// .parse()?;
///
/// assert_eq!(givens.digit(Cell::from_name("A1").unwrap()), Some(Digit::new(4)));
/// assert_eq!(givens.digit(Cell::from_name("A2").unwrap()), None);
/// # Ok::<(), peerwise_core::MalformedInput>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Givens {
    cells: [Option<Digit>; 81],
}

/// The input did not contain exactly 81 recognizable grid symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected exactly 81 grid symbols, found {count}")]
pub struct MalformedInput {
    /// The number of grid symbols actually found.
    pub count: usize,
}

impl Givens {
    /// Returns the given digit at `cell`, or `None` if the cell is blank.
    #[must_use]
    pub const fn digit(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()]
    }

    /// Returns an iterator over the given cells and their digits, in
    /// row-major order. Blank cells are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Digit)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, digit)| digit.map(|digit| (Cell::from_index(i), digit)))
    }
}

impl FromStr for Givens {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, MalformedInput> {
        let mut cells = [None; 81];
        let mut count = 0;
        for c in s.chars() {
            let value = match c {
                '1'..='9' => Digit::from_char(c),
                '0' | '.' => None,
                _ => continue,
            };
            if count < 81 {
                cells[count] = value;
            }
            count += 1;
        }
        if count != 81 {
            return Err(MalformedInput { count });
        }
        Ok(Self { cells })
    }
}

impl Display for Givens {
    /// Renders the clues as 9 rows of digits, `.` for blanks, with a space
    /// between box columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                match self.digit(Cell::from_coords(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
                if col == 2 || col == 5 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
