//! Mutable candidate state for the whole grid.

use std::fmt::{self, Display};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet};

/// The candidate state of all 81 cells.
///
/// A board maps every cell to the set of digits still possible for it. A
/// fresh board leaves every digit open everywhere; the solver narrows the
/// sets down through propagation. A board is solved once every cell holds
/// exactly one candidate.
///
/// `Board` carries no constraint logic of its own — candidate removal here
/// is a plain set operation. The solver's propagation engine is the only
/// place where removals cascade. Cloning the board is the search engine's
/// branch mechanism: each recursive branch mutates a private copy.
///
/// # Examples
///
/// ```
/// use peerwise_core::{Board, Cell, Digit};
///
/// let mut board = Board::new();
/// let cell = Cell::from_coords(0, 0);
/// assert_eq!(board.candidates(cell).len(), 9);
///
/// board.remove_candidate(cell, Digit::new(5));
/// assert!(!board.candidates(cell).contains(Digit::new(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [DigitSet; 81],
}

impl Board {
    /// Creates a board with every digit open in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::ALL; 81],
        }
    }

    /// Returns the candidate set of `cell`.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// Removes `digit` from `cell`'s candidates, returning whether it was
    /// present. No propagation happens here.
    pub fn remove_candidate(&mut self, cell: Cell, digit: Digit) -> bool {
        self.cells[cell.index()].remove(digit)
    }

    /// Returns the resolved digit of `cell`, if its candidate set is a
    /// singleton.
    #[must_use]
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.candidates(cell).as_single()
    }

    /// Returns `true` if every cell is resolved to a single candidate.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Board {
    /// Renders the board as a human-readable grid.
    ///
    /// Each cell shows its remaining candidates, centre-padded to a uniform
    /// width, with `|` between box columns and a rule between box rows:
    ///
    /// ```text
    ///  4  8  3 | 9  2  1 | 6  5  7
    ///  9  6  7 | 3  4  5 | 8  2  1
    ///  2  5  1 | 8  7  6 | 4  9  3
    /// ---------+---------+---------
    ///  ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 1 + self.cells.iter().map(|set| set.len()).max().unwrap_or(0);
        let rule = vec!["-".repeat(width * 3); 3].join("+");
        for row in 0..9 {
            for col in 0..9 {
                let candidates = self.candidates(Cell::from_coords(row, col)).to_string();
                write!(f, "{candidates:^width$}")?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{rule}")?;
            }
        }
        Ok(())
    }
}
