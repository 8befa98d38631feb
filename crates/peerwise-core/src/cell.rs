//! Grid cell identity.

use std::fmt::{self, Display};

/// One of the 81 grid positions, identified by row A-I and column 1-9.
///
/// Cells are stored as a row-major index: `A1` is index 0, `A2` is index 1,
/// and `I9` is index 80. `Ord` follows this index order, which is also the
/// tie-break order of the search engine's cell selection.
///
/// # Examples
///
/// ```
/// use peerwise_core::Cell;
///
/// let cell = Cell::from_name("C2").unwrap();
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 1);
/// assert_eq!(cell.box_index(), 0);
/// assert_eq!(cell.to_string(), "C2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    /// The number of cells in the grid.
    pub const COUNT: usize = 81;

    /// Creates a cell from its row-major index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT);
        #[expect(clippy::cast_possible_truncation)]
        let index = index as u8;
        Self(index)
    }

    /// Creates a cell from 0-based row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 9 or greater.
    #[must_use]
    pub const fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < 9 && col < 9);
        Self::from_index(row * 9 + col)
    }

    /// Creates a cell from its display name, e.g. `"A1"` or `"I9"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let row = chars.next()?;
        let col = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('A'..='I').contains(&row) || !('1'..='9').contains(&col) {
            return None;
        }
        Some(Self::from_coords(
            row as usize - 'A' as usize,
            col as usize - '1' as usize,
        ))
    }

    /// Returns the row-major index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the 0-based row of this cell (row A is 0).
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / 9
    }

    /// Returns the 0-based column of this cell (column 1 is 0).
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % 9
    }

    /// Returns the index of the 3x3 box containing this cell
    /// (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> usize {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[expect(clippy::cast_possible_truncation)]
        let row = (b'A' + self.row() as u8) as char;
        write!(f, "{row}{}", self.col() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_coords_round_trip() {
        for cell in Cell::all() {
            assert_eq!(Cell::from_coords(cell.row(), cell.col()), cell);
            assert_eq!(Cell::from_index(cell.index()), cell);
        }
    }

    #[test]
    fn test_corners() {
        let a1 = Cell::from_coords(0, 0);
        assert_eq!(a1.index(), 0);
        assert_eq!(a1.to_string(), "A1");

        let i9 = Cell::from_coords(8, 8);
        assert_eq!(i9.index(), 80);
        assert_eq!(i9.to_string(), "I9");
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Cell::from_name("A1").unwrap().box_index(), 0);
        assert_eq!(Cell::from_name("C4").unwrap().box_index(), 1);
        assert_eq!(Cell::from_name("E5").unwrap().box_index(), 4);
        assert_eq!(Cell::from_name("G9").unwrap().box_index(), 8);
        assert_eq!(Cell::from_name("I1").unwrap().box_index(), 6);
    }

    #[test]
    fn test_from_name_round_trip() {
        for cell in Cell::all() {
            assert_eq!(Cell::from_name(&cell.to_string()), Some(cell));
        }
        assert_eq!(Cell::from_name("J1"), None);
        assert_eq!(Cell::from_name("A0"), None);
        assert_eq!(Cell::from_name("A10"), None);
        assert_eq!(Cell::from_name(""), None);
    }

    #[test]
    fn test_all_is_row_major() {
        let cells: Vec<_> = Cell::all().collect();
        assert_eq!(cells.len(), Cell::COUNT);
        assert!(cells.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(cells[9], Cell::from_name("B1").unwrap());
    }

    #[test]
    #[should_panic(expected = "index < Self::COUNT")]
    fn test_from_index_out_of_range_panics() {
        let _ = Cell::from_index(81);
    }
}
