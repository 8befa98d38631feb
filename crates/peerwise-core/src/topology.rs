//! Static structure of the grid: units and peers.
//!
//! The 81 cells are organised into 27 units of 9 cells each — 9 rows, 9
//! columns, and 9 boxes — and every cell has exactly 20 peers: the cells
//! sharing at least one unit with it. Both tables are built at compile time
//! and shared read-only for the lifetime of the process.
//!
//! # Examples
//!
//! ```
//! use peerwise_core::{Cell, topology};
//!
//! let cell = Cell::from_name("C2").unwrap();
//! let [row, col, boxed] = topology::units_of(cell);
//! assert!(row.contains(&Cell::from_name("C9").unwrap()));
//! assert!(col.contains(&Cell::from_name("I2").unwrap()));
//! assert!(boxed.contains(&Cell::from_name("A1").unwrap()));
//! assert_eq!(topology::peers(cell).len(), 20);
//! ```

use crate::cell::Cell;

/// All 27 units: rows 0-8, columns 9-17, boxes 18-26.
pub static UNITS: [[Cell; 9]; 27] = build_units();

/// For each cell, the indices into [`UNITS`] of its row, column, and box.
static CELL_UNITS: [[usize; 3]; 81] = build_cell_units();

/// For each cell, its 20 peers.
static PEERS: [[Cell; 20]; 81] = build_peers();

/// Returns the three units containing `cell`: its row, column, and box.
#[must_use]
pub fn units_of(cell: Cell) -> [&'static [Cell; 9]; 3] {
    let [row, col, boxed] = CELL_UNITS[cell.index()];
    [&UNITS[row], &UNITS[col], &UNITS[boxed]]
}

/// Returns the 20 peers of `cell`.
#[must_use]
pub fn peers(cell: Cell) -> &'static [Cell; 20] {
    &PEERS[cell.index()]
}

const fn build_units() -> [[Cell; 9]; 27] {
    let mut units = [[Cell::from_index(0); 9]; 27];
    let mut i = 0;
    while i < 9 {
        let mut j = 0;
        while j < 9 {
            units[i][j] = Cell::from_coords(i, j);
            units[9 + i][j] = Cell::from_coords(j, i);
            let row = (i / 3) * 3 + j / 3;
            let col = (i % 3) * 3 + j % 3;
            units[18 + i][j] = Cell::from_coords(row, col);
            j += 1;
        }
        i += 1;
    }
    units
}

const fn build_cell_units() -> [[usize; 3]; 81] {
    let mut table = [[0; 3]; 81];
    let mut i = 0;
    while i < 81 {
        let cell = Cell::from_index(i);
        table[i] = [cell.row(), 9 + cell.col(), 18 + cell.box_index()];
        i += 1;
    }
    table
}

const fn build_peers() -> [[Cell; 20]; 81] {
    let units = build_units();
    let cell_units = build_cell_units();
    let mut peers = [[Cell::from_index(0); 20]; 81];
    let mut i = 0;
    while i < 81 {
        let mut count = 0;
        let mut u = 0;
        while u < 3 {
            let unit = &units[cell_units[i][u]];
            let mut j = 0;
            while j < 9 {
                let candidate = unit[j];
                if candidate.index() != i && !contains(&peers[i], count, candidate) {
                    peers[i][count] = candidate;
                    count += 1;
                }
                j += 1;
            }
            u += 1;
        }
        assert!(count == 20);
        i += 1;
    }
    peers
}

const fn contains(cells: &[Cell; 20], len: usize, needle: Cell) -> bool {
    let mut k = 0;
    while k < len {
        if cells[k].index() == needle.index() {
            return true;
        }
        k += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> Cell {
        Cell::from_name(name).unwrap()
    }

    #[test]
    fn test_every_unit_has_nine_distinct_cells() {
        for unit in &UNITS {
            let mut seen = [false; 81];
            for member in unit {
                assert!(!seen[member.index()], "duplicate cell in unit");
                seen[member.index()] = true;
            }
        }
    }

    #[test]
    fn test_every_cell_is_in_three_units() {
        for target in Cell::all() {
            let count = UNITS
                .iter()
                .filter(|unit| unit.contains(&target))
                .count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn test_units_of_c2() {
        let [row, col, boxed] = units_of(cell("C2"));
        let names = |unit: &[Cell; 9]| unit.map(|c| c.to_string());

        assert_eq!(
            names(row),
            ["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9"]
        );
        assert_eq!(
            names(col),
            ["A2", "B2", "C2", "D2", "E2", "F2", "G2", "H2", "I2"]
        );
        assert_eq!(
            names(boxed),
            ["A1", "A2", "A3", "B1", "B2", "B3", "C1", "C2", "C3"]
        );
    }

    #[test]
    fn test_peers_of_c2() {
        let expected = [
            "A2", "B2", "D2", "E2", "F2", "G2", "H2", "I2", "C1", "C3", "C4", "C5", "C6", "C7",
            "C8", "C9", "A1", "A3", "B1", "B3",
        ];
        let mut expected: Vec<_> = expected.iter().map(|name| cell(name)).collect();
        expected.sort();

        let mut actual = peers(cell("C2")).to_vec();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_peer_relation_is_symmetric_and_irreflexive() {
        for target in Cell::all() {
            let targets_peers = peers(target);
            assert!(!targets_peers.contains(&target));
            for &peer in targets_peers {
                assert!(peers(peer).contains(&target));
            }
        }
    }
}
