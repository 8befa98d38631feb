//! Sudoku solving by constraint propagation and backtracking search.
//!
//! The solver narrows a [`Board`] through two mutually recursive
//! operations, [`assign`] and [`eliminate`], which cascade the classical
//! sudoku deductions to a fixed point. A single [naked-pairs
//! pass](eliminate_naked_pairs) strengthens the result, and a
//! deterministic depth-first [`search`] over the most-constrained cell
//! finishes what propagation alone cannot.
//!
//! Contradictions are ordinary values throughout: every operation returns
//! `Result<_, Contradiction>`, and backtracking works by discarding the
//! failed branch's board copy.
//!
//! # Examples
//!
//! ```
//! let board = peerwise_solver::solve(
//!     "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
//! )?;
//! assert!(board.is_solved());
//! # Ok::<(), peerwise_solver::SolveError>(())
//! ```

pub use self::{
    error::{Contradiction, SolveError},
    naked_pairs::eliminate_naked_pairs,
    propagate::{assign, eliminate, initial_board},
    search::search,
};

mod error;
mod naked_pairs;
mod propagate;
mod search;

use peerwise_core::{Board, Givens};

/// Solves a puzzle given as text containing exactly 81 grid symbols
/// (digits `'1'`-`'9'`, blanks `'0'` or `'.'`; everything else ignored).
///
/// Parses the givens, propagates them, runs one naked-pairs pass, and
/// searches. The returned board maps all 81 cells to singleton digits.
///
/// # Errors
///
/// - [`SolveError::MalformedInput`] if the filtered input does not contain
///   exactly 81 symbols; no solving is attempted.
/// - [`SolveError::NoSolution`] if the puzzle parses but admits no valid
///   completion.
pub fn solve(input: &str) -> Result<Board, SolveError> {
    let givens: Givens = input.parse()?;
    let mut board = initial_board(&givens)?;
    eliminate_naked_pairs(&mut board)?;
    Ok(search(board)?)
}

#[cfg(test)]
mod tests {
    use peerwise_core::{Cell, DigitSet, Givens, MalformedInput, topology};

    use super::*;

    const EASY: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const EASY_SOLUTION: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    const HARD: &str =
        "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

    fn assert_valid(board: &peerwise_core::Board) {
        for unit in &topology::UNITS {
            let digits: DigitSet = unit.iter().filter_map(|&cell| board.digit(cell)).collect();
            assert_eq!(digits, DigitSet::ALL);
        }
    }

    #[test]
    fn test_easy_grid_matches_known_solution() {
        let board = solve(EASY).unwrap();
        assert_valid(&board);

        let rendered: String = Cell::all()
            .map(|cell| board.digit(cell).unwrap().to_char())
            .collect();
        assert_eq!(rendered, EASY_SOLUTION);
    }

    #[test]
    fn test_givens_are_preserved() {
        let givens: Givens = EASY.parse().unwrap();
        let board = solve(EASY).unwrap();
        for (cell, digit) in givens.iter() {
            assert_eq!(board.digit(cell), Some(digit));
        }
    }

    #[test]
    fn test_hard_grid_requires_search() {
        let givens: Givens = HARD.parse().unwrap();
        let propagated = initial_board(&givens).unwrap();
        assert!(!propagated.is_solved());

        let board = solve(HARD).unwrap();
        assert_valid(&board);
        for (cell, digit) in givens.iter() {
            assert_eq!(board.digit(cell), Some(digit));
        }
    }

    #[test]
    fn test_blank_grid_solves_to_some_valid_completion() {
        let blank = ".".repeat(81);
        let board = solve(&blank).unwrap();
        assert_valid(&board);
    }

    #[test]
    fn test_solving_twice_is_deterministic() {
        let blank = ".".repeat(81);
        assert_eq!(solve(&blank).unwrap(), solve(&blank).unwrap());
        assert_eq!(solve(HARD).unwrap(), solve(HARD).unwrap());
    }

    #[test]
    fn test_duplicate_givens_report_no_solution() {
        // Two 5s in row A: parses fine, contradicts during initialization.
        let twice = format!("5.5{}", ".".repeat(78));
        assert_eq!(solve(&twice), Err(SolveError::NoSolution));
    }

    #[test]
    fn test_malformed_input_is_reported_before_solving() {
        assert_eq!(
            solve(&".".repeat(80)),
            Err(SolveError::MalformedInput(MalformedInput { count: 80 }))
        );
        assert_eq!(
            solve(&".".repeat(82)),
            Err(SolveError::MalformedInput(MalformedInput { count: 82 }))
        );
        // Even when the 81 placed symbols contradict, a malformed length
        // wins: no board is ever built.
        let bad = format!("55{}", ".".repeat(80));
        assert_eq!(
            solve(&bad),
            Err(SolveError::MalformedInput(MalformedInput { count: 82 }))
        );
    }
}
