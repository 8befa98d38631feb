//! Depth-first backtracking search.

use peerwise_core::{Board, Cell};

use crate::{Contradiction, propagate::assign};

/// Searches for a complete assignment, backtracking on contradiction.
///
/// Branching always picks the unresolved cell with the fewest remaining
/// candidates, ties broken by row-major cell order, and tries its
/// candidates in ascending digit order. Each branch assigns into a private
/// clone of the board, so failed branches are simply discarded — there is
/// no undo. Together the two orderings make the search fully deterministic,
/// including which solution is found first on under-constrained grids.
///
/// Recursion depth is bounded by the number of unresolved cells.
///
/// # Errors
///
/// Returns [`Contradiction`] once every candidate of the branching cell has
/// failed; at the top level this means the puzzle is unsolvable.
pub fn search(board: Board) -> Result<Board, Contradiction> {
    let Some(cell) = most_constrained(&board) else {
        return Ok(board);
    };
    for digit in board.candidates(cell) {
        let mut branch = board.clone();
        if assign(&mut branch, cell, digit).is_ok()
            && let Ok(solved) = search(branch)
        {
            return Ok(solved);
        }
    }
    Err(Contradiction)
}

/// Picks the unresolved cell with the smallest candidate set, or `None` if
/// the board is solved. Row-major iteration makes `min_by_key` break ties
/// toward the earliest cell.
fn most_constrained(board: &Board) -> Option<Cell> {
    Cell::all()
        .filter(|&cell| board.candidates(cell).len() > 1)
        .min_by_key(|&cell| board.candidates(cell).len())
}
