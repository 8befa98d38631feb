//! Constraint propagation: assignment with cascading elimination.
//!
//! [`assign`] and [`eliminate`] are the only legal ways board state is
//! narrowed. They call each other recursively: eliminating a candidate can
//! resolve a cell (forcing its value out of all 20 peers) or leave a digit
//! with a single place in a unit (forcing an assignment there). The cascade
//! runs to a fixed point, or stops at the first [`Contradiction`].
//!
//! These two rules are the classical sudoku deductions — naked singles and
//! hidden singles — and prune the search space heavily before any guessing.

use peerwise_core::{Board, Cell, Digit, Givens, topology};
use tinyvec::ArrayVec;

use crate::Contradiction;

/// Builds a board from the given clues.
///
/// Every cell starts with all nine candidates; each given is then assigned
/// in row-major order, with full propagation.
///
/// # Errors
///
/// Returns [`Contradiction`] if the givens contradict each other — for
/// example, the same digit given twice in one row.
pub fn initial_board(givens: &Givens) -> Result<Board, Contradiction> {
    let mut board = Board::new();
    for (cell, digit) in givens.iter() {
        assign(&mut board, cell, digit)?;
    }
    Ok(board)
}

/// Restricts `cell` to exactly `digit` by eliminating every other candidate
/// currently present.
///
/// # Errors
///
/// Returns [`Contradiction`] as soon as any elimination fails; the board is
/// left partially narrowed and must be discarded.
pub fn assign(board: &mut Board, cell: Cell, digit: Digit) -> Result<(), Contradiction> {
    for other in board.candidates(cell) {
        if other != digit {
            eliminate(board, cell, other)?;
        }
    }
    Ok(())
}

/// Removes `digit` from `cell`'s candidates and propagates the
/// consequences.
///
/// A no-op if the digit is already absent, so repeated elimination is
/// idempotent. After a removal:
///
/// 1. An emptied candidate set is a contradiction.
/// 2. A set reduced to one digit forces that digit out of all peers.
/// 3. A unit left with a single place for `digit` forces an assignment
///    there; a unit with no place at all is a contradiction.
///
/// # Errors
///
/// Returns [`Contradiction`] at the first failing step, short-circuiting
/// the rest of the cascade.
pub fn eliminate(board: &mut Board, cell: Cell, digit: Digit) -> Result<(), Contradiction> {
    if !board.remove_candidate(cell, digit) {
        return Ok(());
    }

    let remaining = board.candidates(cell);
    if remaining.is_empty() {
        return Err(Contradiction);
    }
    if let Some(forced) = remaining.as_single() {
        for &peer in topology::peers(cell) {
            eliminate(board, peer, forced)?;
        }
    }

    for unit in topology::units_of(cell) {
        let mut places = ArrayVec::<[Cell; 9]>::new();
        for &member in unit {
            if board.candidates(member).contains(digit) {
                places.push(member);
            }
        }
        match places.as_slice() {
            [] => return Err(Contradiction),
            &[only] => assign(board, only, digit)?,
            _ => {}
        }
    }
    Ok(())
}
