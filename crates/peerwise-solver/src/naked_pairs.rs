//! Naked-pair elimination.

use peerwise_core::{Board, DigitSet, topology};

use crate::{Contradiction, propagate::eliminate};

/// Runs one naked-pairs pass over all 27 units.
///
/// A naked pair is two cells of a unit holding the same two-digit candidate
/// set, shared by no other cell of the unit. Those two digits can hold no
/// other cell of the unit, so they are eliminated — with full propagation —
/// from every other cell there.
///
/// The pass visits each unit once and is not iterated to a fixed point;
/// eliminations it triggers may expose new pairs, and callers who want them
/// can simply run the pass again.
///
/// # Errors
///
/// Returns [`Contradiction`] if any elimination empties a candidate set,
/// aborting the rest of the pass.
pub fn eliminate_naked_pairs(board: &mut Board) -> Result<(), Contradiction> {
    for unit in &topology::UNITS {
        // Candidate sets as of reaching this unit; eliminations below go
        // through `eliminate`, which tolerates already-removed digits.
        let candidates = unit.map(|cell| board.candidates(cell));
        for (i, &pair) in candidates.iter().enumerate() {
            if pair.len() != 2 {
                continue;
            }
            // Each pair is handled once, from its first cell.
            if candidates[..i].contains(&pair) {
                continue;
            }
            let sharing = candidates.iter().filter(|&&set| set == pair).count();
            if sharing != 2 {
                continue;
            }
            for (&cell, &set) in unit.iter().zip(&candidates) {
                if set == pair {
                    continue;
                }
                for digit in pair {
                    eliminate(board, cell, digit)?;
                }
            }
        }
    }
    Ok(())
}
