//! Solver error types.

use peerwise_core::MalformedInput;

/// Marker for a contradicted board state.
///
/// A contradiction is an ordinary, expected outcome of propagation and
/// search: a candidate set was emptied, a unit ran out of places for a
/// digit, or every candidate of a branching cell failed. It is always
/// communicated as an `Err` value and never as a panic — backtracking
/// works by catching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("contradiction: no legal digit remains")]
pub struct Contradiction;

/// Errors returned by [`solve`](crate::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolveError {
    /// The input did not contain exactly 81 grid symbols.
    #[display("{_0}")]
    MalformedInput(#[from] MalformedInput),
    /// Parsing succeeded but the puzzle has no solution.
    #[display("puzzle has no solution")]
    NoSolution,
}

impl From<Contradiction> for SolveError {
    fn from(_: Contradiction) -> Self {
        Self::NoSolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_converts() {
        let err = SolveError::from(MalformedInput { count: 80 });
        assert_eq!(
            err,
            SolveError::MalformedInput(MalformedInput { count: 80 })
        );
        assert_eq!(err.to_string(), "expected exactly 81 grid symbols, found 80");
    }

    #[test]
    fn test_contradiction_converts_to_no_solution() {
        assert_eq!(SolveError::from(Contradiction), SolveError::NoSolution);
    }
}
