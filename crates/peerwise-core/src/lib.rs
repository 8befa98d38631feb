//! Core data structures for the peerwise sudoku solver.
//!
//! This crate provides the data model the solver operates on:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Candidate digit sets backed by a 9-bit bitset
//! - [`cell`]: One of the 81 grid positions, in row-major order
//! - [`topology`]: The static structure of the grid — 27 units of 9 cells
//!   and the 20 peers of every cell
//! - [`board`]: The mutable candidate state propagation and search work on
//! - [`givens`]: Parsing the 81 textual clue symbols of a puzzle
//!
//! # Examples
//!
//! ```
//! use peerwise_core::{Board, Cell, topology};
//!
//! // A fresh board has every digit open in every cell.
//! let board = Board::new();
//! assert_eq!(board.candidates(Cell::from_coords(0, 0)).len(), 9);
//!
//! // Every cell has exactly 20 peers.
//! assert_eq!(topology::peers(Cell::from_coords(4, 4)).len(), 20);
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod givens;
pub mod topology;

pub use self::{
    board::Board,
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    givens::{Givens, MalformedInput},
};
