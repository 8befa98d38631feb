//! Example demonstrating the solving pipeline stage by stage.
//!
//! Parses a grid, then prints the board after each stage: the raw givens,
//! the state after constraint propagation, after one naked-pairs pass, and
//! the completed solution.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_grid -- \
//!     "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......"
//! ```
//!
//! Print only the final solution:
//!
//! ```sh
//! cargo run --example solve_grid -- --quiet "003020600900305001..."
//! ```

use std::process;

use clap::Parser;
use peerwise_core::Givens;
use peerwise_solver::{eliminate_naked_pairs, initial_board, search};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The puzzle: 81 grid symbols ('1'-'9', '0' or '.' for blanks); other
    /// characters are ignored.
    grid: String,

    /// Print only the final solution.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let givens: Givens = match args.grid.parse() {
        Ok(givens) => givens,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    if !args.quiet {
        println!("Givens:");
        println!("{givens}");
    }

    let Ok(mut board) = initial_board(&givens) else {
        eprintln!("The givens contradict each other.");
        process::exit(1);
    };
    if !args.quiet {
        println!("After propagation:");
        println!("{board}");
    }

    if eliminate_naked_pairs(&mut board).is_err() {
        eprintln!("Contradiction during the naked-pairs pass.");
        process::exit(1);
    }
    if !args.quiet {
        println!("After naked pairs:");
        println!("{board}");
    }

    match search(board) {
        Ok(solved) => {
            println!("Solution:");
            println!("{solved}");
        }
        Err(_) => {
            eprintln!("The puzzle has no solution.");
            process::exit(1);
        }
    }
}
