//! # Towers of Hanoi Solver Library
//!
//! This library provides the state machine for the Towers of Hanoi puzzle
//! (three posts, discs of distinct sizes) and the classic recursive solver
//! that transfers every disc from the first post to the last in `2^n - 1` moves.
//!
//! It is used by two binaries:
//! - `human_player`: Allows interactive play via the command line.
//! - `hanoi_solver`: Takes a disc count and prints the solution move by move.
//!
//! ## Modules
//! - `engine`: Contains the post identifiers (`Post`), the step counter (`StepCounter`)
//!   and the puzzle itself (`Puzzle`): reset, legal moves and text rendering.
//! - `solver`: Adds `Puzzle::solve` and the recursive transfer it is built on.
//! - `error`: Defines `MoveError`, the reasons a move is rejected.
//! - `utils`: Parses post numbers and moves typed as text.

pub mod engine;
pub mod error;
pub mod solver;
pub mod utils;
