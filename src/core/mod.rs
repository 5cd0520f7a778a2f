//! Core domain types for hangman
//!
//! The round model is a pure value type: no I/O, no randomness. All terminal
//! and storage concerns live in other modules.

mod round;

pub use round::{GuessResult, Outcome, PLACEHOLDER, Round};
