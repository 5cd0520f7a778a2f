//! Hangman
//!
//! Terminal hangman over named category wordlists, with a full-screen TUI and
//! a plain line mode sharing one session state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::game::{GameSession, SessionConfig, SessionState};
//! use hangman::wordlists::{WordlistStore, Wordlists};
//!
//! let wordlists = Wordlists::from_table(&[("animals", &["cat"])]);
//! let mut session = GameSession::new(
//!     wordlists,
//!     WordlistStore::default(),
//!     SessionConfig::default(),
//! );
//!
//! session.start(Some("animals"));
//! for letter in ["c", "a", "t"] {
//!     session.dispatch(letter);
//! }
//! assert!(matches!(session.state(), SessionState::Ended(_)));
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Wordlist collection and storage
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
