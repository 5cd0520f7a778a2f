//! Category wordlists
//!
//! The in-memory collection, its JSON file store and the bundled defaults.

mod collection;
mod embedded;
mod error;
pub mod store;

pub use collection::{RANDOM_KEY, Wordlists, choose_word, parse_addition};
pub use embedded::{DEFAULT_CATEGORY_COUNT, DEFAULT_WORDLISTS};
pub use error::{StoreError, ValidationError};
pub use store::WordlistStore;
