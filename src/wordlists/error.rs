//! Error types for wordlist storage and editing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons an `add` request is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected 'category,entry,...' with at least one entry, got {0} field(s)")]
    TooFewFields(usize),

    #[error("category name is empty")]
    EmptyCategory,

    #[error("no entries given")]
    NoEntries,

    #[error("entry {index} is empty")]
    EmptyEntry { index: usize },
}

/// Errors raised by the wordlist store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read wordlists from {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("wordlist file {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("wordlist file {} has an empty category '{category}'", path.display())]
    EmptyCategory { path: PathBuf, category: String },

    #[error("failed to encode wordlists: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write wordlists to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("unknown wordlist '{0}'")]
    NotFound(String),
}
