//! Wordlist file initialisation
//!
//! Writes the bundled default categories to the store path.

use crate::wordlists::{DEFAULT_WORDLISTS, WordlistStore, Wordlists};
use anyhow::{Result, bail};

/// Write the bundled wordlists and return how many categories were written
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if writing
/// fails.
pub fn run_init(store: &WordlistStore, force: bool) -> Result<usize> {
    if store.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite it)",
            store.path().display()
        );
    }

    let wordlists = Wordlists::from_table(DEFAULT_WORDLISTS);
    store.persist(&wordlists)?;
    Ok(wordlists.len())
}
