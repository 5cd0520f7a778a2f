//! JSON-backed wordlist storage
//!
//! The store reads the whole collection once and rewrites it wholesale.

use super::collection::Wordlists;
use super::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A wordlist file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistStore {
    path: PathBuf,
}

impl WordlistStore {
    /// File name used when no path is given
    pub const DEFAULT_PATH: &'static str = "hangman_wordlist.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the collection
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, is not a JSON
    /// object of string arrays, or contains an empty category.
    ///
    /// # Examples
    /// ```no_run
    /// use hangman::wordlists::WordlistStore;
    ///
    /// let store = WordlistStore::new("hangman_wordlist.json");
    /// let wordlists = store.load().unwrap();
    /// println!("Loaded {} categories", wordlists.len());
    /// ```
    pub fn load(&self) -> Result<Wordlists, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        let wordlists: Wordlists =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        if let Some(category) = wordlists.first_empty_category() {
            return Err(StoreError::EmptyCategory {
                path: self.path.clone(),
                category: category.to_string(),
            });
        }

        debug!(path = %self.path.display(), categories = wordlists.len(), "loaded wordlists");
        Ok(wordlists)
    }

    /// Overwrite the file with `wordlists`
    ///
    /// Pass the complete, already-updated collection; nothing is merged. The
    /// data goes to a sibling temp file first and is renamed over the target.
    ///
    /// # Errors
    ///
    /// Returns a storage error if encoding or writing fails. The previous file
    /// contents are left in place in that case.
    pub fn persist(&self, wordlists: &Wordlists) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(wordlists).map_err(StoreError::Encode)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, json + "\n").map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(source));
        }

        info!(path = %self.path.display(), categories = wordlists.len(), "saved wordlists");
        Ok(())
    }
}

impl Default for WordlistStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> WordlistStore {
        WordlistStore::new(dir.path().join("wordlist.json"))
    }

    #[test]
    fn load_missing_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn load_malformed_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for content in ["not json", r#"["dog", "cat"]"#, r#"{"animals": "dog"}"#] {
            fs::write(store.path(), content).unwrap();
            assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
        }
    }

    #[test]
    fn load_rejects_empty_category() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"animals": ["dog"], "birds": []}"#).unwrap();

        assert!(matches!(
            store.load(),
            Err(StoreError::EmptyCategory { category, .. }) if category == "birds"
        ));
    }

    #[test]
    fn persist_then_load_preserves_collection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let wordlists = Wordlists::from_table(&[
            ("animals", &["dog", "cat"]),
            ("countries", &["new zealand"]),
        ]);
        store.persist(&wordlists).unwrap();

        assert_eq!(store.load().unwrap(), wordlists);
    }

    #[test]
    fn persist_overwrites_instead_of_merging() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .persist(&Wordlists::from_table(&[("animals", &["dog"])]))
            .unwrap();
        let replacement = Wordlists::from_table(&[("fruits", &["fig"])]);
        store.persist(&replacement).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, replacement);
        assert!(!loaded.contains("animals"));
    }

    #[test]
    fn persist_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .persist(&Wordlists::from_table(&[("animals", &["dog"])]))
            .unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["wordlist.json"]);
    }

    #[test]
    fn persist_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = WordlistStore::new(dir.path().join("missing").join("wordlist.json"));
        let err = store
            .persist(&Wordlists::from_table(&[("animals", &["dog"])]))
            .unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail
        let target = dir.path().join("wordlist.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "").unwrap();

        let store = WordlistStore::new(&target);
        let err = store
            .persist(&Wordlists::from_table(&[("animals", &["dog"])]))
            .unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(!dir.path().join("wordlist.json.tmp").exists());
        assert!(target.join("keep").exists());
    }
}
