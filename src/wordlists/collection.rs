//! The in-memory wordlist collection
//!
//! Maps category names to their ordered entries. Categories are never empty
//! and entries are unique within a category.

use super::error::{StoreError, ValidationError};
use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Key that selects a category at random
pub const RANDOM_KEY: &str = "random";

/// Category name to ordered entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wordlists(BTreeMap<String, Vec<String>>);

impl Wordlists {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a static table such as `DEFAULT_WORDLISTS`
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::{DEFAULT_CATEGORY_COUNT, DEFAULT_WORDLISTS, Wordlists};
    ///
    /// let wordlists = Wordlists::from_table(DEFAULT_WORDLISTS);
    /// assert_eq!(wordlists.len(), DEFAULT_CATEGORY_COUNT);
    /// ```
    #[must_use]
    pub fn from_table(table: &[(&str, &[&str])]) -> Self {
        let mut wordlists = Self::new();
        for &(name, entries) in table {
            let entries: Vec<String> = entries.iter().map(|&e| e.to_string()).collect();
            if let Err(err) = wordlists.append(name, &entries) {
                warn!(category = %name, %err, "skipping invalid wordlist table row");
            }
        }
        wordlists
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Category names in listing order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// First category with no entries, if any
    #[must_use]
    pub fn first_empty_category(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, entries)| entries.is_empty())
            .map(|(name, _)| name.as_str())
    }

    /// Look up `key`, or pick a category uniformly when `key` is `"random"`
    ///
    /// Callers check membership first; `NotFound` is returned otherwise, and
    /// also for `"random"` on an empty collection.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if `key` names no category.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        key: &str,
        rng: &mut R,
    ) -> Result<(&str, &[String]), StoreError> {
        let entry = if key == RANDOM_KEY {
            self.0.iter().choose(rng)
        } else {
            self.0.get_key_value(key)
        };

        entry
            .map(|(name, words)| (name.as_str(), words.as_slice()))
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    /// Add `entries` to category `name`, creating it if needed
    ///
    /// Existing entries are kept and duplicates skipped (exact match).
    /// Returns whether the collection changed.
    ///
    /// # Errors
    /// Returns a `ValidationError`, leaving the collection untouched, if `name`
    /// is empty, `entries` is empty, or any entry is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::Wordlists;
    ///
    /// let mut wordlists = Wordlists::new();
    /// let birds = vec!["owl".to_string(), "wren".to_string()];
    /// assert_eq!(wordlists.append("birds", &birds), Ok(true));
    /// assert_eq!(wordlists.append("birds", &birds), Ok(false));
    /// ```
    pub fn append(&mut self, name: &str, entries: &[String]) -> Result<bool, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        if entries.is_empty() {
            return Err(ValidationError::NoEntries);
        }
        if let Some(index) = entries.iter().position(String::is_empty) {
            return Err(ValidationError::EmptyEntry { index });
        }

        let list = self.0.entry(name.to_string()).or_default();
        let before = list.len();
        let created = before == 0;

        for entry in entries {
            if !list.contains(entry) {
                list.push(entry.clone());
            }
        }

        Ok(created || list.len() != before)
    }
}

/// Parse one `category,entry,entry,...` line
///
/// # Errors
/// Returns a `ValidationError` unless there are at least two fields and none
/// of them is empty.
///
/// # Examples
/// ```
/// use hangman::wordlists::parse_addition;
///
/// let (name, entries) = parse_addition("birds,owl,wren").unwrap();
/// assert_eq!(name, "birds");
/// assert_eq!(entries, ["owl", "wren"]);
///
/// assert!(parse_addition("birds").is_err());
/// assert!(parse_addition("birds,,wren").is_err());
/// ```
pub fn parse_addition(line: &str) -> Result<(String, Vec<String>), ValidationError> {
    let fields: Vec<&str> = line.split(',').collect();

    if fields.len() < 2 {
        return Err(ValidationError::TooFewFields(fields.len()));
    }
    if fields[0].is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    if let Some(index) = fields[1..].iter().position(|f| f.is_empty()) {
        return Err(ValidationError::EmptyEntry { index });
    }

    let entries = fields[1..].iter().map(|&f| f.to_string()).collect();
    Ok((fields[0].to_string(), entries))
}

/// Draw one entry uniformly at random
pub fn choose_word<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> Option<&'a str> {
    words.choose(rng).map(String::as_str)
}
