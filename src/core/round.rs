//! A single hangman round
//!
//! A Round stores the secret phrase, the player's revealed view of it and the
//! attempts budget. Letters are compared case-insensitively.

use rustc_hash::FxHashSet;
use std::fmt;

/// Placeholder shown for a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// How a round finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// Result of applying one guess to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The letter occurs in the secret; `positions` were newly revealed
    Hit { positions: usize },
    /// The letter does not occur; one attempt was spent
    Miss,
    /// The letter was tried before; nothing changed
    Repeat,
    /// Not a single ASCII letter, or the round is already over
    Ignored,
}

/// One play-through against a single secret phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    category: String,
    secret: Vec<char>,
    revealed: Vec<char>,
    attempts_remaining: u8,
    max_attempts: u8,
    guessed: FxHashSet<char>,
}

impl Round {
    /// Start a round for `word` drawn from `category`
    ///
    /// The secret is lowercased. Anything that is not an ASCII letter
    /// (spaces, hyphens, apostrophes) is revealed from the start.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Round;
    ///
    /// let round = Round::new("countries", "New Zealand", 7);
    /// assert_eq!(round.revealed_text(), "_ _ _   _ _ _ _ _ _ _");
    /// assert_eq!(round.answer(), "new zealand");
    /// ```
    pub fn new(category: impl Into<String>, word: &str, max_attempts: u8) -> Self {
        let secret: Vec<char> = word.to_lowercase().chars().collect();
        let revealed = secret
            .iter()
            .map(|&c| if c.is_ascii_alphabetic() { PLACEHOLDER } else { c })
            .collect();

        Self {
            category: category.into(),
            secret,
            revealed,
            attempts_remaining: max_attempts,
            max_attempts,
            guessed: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &[char] {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Letters tried so far, in alphabetical order
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// The secret joined back into a string
    #[must_use]
    pub fn answer(&self) -> String {
        self.secret.iter().collect()
    }

    /// The revealed view with one space between positions
    #[must_use]
    pub fn revealed_text(&self) -> String {
        let mut text = String::with_capacity(self.revealed.len() * 2);
        for (i, c) in self.revealed.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push(*c);
        }
        text
    }

    /// `Some` once every letter is revealed or the attempts are spent
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.revealed == self.secret {
            Some(Outcome::Win)
        } else if self.attempts_remaining == 0 {
            Some(Outcome::Loss)
        } else {
            None
        }
    }

    /// Apply a guess for `letter`
    ///
    /// Uppercase input reveals the lowercase positions. A miss costs one
    /// attempt, never going below zero.
    pub fn guess(&mut self, letter: char) -> GuessResult {
        if !letter.is_ascii_alphabetic() || self.outcome().is_some() {
            return GuessResult::Ignored;
        }

        let letter = letter.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return GuessResult::Repeat;
        }

        let mut positions = 0;
        for (slot, &secret) in self.revealed.iter_mut().zip(&self.secret) {
            if secret == letter && *slot != letter {
                *slot = letter;
                positions += 1;
            }
        }

        if self.secret.contains(&letter) {
            GuessResult::Hit { positions }
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessResult::Miss
        }
    }

    /// Reset to a fresh round with a new secret from the same category
    #[must_use]
    pub fn replay(&self, word: &str) -> Self {
        Self::new(self.category.clone(), word, self.max_attempts)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.revealed_text())
    }
}
