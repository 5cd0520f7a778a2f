//! Session state machine types

use crate::core::{Outcome, Round};

/// What the options menu is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuView {
    /// Command list and available wordlists
    Commands,
    /// Waiting for a `category,entry,...` line
    Adding,
    /// Listing the entries of one category until the next input
    Showing(String),
}

/// The screen the session is on, with only the data valid for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Menu {
        /// Round to return to with `back`
        resume: Option<Round>,
        view: MenuView,
        /// One-off error line, cleared by the next input
        notice: Option<String>,
    },
    Playing(Round),
    Ended(Round),
}

impl SessionState {
    /// Menu with nothing to resume
    #[must_use]
    pub const fn menu() -> Self {
        Self::Menu {
            resume: None,
            view: MenuView::Commands,
            notice: None,
        }
    }

    /// The round in play, resumable from the menu, or just finished
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        match self {
            Self::Menu { resume, .. } => resume.as_ref(),
            Self::Playing(round) | Self::Ended(round) => Some(round),
        }
    }

    /// `Some` only on the end screen
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Ended(round) => round.outcome(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_menu(&self) -> bool {
        matches!(self, Self::Menu { .. })
    }
}

/// Whether the frontend keeps looping after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}
