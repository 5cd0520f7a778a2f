//! Session state machine
//!
//! Menu, round and end screens, driven one input line at a time.

mod session;
mod state;

pub use session::{EXIT_COMMAND, GameSession, MENU_COMMAND, SessionConfig};
pub use state::{MenuView, SessionState, Step};
