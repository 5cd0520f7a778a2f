//! Terminal output
//!
//! Art assets, screen composition and the coloured line printer.

pub mod art;
pub mod display;
pub mod formatters;
pub mod screen;

pub use display::print_screen;
pub use screen::{InputKind, Screen, ScreenLine, Segment, Tone, compose};
