//! Embedded wordlists
//!
//! Categories compiled into the binary at build time from `data/wordlists/`.

// Include generated wordlists from build script
include!(concat!(env!("OUT_DIR"), "/defaults.rs"));
