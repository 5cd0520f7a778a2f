//! Command implementations

pub mod init;
pub mod list;
pub mod simple;

pub use init::run_init;
pub use list::{category_summary, print_categories};
pub use simple::run_simple;
