//! Command implementations.

pub mod fs_commands;
pub mod help;
pub mod system;

// Re-export command instances for registry
pub use fs_commands::{APPEND, DELETE, LIST, OPEN, SAVE};
pub use help::HELP;
pub use system::EXIT;
