//! User command system.
//!
//! # Architecture
//!
//! - `command.rs` - Defines the `Command` trait
//! - `session.rs` - The context object every command runs against
//! - `registry.rs` - Static command registration, lookup and dispatch
//! - `commands/` - Individual command implementations
//!
//! # Adding a New Command
//!
//! 1. Define a struct in `commands/` and implement the `Command` trait
//! 2. Export a static instance: `pub static MYCOMMAND: MyCommand = MyCommand;`
//! 3. Re-export it from `commands/mod.rs`
//! 4. Register it in the `COMMANDS` array in `registry.rs`; the prompt, the
//!    invalid-command message and `help` all follow that array

pub mod command;
pub mod commands;
pub mod registry;
pub mod session;

pub use command::Command;
pub use session::Session;
