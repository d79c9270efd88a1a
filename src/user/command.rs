//! Command trait definition.

use crate::TinyResult;
use crate::user::Session;

/// Trait for implementing commands.
///
/// Commands are registered statically and looked up by exact name.
pub trait Command: Sync {
    /// Command name, as typed at the prompt.
    fn name(&self) -> &'static str;

    /// One-line description (shown by `help`).
    fn description(&self) -> &'static str;

    /// Run the command against the session.
    ///
    /// A returned [`crate::error::EditError`] is printed and the loop goes
    /// on; any other error ends the program.
    fn execute(&self, session: &mut Session<'_>) -> TinyResult<()>;
}
