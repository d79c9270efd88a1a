//! Session control commands.

use crate::TinyResult;
use crate::user::{Command, Session};

/// Exit command instance.
pub static EXIT: ExitCommand = ExitCommand;

/// Exit command implementation.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the text editor"
    }

    fn execute(&self, session: &mut Session<'_>) -> TinyResult<()> {
        session.finish()
    }
}
