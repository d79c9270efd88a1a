//! Help command - displays available commands.

use crate::TinyResult;
use crate::user::{Command, Session};

/// Help command instance.
pub static HELP: HelpCommand = HelpCommand;

/// Help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Display help information"
    }

    fn execute(&self, session: &mut Session<'_>) -> TinyResult<()> {
        let tty = session.tty();
        tty.say("Available commands:")?;
        for cmd in crate::user::registry::all_commands() {
            tty.say(format_args!("  {:<8}- {}", cmd.name(), cmd.description()))?;
        }
        Ok(())
    }
}
