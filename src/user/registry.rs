//! Command registry - static command registration and lookup.

use crate::TinyResult;
use crate::error::EditError;
use crate::user::Session;
use crate::user::command::Command;
use crate::user::commands;

/// Static array of all registered commands, in the order `help` lists them.
static COMMANDS: &[&dyn Command] = &[
    &commands::OPEN,
    &commands::SAVE,
    &commands::DELETE,
    &commands::APPEND,
    &commands::LIST,
    &commands::HELP,
    &commands::EXIT,
];

/// Find a command by name.
pub fn find_command(name: &str) -> Option<&'static dyn Command> {
    COMMANDS.iter().copied().find(|cmd| cmd.name() == name)
}

/// Get all registered commands.
pub fn all_commands() -> &'static [&'static dyn Command] {
    COMMANDS
}

/// `a, b, or c`, each name optionally single-quoted.
fn choices(quoted: bool) -> String {
    let names: Vec<String> = COMMANDS
        .iter()
        .map(|cmd| {
            if quoted {
                format!("'{}'", cmd.name())
            } else {
                cmd.name().to_string()
            }
        })
        .collect();

    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// The prompt printed before each command is read.
pub fn command_prompt() -> String {
    format!("Enter a command ({}): ", choices(false))
}

pub fn invalid_command() -> EditError {
    EditError::InvalidCommand(choices(true))
}

/// Execute one command token.
///
/// Recoverable failures are printed to the session's terminal; anything else
/// is handed back to the caller.
pub fn execute(session: &mut Session<'_>, name: &str) -> TinyResult<()> {
    let max = session.config().max_command_len;

    let result = match find_command(name) {
        Some(cmd) if name.len() <= max => {
            debug!("dispatch: {}", cmd.name());
            cmd.execute(session)
        }
        _ => {
            if name.len() > max {
                warn!("Command token of {} bytes exceeds the {} byte limit", name.len(), max);
            }
            Err(invalid_command().into())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast::<EditError>() {
            Ok(failure) => {
                debug!("{}: {:?}", name, failure);
                session.tty().say(failure)?;
                Ok(())
            }
            Err(fatal) => Err(fatal),
        },
    }
}
