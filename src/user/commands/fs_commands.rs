//! Filesystem commands.

use std::io::{BufRead, BufReader, Write};

use crate::TinyResult;
use crate::error::EditError;
use crate::fs::{self, FileRecord, retain_block};
use crate::user::session::END_OF_INPUT_KEY;
use crate::user::{Command, Session};

/// Print a file and remember its last line.
pub static OPEN: OpenCommand = OpenCommand;

pub struct OpenCommand;

impl Command for OpenCommand {
    fn name(&self) -> &'static str {
        "open"
    }

    fn description(&self) -> &'static str {
        "Open a file"
    }

    fn execute(&self, session: &mut Session<'_>) -> TinyResult<()> {
        let Some(name) = session.read_filename(self.name())? else {
            return Ok(());
        };
        let path = session.path_of(&name);

        let file = fs::open_read(&path).map_err(|e| {
            debug!("open {}: {}", path, e);
            EditError::NotFound
        })?;

        let mode = session.config().content_mode;
        let block_len = session.config().block_len();
        let mut reader = BufReader::new(file);
        let mut line = Vec::new();
        let mut content = Vec::new();

        loop {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => break,
                Ok(_) => {
                    session.tty().echo(&line)?;
                    retain_block(&mut content, &line, mode, block_len);
                }
                Err(e) => {
                    warn!("Stopped reading {}: {}", path, e);
                    break;
                }
            }
        }
        session.tty().flush()?;

        session.files_mut().insert(FileRecord::new(name, content));
        Ok(())
    }
}

/// Create or overwrite a file from typed lines.
pub static SAVE: SaveCommand = SaveCommand;

pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &'static str {
        "save"
    }

    fn description(&self) -> &'static str {
        "Save content to a file"
    }

    fn execute(&self, session: &mut Session<'_>) -> TinyResult<()> {
        let Some(name) = session.read_filename(self.name())? else {
            return Ok(());
        };
        let path = session.path_of(&name);

        let mut file = fs::create_file(&path).map_err(|e| {
            debug!("create {}: {}", path, e);
            EditError::CreateFailed
        })?;

        session.tty().say(format_args!(
            "Enter text. (Press {} to save and exit):",
            END_OF_INPUT_KEY
        ))?;

        let mode = session.config().content_mode;
        let block_len = session.config().block_len();
        let mut line = Vec::new();
        let mut content = Vec::new();

        // The rest of the filename line is not part of the text.
        let mut input = session.tty().discard_line();
        while input.is_ok() {
            match session.tty().read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if let Err(e) = file.write_all(&line) {
                        warn!("Write to {} failed: {}", path, e);
                    }
                    retain_block(&mut content, &line, mode, block_len);
                }
                Err(e) => input = Err(e),
            }
        }
        if let Err(e) = input {
            debug!("save {}: {}", path, e);
            session.tty().say(EditError::InputReadError)?;
        }
        drop(file);

        session.files_mut().insert(FileRecord::new(name, content));
        session.tty().say("File saved.")?;
        Ok(())
    }
}

/// Delete a registered file from disk and from the registry.
pub static DELETE: DeleteCommand = DeleteCommand;

pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn description(&self) -> &'static str {
        "Delete a file"
    }

    fn execute(&self, session: &mut Session<'_>) -> TinyResult<()> {
        let Some(name) = session.read_filename(self.name())? else {
            return Ok(());
        };

        let record = session
            .files_mut()
            .remove_first(&name)
            .ok_or(EditError::NotFound)?;
        let path = session.path_of(record.name());

        // The record is gone whether or not the disk removal works.
        match fs::file_remove(&path) {
            Ok(()) => session.tty().say("File deleted successfully.")?,
            Err(e) => {
                debug!("remove {}: {}", path, e);
                session.tty().say(EditError::RemoveFailed)?;
            }
        }
        Ok(())
    }
}

/// Append typed text to a registered file.
pub static APPEND: AppendCommand = AppendCommand;

pub struct AppendCommand;

impl Command for AppendCommand {
    fn name(&self) -> &'static str {
        "append"
    }

    fn description(&self) -> &'static str {
        "Append content to a file"
    }

    fn execute(&self, session: &mut Session<'_>) -> TinyResult<()> {
        let Some(name) = session.read_filename(self.name())? else {
            return Ok(());
        };
        if session.files().find(&name).is_none() {
            return Err(EditError::NotFound.into());
        }
        let path = session.path_of(&name);

        let mut file = fs::open_append(&path).map_err(|e| {
            debug!("append {}: {}", path, e);
            EditError::OpenForAppendFailed
        })?;

        session.tty().say(format_args!(
            "Enter text to append. Press {} to finish:",
            END_OF_INPUT_KEY
        ))?;

        let copied = match session.tty().discard_line() {
            Ok(()) => session.tty().copy_to_end(&mut file),
            Err(e) => Err(e),
        };
        match copied {
            Ok(n) => debug!("append {}: {} bytes", path, n),
            Err(e) => warn!("Appending to {} stopped early: {}", path, e),
        }
        drop(file);

        session
            .tty()
            .say(format_args!("File '{}' appended successfully.", name))?;
        Ok(())
    }
}

/// List registered files, newest first.
pub static LIST: ListCommand = ListCommand;

pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "List all files in the current directory"
    }

    fn execute(&self, session: &mut Session<'_>) -> TinyResult<()> {
        if session.files().is_empty() {
            session.tty().say("No files in the current directory.")?;
            return Ok(());
        }

        let names: Vec<String> = session
            .files()
            .iter()
            .map(|record| record.name().to_string())
            .collect();

        let tty = session.tty();
        tty.say("Files in the current directory:")?;
        for name in names {
            tty.say(name)?;
        }
        Ok(())
    }
}
