//! Session state shared by every command.
//!
//! A [`Session`] is created once at startup and owns everything a command may
//! touch: the configuration, the working directory captured at startup, the
//! file registry and the terminal. It is passed `&mut` to each handler and
//! dropped when the loop ends.

use crate::TinyResult;
use crate::config::EditorConfig;
use crate::console::Tty;
use crate::error::EditError;
use crate::fs::{self, FileRecord, FileRegistry};
use crate::user::registry;

pub const WELCOME: &str = "Welcome to our Text Editor! Use the 'help' command for more info.";
pub const FAREWELL: &str = "Exiting the text editor.";

/// Key the user presses to end text input.
#[cfg(windows)]
pub const END_OF_INPUT_KEY: &str = "Ctrl+Z and Enter";
#[cfg(not(windows))]
pub const END_OF_INPUT_KEY: &str = "Ctrl+D";

pub struct Session<'io> {
    config: EditorConfig,
    workdir: String,
    files: FileRegistry,
    tty: Tty<'io>,
    running: bool,
}

impl<'io> Session<'io> {
    /// Greet the user and load the regular files of `workdir` into the
    /// registry.
    pub fn start(config: EditorConfig, workdir: String, tty: Tty<'io>) -> TinyResult<Self> {
        let mut session = Self {
            config,
            workdir,
            files: FileRegistry::new(),
            tty,
            running: true,
        };

        session.tty.say(WELCOME)?;
        session.load_files()?;
        Ok(session)
    }

    fn load_files(&mut self) -> TinyResult<()> {
        for name in fs::scan_regular_files(&self.workdir)? {
            self.files.insert(FileRecord::new(name, Vec::new()));
        }
        info!("Loaded {} files from {}", self.files.len(), self.workdir);
        Ok(())
    }

    /// Prompt, read a command, dispatch; until `exit` or end of input.
    pub fn run(&mut self) -> TinyResult<()> {
        let prompt = registry::command_prompt();

        while self.is_running() {
            self.tty.prompt(&prompt)?;
            let Some(token) = self.tty.read_token()? else {
                debug!("End of input at the command prompt");
                self.finish()?;
                break;
            };
            registry::execute(self, &token)?;
        }
        Ok(())
    }

    /// Say goodbye and stop the loop after the current command.
    pub fn finish(&mut self) -> TinyResult<()> {
        self.tty.say(FAREWELL)?;
        self.tty.flush()?;
        self.running = false;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask for the filename a command works on.
    ///
    /// `None` means input ended before a name was typed.
    pub fn read_filename(&mut self, verb: &str) -> TinyResult<Option<String>> {
        self.tty.prompt(&format!("Enter the filename to {}: ", verb))?;

        let Some(name) = self.tty.read_token()? else {
            debug!("End of input at the filename prompt");
            return Ok(None);
        };
        if name.chars().count() > self.config.max_filename_len {
            return Err(EditError::FilenameTooLong(self.config.max_filename_len).into());
        }
        fs::check_filename(&name, self.config.path_policy)?;
        Ok(Some(name))
    }

    /// Absolute path of `name` inside the working directory.
    pub fn path_of(&self, name: &str) -> String {
        fs::join_path(&self.workdir, name)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn workdir(&self) -> &str {
        &self.workdir
    }

    pub fn files(&self) -> &FileRegistry {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut FileRegistry {
        &mut self.files
    }

    pub fn tty(&mut self) -> &mut Tty<'io> {
        &mut self.tty
    }
}
