//! Test module.
//!
//! Sessions are driven end to end with a scripted `Cursor` as stdin and a
//! `Vec<u8>` as stdout, inside a scratch directory.

mod configuration;

use std::io::{BufRead, Cursor};
use std::path::Path;

use crate::config::EditorConfig;
use crate::console::Tty;
use crate::fs;
use crate::user::Session;
use crate::user::session::{FAREWELL, WELCOME};

pub const PROMPT: &str = "Enter a command (open, save, delete, append, list, help, or exit): ";

/// What a finished session left behind.
pub struct Outcome {
    pub transcript: String,
    /// Registry contents, head first.
    pub records: Vec<(String, Vec<u8>)>,
}

impl Outcome {
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|(name, _)| name.as_str()).collect()
    }
}

pub fn run_session(dir: &Path, config: EditorConfig, script: &str) -> Outcome {
    run_session_with(dir, config, script, |_| {})
}

/// Like [`run_session`], calling `after_start` once the startup scan is done.
pub fn run_session_with(
    dir: &Path,
    config: EditorConfig,
    script: &str,
    after_start: impl FnOnce(&Path),
) -> Outcome {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    run_session_on(dir, config, &mut input, after_start)
}

/// Drive a session from any reader, e.g. one that fails part way.
pub fn run_session_on<R: BufRead>(
    dir: &Path,
    config: EditorConfig,
    input: &mut R,
    after_start: impl FnOnce(&Path),
) -> Outcome {
    let workdir = fs::working_dir(Some(dir)).expect("working_dir failed");
    let mut output = Vec::new();

    let records = {
        let tty = Tty::new(input, &mut output);
        let mut session = Session::start(config, workdir, tty).expect("session start failed");
        after_start(dir);
        session.run().expect("session run failed");
        assert!(!session.is_running());
        session
            .files()
            .iter()
            .map(|record| (record.name().to_string(), record.content().to_vec()))
            .collect()
    };

    Outcome {
        transcript: String::from_utf8(output).expect("transcript is not UTF-8"),
        records,
    }
}

/// Welcome line, then `body`, then the farewell after a final prompt.
pub fn transcript(body: &str) -> String {
    format!("{WELCOME}\n{body}{PROMPT}{FAREWELL}\n")
}
