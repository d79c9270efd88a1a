//! Editor configuration.
//!
//! Values are layered with figment, lowest precedence first: built-in
//! defaults, the TOML file, `TINYEDIT_*` environment variables, then the
//! command-line overrides applied by `main`.

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::TinyResult;

pub const DEFAULT_CONFIG_FILE: &str = "tinyedit.toml";
pub const ENV_PREFIX: &str = "TINYEDIT_";

pub const MAX_COMMAND_LEN: usize = 9;
pub const MAX_FILENAME_LEN: usize = 999;
pub const CONTENT_CAPACITY: usize = 10_000; // one byte reserved, blocks hold 9,999

/// What a record keeps of the lines read or written through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentMode {
    /// Only the last block survives, as with a single reused line buffer.
    #[default]
    LastLine,
    /// Everything is kept, up to one buffer's worth.
    Full,
}

/// How user-supplied filenames are joined to the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathPolicy {
    /// Plain `<workdir>/<name>` concatenation. Separators in the name escape
    /// the working directory.
    #[default]
    Join,
    /// Names containing a path separator, `.` and `..` are refused.
    RejectSeparators,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub log: String,
    pub max_command_len: usize,
    pub max_filename_len: usize,
    pub content_capacity: usize,
    pub content_mode: ContentMode,
    pub path_policy: PathPolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            log: String::from("warn"),
            max_command_len: MAX_COMMAND_LEN,
            max_filename_len: MAX_FILENAME_LEN,
            content_capacity: CONTENT_CAPACITY,
            content_mode: ContentMode::default(),
            path_policy: PathPolicy::default(),
        }
    }
}

impl EditorConfig {
    /// Largest number of bytes one content block may hold.
    pub fn block_len(&self) -> usize {
        self.content_capacity - 1
    }

    /// Extract and validate a config from an already layered figment.
    pub fn from_figment(figment: Figment) -> TinyResult<Self> {
        let config: EditorConfig = figment
            .extract()
            .context("Error reading configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> TinyResult<()> {
        anyhow::ensure!(self.max_command_len >= 1, "max_command_len must be at least 1");
        anyhow::ensure!(self.max_filename_len >= 1, "max_filename_len must be at least 1");
        anyhow::ensure!(self.content_capacity >= 2, "content_capacity must be at least 2");
        Ok(())
    }
}

/// Defaults, then `path`, then the environment.
pub fn figment(path: &Path) -> Figment {
    Figment::from(Serialized::defaults(EditorConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX))
}

/// Load the configuration, letting a command-line log filter win.
pub fn load(path: Option<&Path>, log_override: Option<&str>) -> TinyResult<EditorConfig> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let mut config = EditorConfig::from_figment(figment(path))?;

    // Command line beats file and environment.
    if let Some(log) = log_override {
        config.log = log.to_string();
    }

    Ok(config)
}
