//! tinyedit - list, open, create, append to and delete the text files of
//! one directory from an interactive prompt.

mod config;
mod console;
mod error;
mod fs;
mod user;

#[cfg(test)]
mod tests;

#[macro_use]
extern crate log;

use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use config::EditorConfig;
use console::Tty;
use user::Session;

pub use error::TinyResult;

#[derive(Parser, Debug)]
#[command(name = "tinyedit", version, about = "Interactive text file manager for one directory")]
struct Cli {
    /// Work in this directory instead of the current one
    #[arg(short = 'C', long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Configuration file [default: tinyedit.toml]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let config = match config::load(cli.config.as_deref(), cli.log.as_deref()) {
        Ok(config) => config,
        Err(e) => fatal(&e),
    };

    if let Err(e) = console::init_logger(&config.log) {
        eprintln!("{:#}", e);
    }

    if let Err(e) = try_main(&cli, config) {
        fatal(&e);
    }
}

/// Report on stderr whatever the log filter says, then exit 1.
fn fatal(e: &anyhow::Error) -> ! {
    eprintln!("{:#}", e);
    exit(1);
}

fn try_main(cli: &Cli, config: EditorConfig) -> TinyResult<()> {
    let workdir = fs::working_dir(cli.dir.as_deref())?;
    debug!("Config: {:?}", config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let mut session = Session::start(config, workdir, Tty::new(&mut input, &mut output))?;
    info!("Working directory: {}", session.workdir());
    session.run()
}
