use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use crate::config::PathPolicy;
use crate::error::EditError;
use crate::TinyResult;

/// Resolve the session's working directory: `requested` if given, else the
/// process current directory. The result is absolute.
pub fn working_dir(requested: Option<&Path>) -> TinyResult<String> {
    let dir = match requested {
        Some(path) => fs::canonicalize(path),
        None => std::env::current_dir(),
    }
    .map_err(|e| EditError::StartupFailure(format!("Error getting current directory: {}", e)))?;

    let dir = dir.into_os_string().into_string().map_err(|raw| {
        EditError::StartupFailure(format!(
            "Error getting current directory: {} is not valid UTF-8",
            Path::new(&raw).display()
        ))
    })?;
    Ok(dir)
}

/// Names of the regular files directly inside `dir`, in directory order.
///
/// Symlinks are not followed, so links, subdirectories and special files are
/// all left out.
pub fn scan_regular_files(dir: &str) -> TinyResult<Vec<String>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| EditError::StartupFailure(format!("Error opening directory: {}", e)))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir, e);
                continue;
            }
        };
        match entry.file_type() {
            Ok(ft) if ft.is_file() => names.push(entry.file_name().to_string_lossy().into_owned()),
            Ok(_) => {}
            Err(e) => warn!("Skipping {:?}: {}", entry.file_name(), e),
        }
    }
    Ok(names)
}

/// `<workdir>/<name>`, no normalisation.
pub fn join_path(workdir: &str, name: &str) -> String {
    if workdir.ends_with('/') {
        format!("{}{}", workdir, name)
    } else {
        format!("{}/{}", workdir, name)
    }
}

pub fn check_filename(name: &str, policy: PathPolicy) -> Result<(), EditError> {
    match policy {
        PathPolicy::Join => Ok(()),
        PathPolicy::RejectSeparators => {
            if name == "." || name == ".." || name.contains(['/', '\\']) {
                Err(EditError::InvalidFilename)
            } else {
                Ok(())
            }
        }
    }
}

pub fn open_read(path: &str) -> io::Result<File> {
    File::open(path)
}

/// Create or truncate for writing.
pub fn create_file(path: &str) -> io::Result<File> {
    File::create(path)
}

/// Open for appending, creating the file if it has gone missing.
pub fn open_append(path: &str) -> io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}

pub fn file_remove(path: &str) -> io::Result<()> {
    fs::remove_file(path)
}
