//! File-system access and the in-memory file registry.

mod ops;
pub mod registry;

pub use ops::{
    check_filename, create_file, file_remove, join_path, open_append, open_read,
    scan_regular_files, working_dir,
};
pub use registry::{FileRecord, FileRegistry, retain_block};
