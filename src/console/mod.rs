//! Console module - terminal I/O and logging facilities.

pub mod logger;
pub mod tty;

pub use logger::init as init_logger;
pub use tty::Tty;
