//! Sink implementations
//!
//! A sink is any `std::io::Write + Send` value. These are the ones the
//! crate ships with.

pub mod console;
pub mod file;
pub mod memory;

pub use console::Console;
pub use file::FileSink;
pub use memory::MemorySink;
