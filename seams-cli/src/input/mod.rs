//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod zip_reader;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use zip_reader::{locate_entry, open_archive};
