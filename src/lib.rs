pub mod cli;
pub mod core;
pub mod fs;
pub mod models;

pub use crate::core::materialize::{materialize, materialize_entries};
pub use crate::core::parse::{ParseOptions, parse_tree};
pub use fs::{FileSystem, RealFileSystem};
pub use models::{EntryKind, TreeEntry};
