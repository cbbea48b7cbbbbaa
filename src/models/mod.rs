mod entry;

pub use entry::{EntryKind, TreeEntry};
