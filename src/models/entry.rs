#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One classified line of a tree diagram: a decoration-free name, whether it
/// denotes a directory or a file, and its nesting rank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
    pub depth: usize,
}
