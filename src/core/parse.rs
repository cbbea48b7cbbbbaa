use anyhow::bail;

use crate::models::{EntryKind, TreeEntry};

/// Glyphs that draw the tree but carry no name information.
const DECORATION: [char; 4] = ['│', '├', '└', '─'];

/// Configuration for indentation normalization and name classification.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Leading decoration/space characters per nesting level
    pub indent_width: usize,
    /// Classify a dot-free name without a trailing '/' as a directory.
    /// A trailing '/' is always authoritative; this heuristic is the
    /// fallback, and misclassifies directories like `v1.2` when enabled.
    pub dotless_is_dir: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            dotless_is_dir: true,
        }
    }
}

fn is_decoration(c: char) -> bool {
    DECORATION.contains(&c)
}

/// Nesting rank of a line: the length of its leading run of decoration
/// characters and spaces, normalized by `indent_width`. Irregular prefixes
/// resolve by truncating division, never an error.
fn indent_depth(line: &str, indent_width: usize) -> usize {
    let prefix_len = line
        .chars()
        .take_while(|&c| c == ' ' || is_decoration(c))
        .count();
    prefix_len / indent_width.max(1)
}

/// Strip decoration characters anywhere in the line, then surrounding
/// whitespace, yielding the candidate name.
fn cleaned_name(line: &str) -> String {
    line.chars()
        .filter(|&c| !is_decoration(c))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Parse a tree diagram into an ordered sequence of classified entries.
///
/// Blank lines and `#` comments are discarded. A line that strips to an
/// empty name (decoration only) is a parse error rather than a degenerate
/// empty path segment.
pub fn parse_tree(text: &str, options: &ParseOptions) -> anyhow::Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.split('#').next().unwrap_or("");
        if line.trim().is_empty() {
            continue;
        }

        let depth = indent_depth(line, options.indent_width);
        let name = cleaned_name(line);

        let (name, kind) = if let Some(stripped) = trim_trailing(&name, '/') {
            // Trailing separator is authoritative.
            (stripped, EntryKind::Directory)
        } else if let Some(stripped) = trim_trailing(&name, '*') {
            // `ls -F` executable marker, always a file.
            (stripped, EntryKind::File)
        } else if options.dotless_is_dir && !name.contains('.') {
            (name, EntryKind::Directory)
        } else {
            (name, EntryKind::File)
        };

        if name.is_empty() {
            bail!("line {}: no name after stripping tree decoration", index + 1);
        }

        tracing::debug!(line = index + 1, %name, ?kind, depth, "parsed entry");
        entries.push(TreeEntry { name, kind, depth });
    }

    Ok(entries)
}

fn trim_trailing(name: &str, marker: char) -> Option<String> {
    name.ends_with(marker)
        .then(|| name.trim_end_matches(marker).to_owned())
}
