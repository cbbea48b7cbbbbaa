use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::fs::FileSystem;
use crate::models::{EntryKind, TreeEntry};

use super::parse::{ParseOptions, parse_tree};

/// Create every directory and file denoted by `entries` under `root`,
/// nested according to depth.
///
/// Parents are resolved with an ancestor stack seeded with a sentinel at
/// depth -1, so every real entry compares greater than the stack bottom.
/// Entries are processed sequentially in input order; the first filesystem
/// failure aborts the run, and anything already created stays on disk.
pub async fn materialize_entries<F: FileSystem>(
    fs: &F,
    entries: &[TreeEntry],
    root: &Path,
) -> anyhow::Result<()> {
    fs.create_dir_all(root)
        .await
        .with_context(|| format!("failed to create root directory {}", root.display()))?;

    let mut ancestors: Vec<(PathBuf, i64)> = vec![(root.to_path_buf(), -1)];

    for entry in entries {
        let depth = entry.depth as i64;

        // Close out siblings and deeper subtrees. An equal-depth sibling
        // pops exactly one frame; a multi-level dedent pops several.
        while ancestors.last().is_some_and(|(_, d)| *d >= depth) {
            ancestors.pop();
        }

        // The sentinel never pops, so the stack is never empty here.
        let parent = ancestors
            .last()
            .map(|(path, _)| path.clone())
            .unwrap_or_else(|| root.to_path_buf());
        let path = parent.join(&entry.name);

        match entry.kind {
            EntryKind::Directory => {
                fs.create_dir_all(&path)
                    .await
                    .with_context(|| format!("failed to create directory {}", path.display()))?;
                tracing::debug!(path = %path.display(), depth = entry.depth, "created directory");
                ancestors.push((path, depth));
            }
            EntryKind::File => {
                fs.create_file(&path)
                    .await
                    .with_context(|| format!("failed to create file {}", path.display()))?;
                tracing::debug!(path = %path.display(), depth = entry.depth, "created file");
            }
        }
    }

    Ok(())
}

/// Parse `tree` and materialize it under `root` in one call. Returns the
/// parsed entry sequence for callers that want the typed tree; the
/// filesystem effects are the primary contract.
pub async fn materialize<F: FileSystem>(
    fs: &F,
    tree: &str,
    root: &Path,
    options: &ParseOptions,
) -> anyhow::Result<Vec<TreeEntry>> {
    let entries = parse_tree(tree, options)?;
    materialize_entries(fs, &entries, root).await?;
    Ok(entries)
}
