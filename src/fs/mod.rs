mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// The two side effects the materializer performs. `create_dir_all` is
/// idempotent including missing intermediate segments; `create_file` creates
/// an empty file, truncating any existing one.
#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn create_dir_all(&self, dir: &Path) -> Result<()>;
    async fn create_file(&self, path: &Path) -> Result<()>;
}
