use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio::task;

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn create_dir_all(&self, dir: &Path) -> Result<()> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            std::fs::create_dir_all(&dir)?;
            Ok(())
        })
        .await?
    }

    async fn create_file(&self, path: &Path) -> Result<()> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            std::fs::File::create(&path)?;
            Ok(())
        })
        .await?
    }
}
