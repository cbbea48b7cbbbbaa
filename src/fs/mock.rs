use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::FileSystem;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Call {
    CreateDirAll,
    CreateFile,
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    errors: HashMap<PathBuf, String>,
    calls: Vec<(Call, PathBuf)>,
}

impl MockFileSystem {
    pub fn set_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.errors.insert(path.into(), message.into());
    }

    pub fn calls(&self) -> Vec<(Call, PathBuf)> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.paths_for(Call::CreateDirAll)
    }

    pub fn created_files(&self) -> Vec<PathBuf> {
        self.paths_for(Call::CreateFile)
    }

    fn paths_for(&self, call: Call) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner
            .calls
            .iter()
            .filter(|(c, _)| *c == call)
            .map(|(_, p)| p.clone())
            .collect()
    }

    fn record(&self, call: Call, path: &Path) -> Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push((call, path.to_path_buf()));
        match inner.errors.get(path) {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn create_dir_all(&self, dir: &Path) -> Result<()> {
        self.record(Call::CreateDirAll, dir)
    }

    async fn create_file(&self, path: &Path) -> Result<()> {
        self.record(Call::CreateFile, path)
    }
}
