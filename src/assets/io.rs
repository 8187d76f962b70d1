use std::future::Future;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Asset byte source.
///
/// Paths are relative to the reader's root, e.g. `meshes/<id>.json`.
pub trait AssetReader: Send + Sync + 'static {
    fn read_bytes(&self, path: &str) -> impl Future<Output = anyhow::Result<Vec<u8>>> + Send;
}

/// Local directory reader. Requires a Tokio runtime.
pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().to_path_buf(),
        }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl AssetReader for FileAssetReader {
    async fn read_bytes(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        let full = self.root_path.join(path);
        let data = tokio::fs::read(&full)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", full.display()))?;
        Ok(data)
    }
}

/// In-memory reader, for embedded assets and uploads that are already
/// resident.
#[derive(Default)]
pub struct MemoryAssetReader {
    files: RwLock<FxHashMap<String, Vec<u8>>>,
}

impl MemoryAssetReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.write().insert(path.into(), bytes.into());
    }

    pub fn remove(&self, path: &str) -> Option<Vec<u8>> {
        self.files.write().remove(path)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.files.read().contains_key(path)
    }
}

impl AssetReader for MemoryAssetReader {
    async fn read_bytes(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        let data = self.files.read().get(path).cloned();
        data.ok_or_else(|| anyhow::anyhow!("No in-memory asset at '{path}'"))
    }
}
