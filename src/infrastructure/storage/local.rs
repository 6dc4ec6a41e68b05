use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Local-disk storage rooted at the configured audio directory.
///
/// The root is injected rather than hard-coded so tests can point it at a
/// temporary directory. Uniqueness of names inside the root is the path
/// allocator's job; this type only resolves and manages files under it.
#[derive(Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the storage directory if it does not exist yet.
    pub async fn ensure_root(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        info!("Storage directory ready at {}", self.root.display());
        Ok(())
    }

    /// Resolves a storage-relative file name to its on-disk path.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Best-effort removal, used to clean up after failed jobs.
    pub async fn remove(&self, name: &str) {
        let _ = tokio::fs::remove_file(self.resolve(name)).await;
    }
}
