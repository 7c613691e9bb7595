//! Artifact persistence for generated portfolio HTML.
//!
//! The store is an abstraction seam: handlers only see `ArtifactStore`, the
//! default implementation writes to the local filesystem under the configured
//! output directory. Names are random, so concurrent requests never contend
//! on the same path.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Persists `content` under `name` and returns the public-relative
    /// locator for the stored artifact.
    async fn save(&self, name: &str, content: &str) -> Result<String>;
}

/// Filesystem-backed artifact store.
pub struct FsArtifactStore {
    root: PathBuf,
    public_prefix: String,
}

impl FsArtifactStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn save(&self, name: &str, content: &str) -> Result<String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("failed to create output dir {}", self.root.display()))?;

        let path = self.root.join(name);
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("failed to write artifact {}", path.display()))?;

        Ok(format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            name
        ))
    }
}

/// Collision-resistant artifact name: `<prefix>_<8 hex chars>.html`.
pub fn artifact_name(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}.html", &id[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_save_writes_file_and_returns_locator() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArtifactStore::new(dir.path(), "/generated_portfolios");

        let locator = store.save("portfolio_abc123.html", "<html></html>").await.unwrap();

        assert_eq!(locator, "/generated_portfolios/portfolio_abc123.html");
        let on_disk = std::fs::read_to_string(dir.path().join("portfolio_abc123.html")).unwrap();
        assert_eq!(on_disk, "<html></html>");
    }

    #[tokio::test]
    async fn test_save_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("not").join("yet");
        let store = FsArtifactStore::new(&nested, "/generated_portfolios");

        store.save("p.html", "x").await.unwrap();
        assert!(nested.join("p.html").exists());
    }

    #[test]
    fn test_artifact_names_are_unique_and_well_formed() {
        let names: HashSet<String> = (0..100).map(|_| artifact_name("portfolio")).collect();
        assert_eq!(names.len(), 100);
        for name in &names {
            assert!(name.starts_with("portfolio_"));
            assert!(name.ends_with(".html"));
            assert_eq!(name.len(), "portfolio_".len() + 8 + ".html".len());
        }
    }
}
