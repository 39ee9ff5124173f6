//! Durable JSON-file store
//! 
//! The whole catalog is rewritten after every accepted signup. Small
//! directories only; there is no journaling.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::ActivityStore;
use crate::directory::{seed_catalog, Catalog, DirectoryError};

pub struct JsonFileStore {
    path: PathBuf,
    catalog: RwLock<Catalog>,
}

impl JsonFileStore {
    /// Open the catalog file at `path`, seeding it when it does not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();

        let exists = fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to stat activity file {}", path.display()))?;

        let catalog = if exists {
            let json = fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read activity file {}", path.display()))?;
            let catalog: Catalog = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse activity file {}", path.display()))?;
            catalog
                .validate()
                .with_context(|| format!("Invalid activity file {}", path.display()))?;
            catalog
        } else {
            info!("📄 Seeding new activity file at {}", path.display());
            let catalog = seed_catalog();
            write_catalog(&path, &catalog).await?;
            catalog
        };

        Ok(Self {
            path,
            catalog: RwLock::new(catalog),
        })
    }
}

async fn write_catalog(path: &Path, catalog: &Catalog) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(catalog).context("Failed to serialize activities")?;
    fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write activity file {}", path.display()))
}

#[async_trait]
impl ActivityStore for JsonFileStore {
    async fn list(&self) -> Result<Catalog, DirectoryError> {
        Ok(self.catalog.read().await.clone())
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        let mut catalog = self.catalog.write().await;
        catalog.signup(activity, email)?;

        if let Err(e) = write_catalog(&self.path, &catalog).await {
            error!("Persisting signup of {} for {} failed: {:#}", email, activity, e);
            if let Some(entry) = catalog.get_mut(activity) {
                entry.withdraw_last(email);
            }
            return Err(DirectoryError::Storage(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_seeds_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("activities.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        assert!(path.exists());
        assert_eq!(store.list().await.unwrap(), seed_catalog());
    }

    #[tokio::test]
    async fn test_signup_survives_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("activities.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        store.signup("Teatro", "ana@mergington.edu").await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let catalog = reopened.list().await.unwrap();
        assert_eq!(catalog.get("Teatro").unwrap().participants, vec!["ana@mergington.edu"]);
        assert_eq!(catalog.names(), seed_catalog().names());
    }

    #[tokio::test]
    async fn test_rejected_signup_leaves_file_untouched() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("activities.json");

        let store = JsonFileStore::open(&path).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = store.signup("Knitting", "a@x.edu").await.unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_failed_write_rolls_back() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("activities.json");
        let store = JsonFileStore::open(&path).await.unwrap();

        // Replace the file with a directory so the next write fails.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let err = store.signup("Volei", "a@x.edu").await.unwrap_err();
        assert!(matches!(err, DirectoryError::Storage(_)));

        let catalog = store.list().await.unwrap();
        assert!(catalog.get("Volei").unwrap().participants.is_empty());
    }

    #[tokio::test]
    async fn test_open_rejects_over_capacity_roster() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("activities.json");
        std::fs::write(
            &path,
            r#"{"Tiny":{"description":"d","schedule":"s","max_participants":1,"participants":["a@x.edu","b@x.edu"]}}"#,
        )
        .unwrap();

        let err = JsonFileStore::open(&path).await.err().unwrap();
        assert!(format!("{err:#}").contains("Tiny"), "{err:#}");
    }

    #[tokio::test]
    async fn test_open_rejects_duplicate_roster() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("activities.json");
        std::fs::write(
            &path,
            r#"{"Tiny":{"description":"d","schedule":"s","max_participants":5,"participants":["a@x.edu","a@x.edu"]}}"#,
        )
        .unwrap();

        let err = JsonFileStore::open(&path).await.err().unwrap();
        assert!(format!("{err:#}").contains("a@x.edu"), "{err:#}");
    }

    #[tokio::test]
    async fn test_open_rejects_corrupt_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("activities.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(JsonFileStore::open(&path).await.is_err());
    }
}
