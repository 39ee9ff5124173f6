use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ActivityStore;
use crate::directory::{seed_catalog, Catalog, DirectoryError};

/// Process-lifetime store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    catalog: RwLock<Catalog>,
}

impl InMemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }
}

#[async_trait]
impl ActivityStore for InMemoryStore {
    async fn list(&self) -> Result<Catalog, DirectoryError> {
        Ok(self.catalog.read().await.clone())
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        self.catalog.write().await.signup(activity, email)
    }
}
