//! Activity Storage Interface and Implementations
//! 
//! Every store performs the whole signup check-and-append under a single
//! write lock, so two concurrent signups for the last open slot cannot
//! both be accepted.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::directory::{Catalog, DirectoryError};

/// Interface shared by every activity store
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Snapshot of every activity with its current participants
    async fn list(&self) -> Result<Catalog, DirectoryError>;

    /// Sign a student up for an activity
    async fn signup(&self, activity: &str, email: &str) -> Result<(), DirectoryError>;
}

/// Open the configured store: a JSON file when `path` is given, memory otherwise.
pub async fn open_store(path: Option<&Path>) -> anyhow::Result<Arc<dyn ActivityStore>> {
    match path {
        Some(path) => {
            info!("💾 Using JSON activity store at {}", path.display());
            Ok(Arc::new(JsonFileStore::open(path).await?))
        }
        None => {
            info!("🧠 Using in-memory activity store");
            Ok(Arc::new(InMemoryStore::seeded()))
        }
    }
}
