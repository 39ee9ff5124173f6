//! Activity Directory Service
//! 
//! A small HTTP API for listing a school's extracurricular activities
//! and signing students up for them:
//! - `GET /activities` lists every activity with its participants
//! - `POST /activities/{name}/signup?email=...` enrolls a student
//! - in-memory or JSON-file backed storage behind one trait

pub mod config;
pub mod directory;
pub mod server;
pub mod store;
pub mod utils;

// Re-exports for convenience
pub use config::AppConfig;
pub use directory::{Activity, Catalog, DirectoryError};
pub use server::{router, run_server, AppState};
pub use store::{open_store, ActivityStore, InMemoryStore, JsonFileStore};
