/// Persistence layer for projects and contact messages
///
/// The HTTP handlers only see the `PortfolioStore` trait. Two engines ship:
/// - `SqliteStore`: sqlx-backed SQLite file (default)
/// - `MemoryStore`: in-process vectors for ephemeral runs

pub mod memory;
pub mod sqlite;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use types::{Contact, NewContact, NewProject, Project};

/// Failures raised by a store engine
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database could not be reached or rejected the statement
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored column could not be decoded (e.g. a corrupt tags array)
    #[error("corrupt record: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Engine-specific outage not covered above
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Key-based store holding `Project` and `Contact` records
///
/// Implementations serialize concurrent writes themselves and return records
/// in insertion order.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// All projects, oldest first
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;

    async fn get_project(&self, id: i64) -> StoreResult<Option<Project>>;

    /// Insert a project and return it with its assigned id and timestamp
    async fn create_project(&self, project: NewProject) -> StoreResult<Project>;

    async fn count_projects(&self) -> StoreResult<u64>;

    /// All contact messages, oldest first
    async fn list_contacts(&self) -> StoreResult<Vec<Contact>>;

    /// Insert a contact message. Never deduplicates.
    async fn create_contact(&self, contact: NewContact) -> StoreResult<Contact>;
}
