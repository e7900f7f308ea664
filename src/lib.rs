/// Portfolio API: project gallery and contact inbox backend
///
/// Two thin request-handler groups over a pluggable store, plus the sample
/// project catalog shown when the gallery is empty.

// Configuration from environment variables
pub mod config;

// Persistence layer - trait seam with SQLite and in-memory engines
pub mod store;

// Sample project catalog and showcase fallback policy
pub mod catalog;

// HTTP error taxonomy
pub mod error;

// HTTP API layer - REST endpoints for projects and contacts
pub mod api;

// Server setup and initialization
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server};
pub use store::{Contact, PortfolioStore, Project};
