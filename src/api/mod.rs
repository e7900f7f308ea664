/// HTTP API Layer
///
/// REST endpoints for the portfolio site:
/// - Project gallery listing, lookup, creation and the showcase view
/// - Contact form submission and inbox listing

// Request body models and validation
pub mod models;

// Project gallery endpoints
pub mod projects;

// Contact form endpoints
pub mod contacts;

use crate::{error::ApiError, store::PortfolioStore};
use axum::{extract::rejection::JsonRejection, http::StatusCode};
use std::sync::Arc;

pub use contacts::create_contact_routes;
pub use projects::create_project_routes;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Backing store for projects and contacts
    pub store: Arc<dyn PortfolioStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PortfolioStore>) -> Self {
        Self { store }
    }
}

/// Unreadable JSON bodies are reported like any other invalid input,
/// except bodies over the size limit
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge(rejection.body_text());
        }
        ApiError::Validation(format!("invalid request body: {}", rejection.body_text()))
    }
}
