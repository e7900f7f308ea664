/// Contact form REST endpoints
///
/// Each accepted submission writes exactly one row. Nothing is retried or
/// deduplicated; a failed submission must be resent by the visitor.

use crate::{
    api::{models::ContactSubmission, AppState},
    error::ApiResult,
    store::Contact,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};

/// Create contact routes
pub fn create_contact_routes() -> Router<AppState> {
    Router::new().route("/api/contacts", post(create_contact).get(list_contacts))
}

/// Submit the contact form
///
/// POST /api/contacts
/// Body: { "name": "...", "email": "...", "subject": "...", "message": "..." }
/// Returns: 201 with the stored contact, 400 on invalid input, 500 on store failure
async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let Json(submission) = payload?;
    let new_contact = submission.into_new_contact().inspect_err(|e| {
        tracing::warn!("Rejected contact submission: {}", e);
    })?;

    let contact = state.store.create_contact(new_contact).await?;
    tracing::info!("📨 Stored contact message {}", contact.id);
    tracing::debug!("Contact message {} sent by {}", contact.id, contact.email);

    Ok((StatusCode::CREATED, Json(contact)))
}

/// List received contact messages, oldest first
///
/// GET /api/contacts
async fn list_contacts(State(state): State<AppState>) -> ApiResult<Json<Vec<Contact>>> {
    Ok(Json(state.store.list_contacts().await?))
}
