/// Project gallery REST endpoints
///
/// The public listing is read-only; creation is for the site owner's
/// administrative tooling and seed scripts.

use crate::{
    api::{models::ProjectSubmission, AppState},
    catalog::{self, Showcase},
    error::{ApiError, ApiResult},
    store::Project,
};
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

/// Create project routes
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/showcase", get(showcase))
        .route("/api/projects/{id}", get(get_project))
}

/// List all projects in insertion order
///
/// GET /api/projects
/// Returns: [{ "id": 1, "title": "...", "tags": [...], ... }] (possibly empty)
async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects().await?;
    tracing::debug!("Listed {} projects", projects.len());
    Ok(Json(projects))
}

/// Gallery view with the sample catalog as fallback
///
/// GET /api/projects/showcase
/// Returns: { "source": "live" | "fallback", "projects": [...] }
async fn showcase(State(state): State<AppState>) -> Json<Showcase> {
    Json(catalog::showcase(state.store.as_ref()).await)
}

/// Get a single project
///
/// GET /api/projects/{id}
async fn get_project(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Project>> {
    let Path(id) = id.map_err(|_| ApiError::NotFound("project not found".to_string()))?;

    match state.store.get_project(id).await? {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::NotFound(format!("project {} not found", id))),
    }
}

/// Create a project
///
/// POST /api/projects
/// Body: { "title": "...", "description": "...", "imageUrl": "...", "tags": [...], "projectUrl": "..." }
async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectSubmission>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let Json(submission) = payload?;
    let new_project = submission.into_new_project().inspect_err(|e| {
        tracing::warn!("Rejected project submission: {}", e);
    })?;

    let project = state.store.create_project(new_project).await?;
    tracing::info!("🖼️ Created project {} ({})", project.id, project.title);

    Ok((StatusCode::CREATED, Json(project)))
}
