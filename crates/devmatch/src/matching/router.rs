use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{DeveloperId, ProjectId};
use super::intake::{DeveloperSubmission, ProjectSubmission};
use super::rank::RankedMatch;
use super::repository::{MatchLedger, ProfileDirectory, RepositoryError};
use super::service::{MatchService, MatchServiceError};

/// Router builder exposing HTTP endpoints for registration, recommendations,
/// and the match ledger.
pub fn match_router<D, L>(service: Arc<MatchService<D, L>>) -> Router
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    Router::new()
        .route(
            "/api/v1/developers",
            post(register_developer_handler::<D, L>),
        )
        .route(
            "/api/v1/developers/:developer_id",
            get(developer_handler::<D, L>),
        )
        .route(
            "/api/v1/projects",
            post(register_project_handler::<D, L>).get(projects_handler::<D, L>),
        )
        .route(
            "/api/v1/projects/:project_id/recommendations",
            get(recommendations_handler::<D, L>),
        )
        .route(
            "/api/v1/projects/:project_id/matches/:developer_id",
            post(accept_match_handler::<D, L>),
        )
        .route("/api/v1/matches", get(matches_handler::<D, L>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationQuery {
    limit: Option<usize>,
}

pub(crate) async fn register_developer_handler<D, L>(
    State(service): State<Arc<MatchService<D, L>>>,
    axum::Json(submission): axum::Json<DeveloperSubmission>,
) -> Response
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    match service.register_developer(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn developer_handler<D, L>(
    State(service): State<Arc<MatchService<D, L>>>,
    Path(developer_id): Path<String>,
) -> Response
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    let id = DeveloperId(developer_id);
    match service.developer(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn register_project_handler<D, L>(
    State(service): State<Arc<MatchService<D, L>>>,
    axum::Json(submission): axum::Json<ProjectSubmission>,
) -> Response
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    match service.register_project(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn projects_handler<D, L>(
    State(service): State<Arc<MatchService<D, L>>>,
) -> Response
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    match service.open_projects() {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<D, L>(
    State(service): State<Arc<MatchService<D, L>>>,
    Path(project_id): Path<String>,
    Query(query): Query<RecommendationQuery>,
) -> Response
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    let id = ProjectId(project_id);
    match service.recommend(&id, query.limit) {
        Ok(ranked) => {
            let views: Vec<_> = ranked.iter().map(RankedMatch::view).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn accept_match_handler<D, L>(
    State(service): State<Arc<MatchService<D, L>>>,
    Path((project_id, developer_id)): Path<(String, String)>,
) -> Response
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    let project_id = ProjectId(project_id);
    let developer_id = DeveloperId(developer_id);
    match service.accept_match(&project_id, &developer_id) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn matches_handler<D, L>(State(service): State<Arc<MatchService<D, L>>>) -> Response
where
    D: ProfileDirectory + 'static,
    L: MatchLedger + 'static,
{
    match service.saved_matches() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: MatchServiceError) -> Response {
    let status = match &error {
        MatchServiceError::Intake(_) | MatchServiceError::IneligibleMatch { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        MatchServiceError::Directory(RepositoryError::Conflict) => StatusCode::CONFLICT,
        MatchServiceError::UnknownDeveloper(_) | MatchServiceError::UnknownProject(_) => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
