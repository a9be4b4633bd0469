use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::matching::rank::RecommendationPolicy;
use crate::matching::MatchService;

#[tokio::test]
async fn register_developer_route_returns_created() {
    let (service, _, _) = build_service();
    let router = match_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/developers")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&java_senior()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("id").is_some());
    assert_eq!(
        payload.get("name").and_then(Value::as_str),
        Some("Ji-won Park")
    );
    assert_eq!(
        payload
            .get("skills")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(3)
    );
}

#[tokio::test]
async fn register_developer_route_rejects_invalid_documents() {
    let (service, _, _) = build_service();
    let router = match_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/developers")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&dev_submission("  ", "backend", 4.0, Vec::new())).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("developer name is blank")
    );
}

#[tokio::test]
async fn register_developer_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(MatchService::new(
        Arc::new(ConflictDirectory),
        Arc::new(MemoryLedger::default()),
        RecommendationPolicy::default(),
    ));

    let response = crate::matching::router::register_developer_handler::<
        ConflictDirectory,
        MemoryLedger,
    >(State(service), axum::Json(java_senior()))
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_developer_handler_returns_internal_error_on_outage() {
    let service = Arc::new(MatchService::new(
        Arc::new(UnavailableDirectory),
        Arc::new(MemoryLedger::default()),
        RecommendationPolicy::default(),
    ));

    let response = crate::matching::router::register_developer_handler::<
        UnavailableDirectory,
        MemoryLedger,
    >(State(service), axum::Json(java_senior()))
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn developer_route_reports_unknown_ids() {
    let (service, _, _) = build_service();
    let router = match_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/developers/dev-missing")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("developer dev-missing is not registered")
    );
}

#[tokio::test]
async fn project_routes_register_and_list_open_projects() {
    let (service, _, _) = build_service();
    let router = match_router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/projects")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&commerce_project()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json_body(response).await;
    assert_eq!(created.get("status").and_then(Value::as_str), Some("open"));
    let project_id = created
        .get("id")
        .and_then(Value::as_str)
        .expect("project id")
        .to_string();

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/projects")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json_body(response).await;
    let projects = listed.as_array().expect("project array");
    assert_eq!(projects.len(), 1);
    assert_eq!(
        projects[0].get("id").and_then(Value::as_str),
        Some(project_id.as_str())
    );
    assert_eq!(
        projects[0].get("min_total_career").and_then(Value::as_f64),
        Some(3.0)
    );
}

#[tokio::test]
async fn recommendations_route_ranks_and_limits() {
    let (service, _, _) = build_service();
    let project = service
        .register_project(commerce_project())
        .expect("project registers");
    let senior = service
        .register_developer(java_senior())
        .expect("senior registers");
    service
        .register_developer(java_mid())
        .expect("mid registers");
    service
        .register_developer(junior_candidate())
        .expect("junior registers");
    let router = match_router_with_service(service);

    let uri = format!("/api/v1/projects/{}/recommendations?limit=1", project.id.0);
    let response = router
        .oneshot(
            axum::http::Request::get(uri.as_str())
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let ranked = payload.as_array().expect("recommendation array");
    assert_eq!(ranked.len(), 1);
    assert_eq!(
        ranked[0].get("developer_id").and_then(Value::as_str),
        Some(senior.id.0.as_str())
    );
    assert_eq!(ranked[0].get("score").and_then(Value::as_u64), Some(100));
    assert_eq!(ranked[0].get("band").and_then(Value::as_str), Some("strong"));
    assert!(ranked[0]
        .get("explanation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .starts_with("skill match breakdown:"));
}

#[tokio::test]
async fn accept_match_route_records_and_lists_matches() {
    let (service, _, _) = build_service();
    let project = service
        .register_project(commerce_project())
        .expect("project registers");
    let senior = service
        .register_developer(java_senior())
        .expect("senior registers");
    let router = match_router_with_service(service);

    let uri = format!("/api/v1/projects/{}/matches/{}", project.id.0, senior.id.0);
    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post(uri.as_str())
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let accepted = read_json_body(response).await;
    assert_eq!(accepted.get("score").and_then(Value::as_u64), Some(100));
    assert!(accepted.get("recorded_at").is_some());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/matches")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json_body(response).await;
    let matches = listed.as_array().expect("match array");
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].get("developer_id").and_then(Value::as_str),
        Some(senior.id.0.as_str())
    );
}

#[tokio::test]
async fn accept_match_route_rejects_ineligible_pairs() {
    let (service, _, _) = build_service();
    let project = service
        .register_project(commerce_project())
        .expect("project registers");
    let junior = service
        .register_developer(junior_candidate())
        .expect("junior registers");
    let router = match_router_with_service(service);

    let uri = format!("/api/v1/projects/{}/matches/{}", project.id.0, junior.id.0);
    let response = router
        .oneshot(
            axum::http::Request::post(uri.as_str())
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("not eligible to match"));
}

#[tokio::test]
async fn matches_handler_reports_ledger_outages() {
    let service = Arc::new(MatchService::new(
        Arc::new(MemoryDirectory::default()),
        Arc::new(UnavailableLedger),
        RecommendationPolicy::default(),
    ));

    let response = crate::matching::router::matches_handler::<MemoryDirectory, UnavailableLedger>(
        State(service),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
