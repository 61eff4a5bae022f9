use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::catalog::CatalogStore;
use crate::workflows::recommendation::normalizer::RawJobRequirement;
use crate::workflows::recommendation::router::{lead_handler, recommendation_router};
use crate::workflows::recommendation::service::{LeadRequest, RecommendationService};

fn service() -> Arc<RecommendationService> {
    Arc::new(RecommendationService::new(catalog()))
}

fn raw_requirement() -> RawJobRequirement {
    RawJobRequirement {
        height_m: Some("12".to_string()),
        access_type: Some("door".to_string()),
        access_width_cm: Some("100".to_string()),
        indoor: Some("yes".to_string()),
        ..RawJobRequirement::default()
    }
}

fn post_json(uri: &str, body: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn recommendation_route_returns_ranked_candidates() {
    let router = recommendation_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/recommendations",
            json!({
                "height_m": "12",
                "access_type": "Puerta",
                "access_width_cm": 100,
                "indoor": "Sí"
            }),
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["requirement"]["height_m"], json!(12.0));
    assert_eq!(payload["requirement"]["indoor"], json!(true));
    let candidates = payload["candidates"].as_array().expect("candidate list");
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[0]["id"], json!("pso-18bl"));
    assert!(candidates[0]["reasons"].as_array().is_some());
}

#[tokio::test]
async fn catalog_route_lists_every_model() {
    let router = recommendation_router(service());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/catalog")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let models = payload.as_array().expect("model list");
    assert_eq!(models.len(), 6);
    assert_eq!(models[0]["id"], json!("pso-11bl"));
}

#[tokio::test]
async fn lead_route_returns_created_with_message() {
    let router = recommendation_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/leads",
            json!({
                "contact": contact(),
                "requirement": { "height_m": 12, "access_width_cm": 100 }
            }),
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    let message = payload["message"].as_str().expect("message text");
    assert!(message.contains("RECOMMENDED EQUIPMENT"));
    assert!(message.contains("Constructora Andes"));
    assert_eq!(payload["lead"]["contact"]["phone"], json!("+56987654321"));
    assert_eq!(payload["lead"]["company"]["tax_id"], json!("76.543.210-K"));
    let link = payload["whatsapp_url"].as_str().expect("chat link");
    assert!(link.starts_with("https://wa.me/56942600557?text="));
    assert!(!link.contains(' '));
}

#[tokio::test]
async fn lead_handler_rejects_invalid_email() {
    let mut details = contact();
    details.email = "camila.andes.cl".to_string();

    let response = lead_handler(
        State(service()),
        axum::Json(LeadRequest {
            contact: details,
            requirement: raw_requirement(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error text")
        .contains("camila.andes.cl"));
}

#[tokio::test]
async fn lead_handler_reports_unavailable_without_catalog() {
    let empty = CatalogStore::new(Vec::new()).expect("empty catalog is valid");
    let service = Arc::new(RecommendationService::new(empty));

    let response = lead_handler(
        State(service),
        axum::Json(LeadRequest {
            contact: contact(),
            requirement: raw_requirement(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
