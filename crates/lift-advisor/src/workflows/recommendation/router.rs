use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::normalizer::RawJobRequirement;
use super::service::{LeadRequest, LeadResponse, RecommendationService};
use crate::error::AppError;

/// Router builder exposing the catalog, ranking and lead endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler))
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/leads", post(lead_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler(State(service): State<Arc<RecommendationService>>) -> Response {
    (StatusCode::OK, Json(service.catalog())).into_response()
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(raw): Json<RawJobRequirement>,
) -> Response {
    let recommendation = service.recommend(&raw);
    (StatusCode::OK, Json(recommendation)).into_response()
}

pub(crate) async fn lead_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(request): Json<LeadRequest>,
) -> Result<(StatusCode, Json<LeadResponse>), AppError> {
    let response = service.lead(&request)?;
    Ok((StatusCode::CREATED, Json(response)))
}
