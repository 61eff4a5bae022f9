use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lift_advisor::config::AppConfig;
use lift_advisor::error::AppError;
use lift_advisor::telemetry;
use lift_advisor::workflows::catalog::CatalogImporter;
use lift_advisor::workflows::recommendation::RecommendationService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = CatalogImporter::load_or_standard(config.catalog.path.as_deref())?;
    info!(models = catalog.len(), "equipment catalog ready");
    let service = Arc::new(RecommendationService::new(catalog));

    let app = with_recommendation_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lift advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
