use lift_advisor::config::AppConfig;
use lift_advisor::error::AppError;
use lift_advisor::workflows::catalog::{CatalogImporter, CatalogStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog from an explicit `--catalog` flag, else `APP_CATALOG_PATH`, else the built-in list.
pub(crate) fn load_catalog(override_path: Option<&Path>) -> Result<CatalogStore, AppError> {
    if let Some(path) = override_path {
        return Ok(CatalogImporter::from_path(path)?);
    }

    let config = AppConfig::load()?;
    Ok(CatalogImporter::load_or_standard(
        config.catalog.path.as_deref(),
    )?)
}
