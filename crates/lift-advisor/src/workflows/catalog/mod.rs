//! Equipment catalog: the read-only list of machines the advisor can recommend.

mod domain;
mod parser;
mod standard;

pub use domain::{CatalogStore, EquipmentSpec, PowerSource, UnknownPowerSource};
pub use standard::standard_catalog;

use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("model '{id}': {source}")]
    PowerSource {
        id: String,
        #[source]
        source: UnknownPowerSource,
    },
    #[error("model '{id}' has invalid {field} ({value})")]
    InvalidMeasure {
        id: String,
        field: &'static str,
        value: f64,
    },
    #[error("model '{name}' is missing an identifier")]
    MissingId { name: String },
    #[error("model identifier '{0}' appears more than once")]
    DuplicateId(String),
}

/// Loads a catalog from a CSV export, one machine per row.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CatalogStore, CatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let store = Self::from_reader(file)?;
        info!(path = %path.display(), models = store.len(), "loaded equipment catalog");
        Ok(store)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CatalogStore, CatalogImportError> {
        let models = parser::parse_models(reader)?;
        CatalogStore::new(models)
    }

    /// Uses the CSV at `path` when given, otherwise the built-in catalog.
    pub fn load_or_standard(path: Option<&Path>) -> Result<CatalogStore, CatalogImportError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(standard_catalog()),
        }
    }
}
