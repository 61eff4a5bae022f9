use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::CatalogImportError;

/// Power-source category of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerSource {
    Electric,
    DieselAc,
    GasolineAc,
    Hybrid,
}

impl PowerSource {
    /// Electric and hybrid machines suit indoor work and emission-restricted sites.
    pub fn is_low_emission(self) -> bool {
        matches!(self, PowerSource::Electric | PowerSource::Hybrid)
    }

    pub fn label(self) -> &'static str {
        match self {
            PowerSource::Electric => "electric",
            PowerSource::DieselAc => "diesel + AC",
            PowerSource::GasolineAc => "gasoline + AC",
            PowerSource::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for PowerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a power-source label is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown power source '{0}'")]
pub struct UnknownPowerSource(pub String);

impl FromStr for PowerSource {
    type Err = UnknownPowerSource;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .to_ascii_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        match normalized.as_str() {
            "electric" => Ok(PowerSource::Electric),
            "diesel_ac" | "diesel_220" => Ok(PowerSource::DieselAc),
            "gasoline_ac" | "gasoline_220" | "gas_220" => Ok(PowerSource::GasolineAc),
            "hybrid" => Ok(PowerSource::Hybrid),
            _ => Err(UnknownPowerSource(value.trim().to_string())),
        }
    }
}

/// Fixed technical sheet of one catalog model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSpec {
    pub id: String,
    pub name: String,
    pub max_working_height_m: f64,
    pub max_platform_height_m: f64,
    pub max_outreach_m: f64,
    pub outreach_capacity_kg: Option<f64>,
    pub max_capacity_kg: f64,
    pub crew_size: u8,
    pub min_access_width_cm: f64,
    pub stowed_width_m: f64,
    pub stowed_length_m: f64,
    pub stowed_height_m: f64,
    pub weight_kg: f64,
    pub power: PowerSource,
    pub power_description: String,
    pub auto_level: bool,
    pub max_work_slope_deg: f64,
    pub max_travel_slope_pct: f64,
    pub basket_rotation: String,
    pub features: Vec<String>,
    /// Basket can be lowered below the level of the outrigger base.
    pub supports_negative_access: bool,
}

impl EquipmentSpec {
    pub fn stowed_width_cm(&self) -> f64 {
        metres_to_cm(self.stowed_width_m)
    }

    pub fn stowed_length_cm(&self) -> f64 {
        metres_to_cm(self.stowed_length_m)
    }

    pub fn stowed_height_cm(&self) -> f64 {
        metres_to_cm(self.stowed_height_m)
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogImportError> {
        let measures = [
            ("max_working_height_m", self.max_working_height_m),
            ("max_platform_height_m", self.max_platform_height_m),
            ("max_outreach_m", self.max_outreach_m),
            ("max_capacity_kg", self.max_capacity_kg),
            ("min_access_width_cm", self.min_access_width_cm),
            ("stowed_width_m", self.stowed_width_m),
            ("stowed_length_m", self.stowed_length_m),
            ("stowed_height_m", self.stowed_height_m),
            ("weight_kg", self.weight_kg),
            ("max_work_slope_deg", self.max_work_slope_deg),
            ("max_travel_slope_pct", self.max_travel_slope_pct),
        ];

        let outreach_capacity = self
            .outreach_capacity_kg
            .map(|value| ("outreach_capacity_kg", value));

        for (field, value) in measures.into_iter().chain(outreach_capacity) {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogImportError::InvalidMeasure {
                    id: self.id.clone(),
                    field,
                    value,
                });
            }
        }

        if self.id.trim().is_empty() {
            return Err(CatalogImportError::MissingId {
                name: self.name.clone(),
            });
        }

        Ok(())
    }
}

fn metres_to_cm(metres: f64) -> f64 {
    (metres * 100.0).round()
}

/// Read-only list of catalog models, kept in declaration order.
///
/// Cloning shares the underlying records.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    models: Arc<[EquipmentSpec]>,
}

impl CatalogStore {
    /// Builds a store after checking every model's invariants and identifier uniqueness.
    pub fn new(models: Vec<EquipmentSpec>) -> Result<Self, CatalogImportError> {
        for (index, model) in models.iter().enumerate() {
            model.validate()?;
            if models[..index].iter().any(|earlier| earlier.id == model.id) {
                return Err(CatalogImportError::DuplicateId(model.id.clone()));
            }
        }

        Ok(Self {
            models: models.into(),
        })
    }

    pub(super) fn from_trusted(models: Vec<EquipmentSpec>) -> Self {
        Self {
            models: models.into(),
        }
    }

    pub fn models(&self) -> &[EquipmentSpec] {
        &self.models
    }

    pub fn get(&self, id: &str) -> Option<&EquipmentSpec> {
        self.models.iter().find(|model| model.id == id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
