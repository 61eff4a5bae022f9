use serde::{Deserialize, Serialize};

use crate::workflows::catalog::EquipmentSpec;

/// Physical opening the machine must travel through to reach the job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessCategory {
    #[default]
    Door,
    Corridor,
    Gate,
    Elevator,
}

impl AccessCategory {
    pub fn label(self) -> &'static str {
        match self {
            AccessCategory::Door => "door",
            AccessCategory::Corridor => "corridor",
            AccessCategory::Gate => "gate",
            AccessCategory::Elevator => "elevator",
        }
    }
}

/// Ground conditions reported for the job site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    Flat,
    Mixed,
    Irregular,
    Other(String),
}

impl Terrain {
    pub fn label(&self) -> &str {
        match self {
            Terrain::Flat => "flat",
            Terrain::Mixed => "mixed",
            Terrain::Irregular => "irregular",
            Terrain::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    #[default]
    Maintenance,
    Installation,
    Construction,
    Inspection,
    Other(String),
}

impl JobType {
    pub fn label(&self) -> &str {
        match self {
            JobType::Maintenance => "maintenance",
            JobType::Installation => "installation",
            JobType::Construction => "construction",
            JobType::Inspection => "inspection",
            JobType::Other(value) => value,
        }
    }
}

/// Elevator limits collected when the machine has to ride a lift to the job floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevatorAccess {
    pub max_load_kg: Option<f64>,
    pub cab_width_cm: Option<f64>,
    pub cab_depth_cm: Option<f64>,
}

/// Canonical job requirement evaluated against every catalog model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub height_m: f64,
    pub outreach_m: Option<f64>,
    pub access: AccessCategory,
    pub access_width_cm: f64,
    pub access_height_cm: Option<f64>,
    pub elevator: ElevatorAccess,
    pub terrain: Terrain,
    pub indoor: bool,
    pub job_type: JobType,
    pub notes: String,
    pub emissions_restricted: bool,
    pub needs_negative_access: bool,
    pub slope_deg: Option<f64>,
}

impl JobRequirement {
    /// Elevator limits, only when the access category is an elevator.
    pub fn elevator(&self) -> Option<&ElevatorAccess> {
        match self.access {
            AccessCategory::Elevator => Some(&self.elevator),
            _ => None,
        }
    }

    /// Slope expressed as a percent grade.
    pub fn slope_pct(&self) -> Option<f64> {
        self.slope_deg.map(percent_from_degrees)
    }
}

pub fn degrees_from_percent(percent: f64) -> f64 {
    (percent / 100.0).atan().to_degrees()
}

pub fn percent_from_degrees(degrees: f64) -> f64 {
    degrees.to_radians().tan() * 100.0
}

/// One catalog model scored against a requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub equipment: EquipmentSpec,
    pub score: f64,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

impl ScoredCandidate {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
