use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{
    degrees_from_percent, AccessCategory, ElevatorAccess, JobRequirement, JobType, Terrain,
};

/// Job requirement exactly as entered in the intake form. Every field may be blank.
///
/// Numeric fields accept either JSON numbers or strings so form values can be
/// forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawJobRequirement {
    #[serde(default, deserialize_with = "form_value")]
    pub height_m: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub outreach_m: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub access_type: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub access_width_cm: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub access_height_cm: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub elevator_max_kg: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub elevator_cab_width_cm: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub elevator_cab_depth_cm: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub terrain: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub indoor: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub emissions_restriction: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub needs_negative_access: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub slope_value: Option<String>,
    #[serde(default, deserialize_with = "form_value")]
    pub slope_unit: Option<String>,
}

impl RawJobRequirement {
    pub fn normalize(&self) -> JobRequirement {
        normalize(self)
    }
}

/// Unit the slope was entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlopeUnit {
    #[default]
    Degrees,
    Percent,
}

impl SlopeUnit {
    fn from_label(value: Option<&str>) -> Self {
        match value.map(fold).as_deref() {
            Some("pct" | "percent" | "%" | "porcentaje") => SlopeUnit::Percent,
            _ => SlopeUnit::Degrees,
        }
    }
}

/// Builds the canonical requirement. Never fails: unusable values become "unspecified".
pub fn normalize(raw: &RawJobRequirement) -> JobRequirement {
    let access = access_category(raw.access_type.as_deref());
    let elevator = if access == AccessCategory::Elevator {
        ElevatorAccess {
            max_load_kg: number(raw.elevator_max_kg.as_deref()),
            cab_width_cm: number(raw.elevator_cab_width_cm.as_deref()),
            cab_depth_cm: number(raw.elevator_cab_depth_cm.as_deref()),
        }
    } else {
        ElevatorAccess::default()
    };

    let indoor = matches!(
        raw.indoor.as_deref().map(fold).as_deref(),
        Some("indoor" | "interior")
    ) || flag(raw.indoor.as_deref());

    JobRequirement {
        height_m: number(raw.height_m.as_deref()).unwrap_or(0.0),
        outreach_m: number(raw.outreach_m.as_deref()),
        access,
        access_width_cm: number(raw.access_width_cm.as_deref()).unwrap_or(0.0),
        access_height_cm: number(raw.access_height_cm.as_deref()),
        elevator,
        terrain: terrain(raw.terrain.as_deref()),
        indoor,
        job_type: job_type(raw.job_type.as_deref()),
        notes: raw.notes.as_deref().map(str::trim).unwrap_or_default().to_string(),
        emissions_restricted: flag(raw.emissions_restriction.as_deref()),
        needs_negative_access: flag(raw.needs_negative_access.as_deref()),
        slope_deg: slope_degrees(raw.slope_value.as_deref(), raw.slope_unit.as_deref()),
    }
}

/// Derived slope in degrees; `None` when the slope was left blank.
pub fn slope_degrees(value: Option<&str>, unit: Option<&str>) -> Option<f64> {
    let value = number(value)?;
    match SlopeUnit::from_label(unit) {
        SlopeUnit::Degrees => Some(value),
        SlopeUnit::Percent => Some(degrees_from_percent(value)),
    }
}

fn number(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn flag(value: Option<&str>) -> bool {
    matches!(
        value.map(fold).as_deref(),
        Some("yes" | "y" | "si" | "true" | "1")
    )
}

fn access_category(value: Option<&str>) -> AccessCategory {
    match value.map(fold).as_deref() {
        Some("corridor" | "pasillo") => AccessCategory::Corridor,
        Some("gate" | "porton") => AccessCategory::Gate,
        Some("elevator" | "lift" | "ascensor") => AccessCategory::Elevator,
        _ => AccessCategory::Door,
    }
}

fn terrain(value: Option<&str>) -> Terrain {
    match value.map(fold).as_deref() {
        None | Some("") | Some("flat" | "plano") => Terrain::Flat,
        Some("mixed" | "mixto") => Terrain::Mixed,
        Some("irregular") => Terrain::Irregular,
        Some(_) => Terrain::Other(value.unwrap_or_default().trim().to_string()),
    }
}

fn job_type(value: Option<&str>) -> JobType {
    match value.map(fold).as_deref() {
        None | Some("") | Some("maintenance" | "mantencion") => JobType::Maintenance,
        Some("installation" | "instalacion") => JobType::Installation,
        Some("construction" | "construccion") => JobType::Construction,
        Some("inspection" | "inspeccion") => JobType::Inspection,
        Some(_) => JobType::Other(value.unwrap_or_default().trim().to_string()),
    }
}

/// Lowercases, trims and strips the Spanish accents used in form labels.
fn fold(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

fn form_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FormValue {
        Text(String),
        Number(f64),
        Flag(bool),
    }

    let value = Option::<FormValue>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        FormValue::Text(text) => text,
        FormValue::Number(number) => number.to_string(),
        FormValue::Flag(flag) => if flag { "yes" } else { "no" }.to_string(),
    }))
}
