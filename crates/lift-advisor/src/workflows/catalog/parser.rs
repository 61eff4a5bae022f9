use super::domain::{EquipmentSpec, PowerSource};
use super::CatalogImportError;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_models<R: Read>(reader: R) -> Result<Vec<EquipmentSpec>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut models = Vec::new();

    for record in csv_reader.deserialize::<CatalogRow>() {
        let row = record?;
        models.push(row.into_spec()?);
    }

    Ok(models)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    max_working_height_m: f64,
    max_platform_height_m: f64,
    max_outreach_m: f64,
    #[serde(default)]
    outreach_capacity_kg: Option<f64>,
    max_capacity_kg: f64,
    crew_size: u8,
    min_access_width_cm: f64,
    stowed_width_m: f64,
    stowed_length_m: f64,
    stowed_height_m: f64,
    weight_kg: f64,
    power_type: String,
    #[serde(default)]
    power_description: String,
    #[serde(default, deserialize_with = "flag")]
    auto_level: bool,
    max_work_slope_deg: f64,
    max_travel_slope_pct: f64,
    #[serde(default)]
    basket_rotation: String,
    /// Semicolon separated.
    #[serde(default)]
    features: String,
    #[serde(default, deserialize_with = "flag")]
    supports_negative_access: bool,
}

impl CatalogRow {
    fn into_spec(self) -> Result<EquipmentSpec, CatalogImportError> {
        let power: PowerSource =
            self.power_type
                .parse()
                .map_err(|source| CatalogImportError::PowerSource {
                    id: self.id.clone(),
                    source,
                })?;

        let power_description = if self.power_description.is_empty() {
            power.label().to_string()
        } else {
            self.power_description
        };

        let features = self
            .features
            .split(';')
            .map(str::trim)
            .filter(|feature| !feature.is_empty())
            .map(str::to_string)
            .collect();

        Ok(EquipmentSpec {
            id: self.id,
            name: self.name,
            max_working_height_m: self.max_working_height_m,
            max_platform_height_m: self.max_platform_height_m,
            max_outreach_m: self.max_outreach_m,
            outreach_capacity_kg: self.outreach_capacity_kg,
            max_capacity_kg: self.max_capacity_kg,
            crew_size: self.crew_size,
            min_access_width_cm: self.min_access_width_cm,
            stowed_width_m: self.stowed_width_m,
            stowed_length_m: self.stowed_length_m,
            stowed_height_m: self.stowed_height_m,
            weight_kg: self.weight_kg,
            power,
            power_description,
            auto_level: self.auto_level,
            max_work_slope_deg: self.max_work_slope_deg,
            max_travel_slope_pct: self.max_travel_slope_pct,
            basket_rotation: self.basket_rotation,
            features,
            supports_negative_access: self.supports_negative_access,
        })
    }
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(|value| value.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(value) => match value.as_str() {
            "" | "no" | "false" | "0" => Ok(false),
            "yes" | "true" | "1" => Ok(true),
            other => Err(serde::de::Error::custom(format!(
                "expected yes/no flag, found '{other}'"
            ))),
        },
    }
}
