use super::domain::{CatalogStore, EquipmentSpec, PowerSource};

/// The six PSO spider lifts currently offered for rent, in catalog order.
pub fn standard_catalog() -> CatalogStore {
    CatalogStore::from_trusted(standard_models())
}

fn standard_models() -> Vec<EquipmentSpec> {
    vec![
        EquipmentSpec {
            id: "pso-11bl".to_string(),
            name: "PSO-11BL".to_string(),
            max_working_height_m: 10.8,
            max_platform_height_m: 8.8,
            max_outreach_m: 6.2,
            outreach_capacity_kg: Some(120.0),
            max_capacity_kg: 200.0,
            crew_size: 2,
            min_access_width_cm: 84.0,
            stowed_width_m: 0.84,
            stowed_length_m: 3.38,
            stowed_height_m: 1.98,
            weight_kg: 1535.0,
            power: PowerSource::Electric,
            power_description: "Electric (lithium + 220V)".to_string(),
            auto_level: true,
            max_work_slope_deg: 11.0,
            max_travel_slope_pct: 28.0,
            basket_rotation: "2x90°".to_string(),
            features: vec![
                "Negative access (basket below outrigger level)".to_string(),
                "Compact and lightweight".to_string(),
            ],
            supports_negative_access: true,
        },
        EquipmentSpec {
            id: "pso-18bl".to_string(),
            name: "PSO-18BL".to_string(),
            max_working_height_m: 17.8,
            max_platform_height_m: 15.8,
            max_outreach_m: 9.3,
            outreach_capacity_kg: Some(120.0),
            max_capacity_kg: 230.0,
            crew_size: 2,
            min_access_width_cm: 78.0,
            stowed_width_m: 0.78,
            stowed_length_m: 4.44,
            stowed_height_m: 1.995,
            weight_kg: 2300.0,
            power: PowerSource::Electric,
            power_description: "Electric (lithium + 220V)".to_string(),
            auto_level: true,
            max_work_slope_deg: 11.0,
            max_travel_slope_pct: 28.0,
            basket_rotation: "2x90°".to_string(),
            features: vec!["Very narrow access (78 cm)".to_string()],
            supports_negative_access: false,
        },
        EquipmentSpec {
            id: "pso-18c".to_string(),
            name: "PSO-18C".to_string(),
            max_working_height_m: 17.7,
            max_platform_height_m: 15.7,
            max_outreach_m: 11.3,
            outreach_capacity_kg: Some(80.0),
            max_capacity_kg: 230.0,
            crew_size: 2,
            min_access_width_cm: 99.0,
            stowed_width_m: 0.99,
            stowed_length_m: 5.58,
            stowed_height_m: 1.98,
            weight_kg: 2400.0,
            power: PowerSource::DieselAc,
            power_description: "Dual power (diesel + 220V)".to_string(),
            auto_level: true,
            max_work_slope_deg: 11.0,
            max_travel_slope_pct: 28.0,
            basket_rotation: "No".to_string(),
            features: vec!["Long horizontal outreach (11.3 m at 80 kg)".to_string()],
            supports_negative_access: false,
        },
        EquipmentSpec {
            id: "pso-22b".to_string(),
            name: "PSO-22B".to_string(),
            max_working_height_m: 22.0,
            max_platform_height_m: 20.0,
            max_outreach_m: 10.9,
            outreach_capacity_kg: Some(200.0),
            max_capacity_kg: 250.0,
            crew_size: 2,
            min_access_width_cm: 94.5,
            stowed_width_m: 0.945,
            stowed_length_m: 5.2,
            stowed_height_m: 1.97,
            weight_kg: 2990.0,
            power: PowerSource::GasolineAc,
            power_description: "Dual power (gasoline + 220V)".to_string(),
            auto_level: true,
            max_work_slope_deg: 11.0,
            max_travel_slope_pct: 28.0,
            basket_rotation: "2x90°".to_string(),
            features: vec!["Multiple outrigger configurations".to_string()],
            supports_negative_access: false,
        },
        EquipmentSpec {
            id: "pso-26b".to_string(),
            name: "PSO-26B".to_string(),
            max_working_height_m: 26.0,
            max_platform_height_m: 24.0,
            max_outreach_m: 14.5,
            outreach_capacity_kg: None,
            max_capacity_kg: 250.0,
            crew_size: 2,
            min_access_width_cm: 99.0,
            stowed_width_m: 0.99,
            stowed_length_m: 5.58,
            stowed_height_m: 1.98,
            weight_kg: 3350.0,
            power: PowerSource::DieselAc,
            power_description: "Dual power (diesel + 220V)".to_string(),
            auto_level: true,
            max_work_slope_deg: 11.0,
            max_travel_slope_pct: 28.0,
            basket_rotation: "2x90°".to_string(),
            features: vec!["Highest working height and outreach".to_string()],
            supports_negative_access: false,
        },
        EquipmentSpec {
            id: "pso-26bh".to_string(),
            name: "PSO-26BH".to_string(),
            max_working_height_m: 26.0,
            max_platform_height_m: 24.0,
            max_outreach_m: 14.5,
            outreach_capacity_kg: None,
            max_capacity_kg: 250.0,
            crew_size: 2,
            min_access_width_cm: 99.0,
            stowed_width_m: 0.99,
            stowed_length_m: 5.58,
            stowed_height_m: 1.98,
            weight_kg: 3450.0,
            power: PowerSource::Hybrid,
            power_description: "Hybrid (diesel + lithium batteries)".to_string(),
            auto_level: true,
            max_work_slope_deg: 11.0,
            max_travel_slope_pct: 28.0,
            basket_rotation: "2x90°".to_string(),
            features: vec!["Quieter, cleaner operation than pure diesel".to_string()],
            supports_negative_access: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_models_satisfy_catalog_invariants() {
        let store = CatalogStore::new(standard_models()).expect("standard catalog validates");
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn only_the_compact_model_declares_negative_access() {
        let catalog = standard_catalog();
        let capable: Vec<_> = catalog
            .models()
            .iter()
            .filter(|model| model.supports_negative_access)
            .map(|model| model.id.as_str())
            .collect();
        assert_eq!(capable, vec!["pso-11bl"]);
    }
}
