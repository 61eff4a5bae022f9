use axum::response::Response;
use serde_json::Value;

use crate::workflows::catalog::{standard_catalog, CatalogStore, EquipmentSpec};
use crate::workflows::recommendation::domain::{AccessCategory, ElevatorAccess, JobRequirement};
use crate::workflows::recommendation::evaluation::{
    ConstraintCategory, ConstraintEvaluator, Evaluation, ScoreComponent,
};
use crate::workflows::recommendation::lead::ContactDetails;

pub(super) fn catalog() -> CatalogStore {
    standard_catalog()
}

pub(super) fn model(id: &str) -> EquipmentSpec {
    catalog().get(id).cloned().expect("model present in standard catalog")
}

pub(super) fn evaluator() -> ConstraintEvaluator {
    ConstraintEvaluator::standard()
}

pub(super) fn door_requirement(height_m: f64, access_width_cm: f64) -> JobRequirement {
    JobRequirement {
        height_m,
        access: AccessCategory::Door,
        access_width_cm,
        ..JobRequirement::default()
    }
}

pub(super) fn elevator_requirement(
    max_load_kg: f64,
    cab_width_cm: f64,
    cab_depth_cm: f64,
) -> JobRequirement {
    JobRequirement {
        height_m: 8.0,
        access: AccessCategory::Elevator,
        access_width_cm: 120.0,
        elevator: ElevatorAccess {
            max_load_kg: Some(max_load_kg),
            cab_width_cm: Some(cab_width_cm),
            cab_depth_cm: Some(cab_depth_cm),
        },
        ..JobRequirement::default()
    }
}

pub(super) fn component(
    evaluation: &Evaluation,
    category: ConstraintCategory,
) -> Option<&ScoreComponent> {
    evaluation
        .components
        .iter()
        .find(|component| component.category == category)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Standard catalog with one entry replaced.
pub(super) fn catalog_with(replacement: EquipmentSpec) -> CatalogStore {
    let models = catalog()
        .models()
        .iter()
        .map(|model| {
            if model.id == replacement.id {
                replacement.clone()
            } else {
                model.clone()
            }
        })
        .collect();
    CatalogStore::new(models).expect("modified catalog validates")
}

pub(super) fn contact() -> ContactDetails {
    ContactDetails {
        company_name: "Constructora Andes".to_string(),
        company_tax_id: "76.543.210-K".to_string(),
        contact_name: "Camila Rojas".to_string(),
        phone: "9 8765 4321".to_string(),
        email: "camila@andes.cl".to_string(),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
