use super::{ConstraintCategory, Finding};
use crate::workflows::catalog::EquipmentSpec;
use crate::workflows::recommendation::domain::JobRequirement;

const HEIGHT_PASS: f64 = 40.0;
const HEIGHT_MARGIN_FACTOR: f64 = 3.0;
const HEIGHT_MARGIN_CAP: f64 = 18.0;
const HEIGHT_FAIL: f64 = -200.0;

const OUTREACH_UNSPECIFIED: f64 = 6.0;
const OUTREACH_PASS: f64 = 18.0;
const OUTREACH_MARGIN_FACTOR: f64 = 2.0;
const OUTREACH_MARGIN_CAP: f64 = 10.0;
const OUTREACH_FAIL: f64 = -40.0;

const ACCESS_WIDTH_PASS: f64 = 22.0;
const ACCESS_WIDTH_FAIL: f64 = -120.0;
const ACCESS_HEIGHT_PASS: f64 = 10.0;
const ACCESS_HEIGHT_FAIL: f64 = -90.0;

const ELEVATOR_LOAD_PASS: f64 = 8.0;
const ELEVATOR_LOAD_FAIL: f64 = -140.0;
const CABIN_WIDTH_PASS: f64 = 6.0;
const CABIN_WIDTH_FAIL: f64 = -160.0;
const CABIN_DEPTH_PASS: f64 = 6.0;
const CABIN_DEPTH_FAIL: f64 = -180.0;

const INDOOR_PASS: f64 = 12.0;
const INDOOR_FAIL: f64 = -10.0;
const EMISSIONS_PASS: f64 = 10.0;
const EMISSIONS_FAIL: f64 = -8.0;
const SLOPE_PASS: f64 = 8.0;
const SLOPE_FAIL: f64 = -8.0;
const NEGATIVE_ACCESS_PASS: f64 = 12.0;
const NEGATIVE_ACCESS_FAIL: f64 = -6.0;

/// Contribution of a single rule. `None` from a rule means the category does not apply.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RuleOutcome {
    pub score: f64,
    pub finding: Option<Finding>,
}

type RuleCheck = fn(&EquipmentSpec, &JobRequirement) -> Option<RuleOutcome>;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ConstraintRule {
    pub category: ConstraintCategory,
    check: RuleCheck,
}

impl ConstraintRule {
    pub(crate) fn apply(
        &self,
        equipment: &EquipmentSpec,
        requirement: &JobRequirement,
    ) -> Option<RuleOutcome> {
        (self.check)(equipment, requirement)
    }
}

/// Evaluated in this order; reasons and warnings follow it.
pub(crate) const STANDARD_RULES: &[ConstraintRule] = &[
    ConstraintRule {
        category: ConstraintCategory::WorkingHeight,
        check: working_height,
    },
    ConstraintRule {
        category: ConstraintCategory::Outreach,
        check: outreach,
    },
    ConstraintRule {
        category: ConstraintCategory::AccessWidth,
        check: access_width,
    },
    ConstraintRule {
        category: ConstraintCategory::AccessHeight,
        check: access_height,
    },
    ConstraintRule {
        category: ConstraintCategory::ElevatorLoad,
        check: elevator_load,
    },
    ConstraintRule {
        category: ConstraintCategory::ElevatorCabinWidth,
        check: elevator_cabin_width,
    },
    ConstraintRule {
        category: ConstraintCategory::ElevatorCabinDepth,
        check: elevator_cabin_depth,
    },
    ConstraintRule {
        category: ConstraintCategory::IndoorSuitability,
        check: indoor_suitability,
    },
    ConstraintRule {
        category: ConstraintCategory::EmissionsRestriction,
        check: emissions_restriction,
    },
    ConstraintRule {
        category: ConstraintCategory::Slope,
        check: slope,
    },
    ConstraintRule {
        category: ConstraintCategory::NegativeAccess,
        check: negative_access,
    },
];

fn reason(score: f64, message: String) -> Option<RuleOutcome> {
    Some(RuleOutcome {
        score,
        finding: Some(Finding::Reason(message)),
    })
}

fn warning(score: f64, message: String) -> Option<RuleOutcome> {
    Some(RuleOutcome {
        score,
        finding: Some(Finding::Warning(message)),
    })
}

/// Full bonus minus a linear margin penalty, bounded so the bonus never goes negative.
fn margin_bonus(full: f64, margin: f64, factor: f64, cap: f64) -> f64 {
    full - (margin * factor).clamp(0.0, cap)
}

fn working_height(equipment: &EquipmentSpec, requirement: &JobRequirement) -> Option<RuleOutcome> {
    let max = equipment.max_working_height_m;
    let required = requirement.height_m;

    if required <= max {
        reason(
            margin_bonus(HEIGHT_PASS, max - required, HEIGHT_MARGIN_FACTOR, HEIGHT_MARGIN_CAP),
            format!("Reaches the working height ({max} m ≥ {required} m)."),
        )
    } else {
        warning(
            HEIGHT_FAIL,
            format!("Does not reach the working height ({max} m < {required} m)."),
        )
    }
}

fn outreach(equipment: &EquipmentSpec, requirement: &JobRequirement) -> Option<RuleOutcome> {
    let max = equipment.max_outreach_m;

    match requirement.outreach_m {
        None => Some(RuleOutcome {
            score: OUTREACH_UNSPECIFIED,
            finding: None,
        }),
        Some(required) if required <= max => reason(
            margin_bonus(
                OUTREACH_PASS,
                max - required,
                OUTREACH_MARGIN_FACTOR,
                OUTREACH_MARGIN_CAP,
            ),
            format!("Meets the outreach ({max} m ≥ {required} m)."),
        ),
        Some(required) => warning(
            OUTREACH_FAIL,
            format!("Insufficient outreach ({max} m < {required} m)."),
        ),
    }
}

fn access_width(equipment: &EquipmentSpec, requirement: &JobRequirement) -> Option<RuleOutcome> {
    let min = equipment.min_access_width_cm;
    let available = requirement.access_width_cm;

    if available >= min {
        reason(
            ACCESS_WIDTH_PASS,
            format!("Fits through the access (minimum width {min} cm)."),
        )
    } else {
        warning(
            ACCESS_WIDTH_FAIL,
            format!(
                "Does not fit through the access (minimum width {min} cm; available {available} cm)."
            ),
        )
    }
}

fn access_height(equipment: &EquipmentSpec, requirement: &JobRequirement) -> Option<RuleOutcome> {
    let available = requirement.access_height_cm?;
    let needed = equipment.stowed_height_cm();
    if needed <= 0.0 {
        return None;
    }

    if available >= needed {
        reason(
            ACCESS_HEIGHT_PASS,
            format!("Access height OK (minimum {needed} cm)."),
        )
    } else {
        warning(
            ACCESS_HEIGHT_FAIL,
            format!("Insufficient access height (minimum {needed} cm; available {available} cm)."),
        )
    }
}

fn elevator_load(equipment: &EquipmentSpec, requirement: &JobRequirement) -> Option<RuleOutcome> {
    let max_load = requirement.elevator()?.max_load_kg?;
    let machine = equipment.weight_kg;

    if max_load >= machine {
        reason(
            ELEVATOR_LOAD_PASS,
            format!("Elevator supports the weight (machine {machine} kg ≤ max {max_load} kg)."),
        )
    } else {
        warning(
            ELEVATOR_LOAD_FAIL,
            format!("Elevator cannot carry the weight (machine {machine} kg > max {max_load} kg)."),
        )
    }
}

/// Cab width and depth, only when both were given.
fn cabin(requirement: &JobRequirement) -> Option<(f64, f64)> {
    let elevator = requirement.elevator()?;
    Some((elevator.cab_width_cm?, elevator.cab_depth_cm?))
}

fn elevator_cabin_width(
    equipment: &EquipmentSpec,
    requirement: &JobRequirement,
) -> Option<RuleOutcome> {
    let (cab_width, _) = cabin(requirement)?;
    let needed = equipment.stowed_width_cm();

    if cab_width < needed {
        warning(
            CABIN_WIDTH_FAIL,
            format!("Elevator cab too narrow (minimum {needed} cm; available {cab_width} cm)."),
        )
    } else {
        reason(
            CABIN_WIDTH_PASS,
            format!("Elevator cab width OK (minimum {needed} cm)."),
        )
    }
}

fn elevator_cabin_depth(
    equipment: &EquipmentSpec,
    requirement: &JobRequirement,
) -> Option<RuleOutcome> {
    let (_, cab_depth) = cabin(requirement)?;
    let needed = equipment.stowed_length_cm();

    if cab_depth < needed {
        warning(
            CABIN_DEPTH_FAIL,
            format!("Elevator cab too shallow (minimum {needed} cm; available {cab_depth} cm)."),
        )
    } else {
        reason(
            CABIN_DEPTH_PASS,
            format!("Elevator cab depth OK (minimum {needed} cm)."),
        )
    }
}

fn indoor_suitability(
    equipment: &EquipmentSpec,
    requirement: &JobRequirement,
) -> Option<RuleOutcome> {
    if !requirement.indoor {
        return None;
    }

    if equipment.power.is_low_emission() {
        reason(
            INDOOR_PASS,
            "Suitable for indoor work (electric/hybrid).".to_string(),
        )
    } else {
        warning(
            INDOOR_FAIL,
            "Indoor work: electric or hybrid preferred (ventilation).".to_string(),
        )
    }
}

fn emissions_restriction(
    equipment: &EquipmentSpec,
    requirement: &JobRequirement,
) -> Option<RuleOutcome> {
    if !requirement.emissions_restricted {
        return None;
    }

    if equipment.power.is_low_emission() {
        reason(
            EMISSIONS_PASS,
            "Better fit for emission/noise restrictions.".to_string(),
        )
    } else {
        warning(
            EMISSIONS_FAIL,
            "Emission/noise restriction: this machine may not be ideal.".to_string(),
        )
    }
}

fn slope(equipment: &EquipmentSpec, requirement: &JobRequirement) -> Option<RuleOutcome> {
    let slope = requirement.slope_deg?;
    let max = equipment.max_work_slope_deg;

    if slope <= max {
        reason(SLOPE_PASS, format!("Slope within limit (≤ {max}°)."))
    } else {
        warning(
            SLOPE_FAIL,
            format!("Slope exceeds {max}°: levelling or pads required."),
        )
    }
}

fn negative_access(equipment: &EquipmentSpec, requirement: &JobRequirement) -> Option<RuleOutcome> {
    if !requirement.needs_negative_access {
        return None;
    }

    if equipment.supports_negative_access {
        reason(
            NEGATIVE_ACCESS_PASS,
            format!("Offers negative access ({}).", equipment.name),
        )
    } else {
        warning(
            NEGATIVE_ACCESS_FAIL,
            "Negative access: a model with negative access is better suited.".to_string(),
        )
    }
}
