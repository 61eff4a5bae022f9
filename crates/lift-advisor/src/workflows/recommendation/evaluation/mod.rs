mod aggregator;
mod rules;

pub use aggregator::ScoreAggregator;

use rules::{ConstraintRule, STANDARD_RULES};
use serde::{Deserialize, Serialize};

use super::domain::{JobRequirement, ScoredCandidate};
use crate::workflows::catalog::EquipmentSpec;

/// Independent constraint families checked for every model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintCategory {
    WorkingHeight,
    Outreach,
    AccessWidth,
    AccessHeight,
    ElevatorLoad,
    ElevatorCabinWidth,
    ElevatorCabinDepth,
    IndoorSuitability,
    EmissionsRestriction,
    Slope,
    NegativeAccess,
}

impl ConstraintCategory {
    pub fn label(self) -> &'static str {
        match self {
            ConstraintCategory::WorkingHeight => "working height",
            ConstraintCategory::Outreach => "outreach",
            ConstraintCategory::AccessWidth => "access width",
            ConstraintCategory::AccessHeight => "access height",
            ConstraintCategory::ElevatorLoad => "elevator load",
            ConstraintCategory::ElevatorCabinWidth => "elevator cabin width",
            ConstraintCategory::ElevatorCabinDepth => "elevator cabin depth",
            ConstraintCategory::IndoorSuitability => "indoor suitability",
            ConstraintCategory::EmissionsRestriction => "emissions restriction",
            ConstraintCategory::Slope => "slope",
            ConstraintCategory::NegativeAccess => "negative access",
        }
    }
}

/// Human-readable justification attached to a contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Finding {
    Reason(String),
    Warning(String),
}

/// Discrete contribution of one category, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub category: ConstraintCategory,
    pub score: f64,
    pub finding: Option<Finding>,
}

/// Result of evaluating one model against one requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub score: f64,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

impl Evaluation {
    /// Contribution of `category`, or zero when the category did not apply.
    pub fn category_score(&self, category: ConstraintCategory) -> f64 {
        self.components
            .iter()
            .filter(|component| component.category == category)
            .map(|component| component.score)
            .sum()
    }

    pub fn into_candidate(self, equipment: EquipmentSpec) -> ScoredCandidate {
        ScoredCandidate {
            equipment,
            score: self.score,
            reasons: self.reasons,
            warnings: self.warnings,
        }
    }
}

/// Stateless evaluator running the fixed rule table against a model.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator {
    rules: &'static [ConstraintRule],
}

impl Default for ConstraintEvaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConstraintEvaluator {
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES,
        }
    }

    pub fn evaluate(&self, equipment: &EquipmentSpec, requirement: &JobRequirement) -> Evaluation {
        let components = self
            .rules
            .iter()
            .filter_map(|rule| {
                rule.apply(equipment, requirement)
                    .map(|outcome| ScoreComponent {
                        category: rule.category,
                        score: outcome.score,
                        finding: outcome.finding,
                    })
            })
            .collect();

        ScoreAggregator::fold(components)
    }

    /// Categories in evaluation order.
    pub fn categories(&self) -> impl Iterator<Item = ConstraintCategory> + '_ {
        self.rules.iter().map(|rule| rule.category)
    }
}
