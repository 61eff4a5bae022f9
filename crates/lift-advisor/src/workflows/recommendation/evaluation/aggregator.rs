use super::{Evaluation, Finding, ScoreComponent};

/// Folds per-category contributions into a single score. No weighting, no normalization.
pub struct ScoreAggregator;

impl ScoreAggregator {
    pub fn total(components: &[ScoreComponent]) -> f64 {
        components.iter().map(|component| component.score).sum()
    }

    /// Reasons and warnings keep the order of `components`.
    pub fn fold(components: Vec<ScoreComponent>) -> Evaluation {
        let score = Self::total(&components);
        let mut reasons = Vec::new();
        let mut warnings = Vec::new();

        for component in &components {
            match &component.finding {
                Some(Finding::Reason(message)) => reasons.push(message.clone()),
                Some(Finding::Warning(message)) => warnings.push(message.clone()),
                None => {}
            }
        }

        Evaluation {
            score,
            reasons,
            warnings,
            components,
        }
    }
}
