use tracing::debug;

use super::domain::{JobRequirement, ScoredCandidate};
use super::evaluation::ConstraintEvaluator;
use crate::workflows::catalog::CatalogStore;

/// Number of candidates surfaced to callers.
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Scores every catalog model and orders them best first.
///
/// Ties keep catalog declaration order. The top candidate is always returned while the
/// catalog is non-empty, even when every model carries warnings.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    evaluator: ConstraintEvaluator,
    limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(ConstraintEvaluator::standard(), RECOMMENDATION_LIMIT)
    }
}

impl Ranker {
    pub fn new(evaluator: ConstraintEvaluator, limit: usize) -> Self {
        Self { evaluator, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Every model, scored and ordered.
    pub fn score_all(
        &self,
        catalog: &CatalogStore,
        requirement: &JobRequirement,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<(usize, ScoredCandidate)> = catalog
            .models()
            .iter()
            .enumerate()
            .map(|(position, model)| {
                let candidate = self
                    .evaluator
                    .evaluate(model, requirement)
                    .into_candidate(model.clone());
                (position, candidate)
            })
            .collect();

        scored.sort_by(|(left_pos, left), (right_pos, right)| {
            right
                .score
                .total_cmp(&left.score)
                .then_with(|| left_pos.cmp(right_pos))
        });

        scored.into_iter().map(|(_, candidate)| candidate).collect()
    }

    pub fn rank(&self, catalog: &CatalogStore, requirement: &JobRequirement) -> Vec<ScoredCandidate> {
        let mut ranked = self.score_all(catalog, requirement);
        ranked.truncate(self.limit);

        if let Some(top) = ranked.first() {
            debug!(
                model = %top.equipment.id,
                score = top.score,
                warnings = top.warnings.len(),
                candidates = ranked.len(),
                "ranked catalog"
            );
        }

        ranked
    }
}

/// Top candidates for `requirement` using the standard rule table.
pub fn rank(catalog: &CatalogStore, requirement: &JobRequirement) -> Vec<ScoredCandidate> {
    Ranker::default().rank(catalog, requirement)
}
