//! Constraint-based recommendation of spider lifts for a customer's job.
//!
//! A raw requirement is normalized, every catalog model is evaluated against a fixed
//! table of constraint rules, contributions are summed, and the best three models are
//! returned with their reasons and warnings. Non-compliant models are penalised rather
//! than removed so callers can still show the best available option.

pub mod domain;
pub mod evaluation;
pub mod lead;
pub mod normalizer;
pub mod ranker;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    degrees_from_percent, percent_from_degrees, AccessCategory, ElevatorAccess, JobRequirement,
    JobType, ScoredCandidate, Terrain,
};
pub use evaluation::{
    ConstraintCategory, ConstraintEvaluator, Evaluation, Finding, ScoreAggregator,
    ScoreComponent,
};
pub use lead::{
    format_tax_id, is_valid_email, normalize_phone, whatsapp_url, ContactDetails, LeadError,
    QuoteLead, DISCLAIMER, SALES_WHATSAPP_NUMBER,
};
pub use normalizer::{normalize, RawJobRequirement, SlopeUnit};
pub use ranker::{rank, Ranker, RECOMMENDATION_LIMIT};
pub use router::recommendation_router;
pub use service::{LeadRequest, LeadResponse, Recommendation, RecommendationService};
