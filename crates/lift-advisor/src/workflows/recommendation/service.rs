use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{JobRequirement, ScoredCandidate};
use super::lead::{
    whatsapp_url, ContactDetails, LeadError, QuoteLead, SALES_WHATSAPP_NUMBER,
};
use super::normalizer::RawJobRequirement;
use super::ranker::Ranker;
use crate::workflows::catalog::{CatalogStore, EquipmentSpec};

/// Ranked answer for one requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub requirement: JobRequirement,
    pub candidates: Vec<ScoredCandidate>,
}

impl Recommendation {
    pub fn top(&self) -> Option<&ScoredCandidate> {
        self.candidates.first()
    }
}

/// Contact details plus the raw requirement they want quoted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeadRequest {
    pub contact: ContactDetails,
    pub requirement: RawJobRequirement,
}

/// Lead payload together with the message text shown to the customer and a chat link
/// to the sales line carrying that text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadResponse {
    pub lead: QuoteLead,
    pub message: String,
    pub whatsapp_url: String,
}

/// Facade composing the read-only catalog and the ranker.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: CatalogStore,
    ranker: Ranker,
}

impl RecommendationService {
    pub fn new(catalog: CatalogStore) -> Self {
        Self::with_ranker(catalog, Ranker::default())
    }

    pub fn with_ranker(catalog: CatalogStore, ranker: Ranker) -> Self {
        Self { catalog, ranker }
    }

    pub fn catalog(&self) -> &[EquipmentSpec] {
        self.catalog.models()
    }

    pub fn recommend(&self, raw: &RawJobRequirement) -> Recommendation {
        let requirement = raw.normalize();
        let candidates = self.rank(&requirement);
        Recommendation {
            requirement,
            candidates,
        }
    }

    pub fn rank(&self, requirement: &JobRequirement) -> Vec<ScoredCandidate> {
        self.ranker.rank(&self.catalog, requirement)
    }

    pub fn lead(&self, request: &LeadRequest) -> Result<LeadResponse, LeadError> {
        let recommendation = self.recommend(&request.requirement);
        let lead = QuoteLead::build(
            &request.contact,
            &recommendation.requirement,
            recommendation.top(),
            Utc::now(),
        )?;

        info!(
            model = %lead.recommendation.model,
            score = lead.recommendation.score,
            "quote lead prepared"
        );

        let message = lead.message();
        let whatsapp_url = whatsapp_url(SALES_WHATSAPP_NUMBER, &message);
        Ok(LeadResponse {
            lead,
            message,
            whatsapp_url,
        })
    }
}
