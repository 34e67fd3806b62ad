use crate::store::{KnowledgeCategory, KnowledgeStore};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minimum readiness score required before generation is permitted.
pub const READY_THRESHOLD: u8 = 50;

// Additive score contributions. Capped at 100 after summing.
const INDUSTRY_SPECIFIC: u32 = 30;
const INDUSTRY_PLACEHOLDER: u32 = 15;
const KNOWLEDGE_FULL_TRIO: u32 = 40;
const KNOWLEDGE_VOICE_OR_VOCABULARY: u32 = 25;
const KNOWLEDGE_BASE: u32 = 10;
const IDENTITY_EXPLICIT: u32 = 30;
const IDENTITY_DNA_SCAN: u32 = 20;

/// Outcome of the readiness gate. Computed fresh on every assembly and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResult {
    pub is_ready: bool,
    pub score: u8,
    pub missing_elements: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Score how much brand knowledge exists for `organization_id`.
///
/// Side-effect free and cheap: three keyed lookups, no writes. A store read
/// that fails is scored the same as an absent record.
pub async fn check_readiness(
    store: &dyn KnowledgeStore,
    organization_id: &str,
) -> ReadinessResult {
    let mut score: u32 = 0;
    let mut missing_elements = Vec::new();
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    let industry = store.industry(organization_id).await.unwrap_or_else(|e| {
        warn!(organization_id, error = %e, "industry lookup failed; scoring as absent");
        None
    });
    match industry {
        Some(industry) if industry.is_specific() => score += INDUSTRY_SPECIFIC,
        Some(industry) => {
            score += INDUSTRY_PLACEHOLDER;
            warnings.push(format!(
                "Industry is set to the generic placeholder \"{}\"; a specific industry \
                 sharpens positioning and vocabulary.",
                industry.id
            ));
        }
        None => {
            missing_elements.push("industry selection".into());
            recommendations
                .push("Select your industry so content can use the right market context.".into());
        }
    }

    let knowledge = store
        .uploaded_knowledge(organization_id)
        .await
        .unwrap_or_else(|e| {
            warn!(organization_id, error = %e, "knowledge lookup failed; scoring as absent");
            None
        });
    match knowledge.as_ref() {
        Some(knowledge)
            if knowledge.has_category(KnowledgeCategory::Voice)
                && knowledge.has_category(KnowledgeCategory::Vocabulary)
                && knowledge.has_category(KnowledgeCategory::Identity) =>
        {
            score += KNOWLEDGE_FULL_TRIO;
        }
        Some(knowledge)
            if knowledge.has_category(KnowledgeCategory::Voice)
                || knowledge.has_category(KnowledgeCategory::Vocabulary) =>
        {
            score += KNOWLEDGE_VOICE_OR_VOCABULARY;
        }
        Some(_) => score += KNOWLEDGE_BASE,
        None => {
            missing_elements.push("uploaded brand knowledge".into());
            recommendations.push(
                "Upload brand knowledge (voice, vocabulary, identity) so generated copy \
                 sounds like you."
                    .into(),
            );
        }
    }

    let identity = store
        .brand_identity(organization_id)
        .await
        .unwrap_or_else(|e| {
            warn!(organization_id, error = %e, "identity lookup failed; scoring as absent");
            None
        });
    if identity.is_some() {
        score += IDENTITY_EXPLICIT;
    } else if knowledge.as_ref().is_some_and(|k| k.dna_scan().is_some()) {
        score += IDENTITY_DNA_SCAN;
    } else {
        missing_elements.push("brand identity record".into());
        recommendations.push(
            "Define your brand identity (mission, tone, styles) or run a brand DNA scan.".into(),
        );
    }

    let score = u8::try_from(score.min(100)).unwrap_or(100);
    ReadinessResult {
        is_ready: score >= READY_THRESHOLD,
        score,
        missing_elements,
        warnings,
        recommendations,
    }
}
