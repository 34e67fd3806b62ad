use crate::store::{
    BrandEssence, BrandIdentity, IdentitySource, KnowledgeFragment, KnowledgeStore,
    UploadedKnowledge, VisualIdentity,
};
use tracing::{debug, warn};

/// One step of the identity resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityStep {
    /// The dedicated brand-identity record.
    Explicit,
    /// Synthesized from uploaded knowledge fragments.
    Synthesized,
    /// Neutral, clearly-marked default. Always succeeds.
    NeutralDefault,
}

/// Ordered fallback chain; the first step returning a value wins.
pub const IDENTITY_CHAIN: &[IdentityStep] = &[
    IdentityStep::Explicit,
    IdentityStep::Synthesized,
    IdentityStep::NeutralDefault,
];

/// Resolve the brand identity for an organization, walking
/// [`IDENTITY_CHAIN`] in order. Infallible: the chain terminates in the
/// neutral default.
pub async fn resolve_brand_identity(
    store: &dyn KnowledgeStore,
    organization_id: &str,
) -> BrandIdentity {
    for step in IDENTITY_CHAIN {
        if let Some(identity) = try_step(*step, store, organization_id).await {
            debug!(organization_id, step = ?step, "brand identity resolved");
            return identity;
        }
    }
    BrandIdentity::neutral_default()
}

async fn try_step(
    step: IdentityStep,
    store: &dyn KnowledgeStore,
    organization_id: &str,
) -> Option<BrandIdentity> {
    match step {
        IdentityStep::Explicit => store
            .brand_identity(organization_id)
            .await
            .unwrap_or_else(|e| {
                warn!(organization_id, error = %e, "identity lookup failed; trying next source");
                None
            }),
        IdentityStep::Synthesized => {
            let knowledge = store
                .uploaded_knowledge(organization_id)
                .await
                .unwrap_or_else(|e| {
                    warn!(organization_id, error = %e, "knowledge lookup failed; trying next source");
                    None
                })?;
            synthesize_from_knowledge(&knowledge)
        }
        IdentityStep::NeutralDefault => Some(BrandIdentity::neutral_default()),
    }
}

/// Build an identity from uploaded fragments: voice tone becomes essence
/// tone, vocabulary forbidden lists become constraints, identity fragments
/// contribute mission and values. Returns `None` when the fragments carry
/// nothing usable.
fn synthesize_from_knowledge(knowledge: &UploadedKnowledge) -> Option<BrandIdentity> {
    let mut tone = Vec::new();
    let mut values = Vec::new();
    let mut forbidden_words = Vec::new();
    let mut mission = None;

    for fragment in &knowledge.fragments {
        match fragment {
            KnowledgeFragment::Voice { tone: t, .. } => tone.extend(t.iter().cloned()),
            KnowledgeFragment::Vocabulary { forbidden, .. } => {
                forbidden_words.extend(forbidden.iter().cloned());
            }
            KnowledgeFragment::Identity {
                mission: m,
                values: v,
                ..
            } => {
                if mission.is_none() {
                    mission.clone_from(m);
                }
                values.extend(v.iter().cloned());
            }
            KnowledgeFragment::Examples { .. } | KnowledgeFragment::Structure { .. } => {}
        }
    }

    if tone.is_empty() && values.is_empty() && forbidden_words.is_empty() && mission.is_none() {
        return None;
    }

    Some(BrandIdentity {
        visual: VisualIdentity::default(),
        essence: BrandEssence {
            mission,
            tone,
            values,
            copy_squad: None,
            visual_squad: None,
        },
        forbidden_words,
        forbidden_copy_squads: Vec::new(),
        source: IdentitySource::Synthesized,
    })
}
