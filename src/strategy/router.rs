use super::fallback::fallback_strategy;
use super::{Strategy, StrategySelection};
use crate::config::PipelineConfig;
use crate::llm::{ModelProvider, extract_json_object};
use crate::prompt::{ROUTER_ROLE_PROMPT, build_router_prompt};
use crate::squads::{AwarenessStage, CopySquad, CopyTechnique, VisualSquad, VisualTechnique};
use crate::store::{BrandIdentity, KnowledgeStore};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Selects the stylistic contract for a request. One model call, strict
/// per-field validation, and a deterministic fallback: routing never fails.
pub struct StrategyRouter {
    provider: Arc<dyn ModelProvider>,
    store: Arc<dyn KnowledgeStore>,
    config: PipelineConfig,
}

/// Raw decision as the model returned it. Every field is optional; unknown
/// fields (including any model-invented forbidden lists) are ignored.
#[derive(Debug, Deserialize)]
struct RawDecision {
    copy_squad: Option<String>,
    visual_squad: Option<String>,
    primary_copy_technique: Option<String>,
    primary_visual_technique: Option<String>,
    secondary_copy_technique: Option<String>,
    awareness_stage: Option<String>,
    reasoning: Option<String>,
}

impl StrategyRouter {
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        store: Arc<dyn KnowledgeStore>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Route a brief to a strategy. Total: malformed model output, model
    /// errors, and store errors all degrade to the deterministic fallback.
    pub async fn route(
        &self,
        brief: &str,
        organization_id: &str,
        channel: Option<&str>,
        product_id: Option<&str>,
    ) -> Strategy {
        let identity = match self.store.brand_identity(organization_id).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!(organization_id, error = %e, "identity lookup failed; routing without brand defaults");
                None
            }
        };

        let decision_prompt = match build_router_prompt(brief, identity.as_ref(), channel) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(error = %e, "router prompt render failed; using fallback strategy");
                return fallback_strategy(brief, channel, identity.as_ref(), product_id);
            }
        };

        let response = self
            .provider
            .chat_with_system(
                Some(ROUTER_ROLE_PROMPT),
                &decision_prompt,
                &self.config.model,
                self.config.router_temperature,
                self.config.max_output_tokens,
            )
            .await;

        match response {
            Ok(text) => match parse_decision(&text) {
                Some(raw) => {
                    debug!(organization_id, "routing decision parsed");
                    let selection = validate_decision(raw, product_id);
                    Strategy::from_selection(selection, identity.as_ref())
                }
                None => {
                    warn!(
                        organization_id,
                        "routing response was not parseable JSON; using fallback strategy"
                    );
                    fallback_strategy(brief, channel, identity.as_ref(), product_id)
                }
            },
            Err(e) => {
                warn!(organization_id, error = %e, "routing model call failed; using fallback strategy");
                fallback_strategy(brief, channel, identity.as_ref(), product_id)
            }
        }
    }
}

fn parse_decision(text: &str) -> Option<RawDecision> {
    let object = extract_json_object(text)?;
    serde_json::from_str(object).ok()
}

/// Parse a single enum field, replacing anything outside its closed set with
/// the named default.
fn field_or_default<T: FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| T::from_str(v).ok()).unwrap_or(default)
}

/// Validate every field independently; one bad field never discards the
/// rest of an otherwise usable decision.
fn validate_decision(raw: RawDecision, product_id: Option<&str>) -> StrategySelection {
    let copy_squad = field_or_default(raw.copy_squad.as_deref(), CopySquad::DEFAULT);
    let visual_squad = field_or_default(raw.visual_squad.as_deref(), VisualSquad::DEFAULT);
    StrategySelection {
        copy_squad,
        visual_squad,
        primary_copy_technique: raw
            .primary_copy_technique
            .as_deref()
            .and_then(|v| CopyTechnique::from_str(v).ok()),
        primary_visual_technique: raw
            .primary_visual_technique
            .as_deref()
            .and_then(|v| VisualTechnique::from_str(v).ok()),
        secondary_copy_technique: raw
            .secondary_copy_technique
            .as_deref()
            .and_then(|v| CopyTechnique::from_str(v).ok()),
        awareness_stage: field_or_default(raw.awareness_stage.as_deref(), AwarenessStage::DEFAULT),
        reasoning: raw.reasoning.unwrap_or_default(),
        product_id: product_id.map(Into::into),
    }
}
