mod alternatives;
mod checklists;

pub use alternatives::suggest_alternatives;
pub use checklists::{stage_checklist, technique_checklist};

use crate::config::{PipelineConfig, ReviewMode};
use crate::context::ContextPackage;
use crate::error::SmithError;
use crate::llm::ModelProvider;
use crate::prompt::{APPROVAL_MARKER, REVIEWER_ROLE_PROMPT, build_review_prompt};
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of the local forbidden-language scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<String>,
}

/// Case-insensitive substring scan of `draft` against every forbidden term.
/// Pure and zero-cost: no model call, no rewriting. An empty forbidden list
/// always validates.
pub fn quick_validate(draft: &str, forbidden: &[String]) -> ValidationReport {
    let draft_lower = draft.to_lowercase();
    let violations: Vec<String> = forbidden
        .iter()
        .filter(|term| !term.is_empty() && draft_lower.contains(&term.to_lowercase()))
        .cloned()
        .collect();
    ValidationReport {
        is_valid: violations.is_empty(),
        violations,
    }
}

/// Strip the approval marker and any enclosing code-fence wrapper from a
/// reviewer response.
fn strip_review_wrapper(text: &str) -> String {
    let mut cleaned = text.trim();
    if let Some(rest) = cleaned.strip_prefix(APPROVAL_MARKER) {
        cleaned = rest.trim_start();
    }
    if cleaned.starts_with("```") {
        // Drop the opening fence line (possibly tagged, e.g. ```markdown)
        // and the closing fence.
        let without_open = cleaned
            .split_once('\n')
            .map_or("", |(_, rest)| rest);
        cleaned = without_open
            .trim_end()
            .strip_suffix("```")
            .unwrap_or(without_open)
            .trim();
    }
    cleaned.trim().to_string()
}

/// Two-phase editorial pass: local scan, then a model review that either
/// approves the draft or rewrites the offending passages.
pub struct EditorialValidator {
    provider: Arc<dyn ModelProvider>,
    config: PipelineConfig,
}

impl EditorialValidator {
    pub fn new(provider: Arc<dyn ModelProvider>, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    pub async fn validate(
        &self,
        draft: &str,
        strategy: &Strategy,
        context: &ContextPackage,
    ) -> Result<String, SmithError> {
        let forbidden: Vec<String> = strategy.forbidden_language.iter().cloned().collect();
        let report = quick_validate(draft, &forbidden);
        if report.is_valid {
            debug!(context = %context.summary(), "local scan clean");
        } else {
            info!(violations = ?report.violations, "local scan found forbidden terms");
        }

        if self.config.review_mode == ReviewMode::OnViolation && report.is_valid {
            return Ok(draft.trim().to_string());
        }

        let review_prompt = build_review_prompt(
            draft,
            &report.violations,
            strategy,
            technique_checklist(strategy.primary_copy_technique),
            stage_checklist(strategy.awareness_stage),
        )?;

        match self
            .provider
            .chat_with_system(
                Some(REVIEWER_ROLE_PROMPT),
                &review_prompt,
                &self.config.model,
                self.config.temperature,
                self.config.max_output_tokens,
            )
            .await
        {
            Ok(response) => Ok(strip_review_wrapper(&response)),
            Err(e) => {
                warn!(error = %e, "review model call failed; returning locally-scanned draft");
                Ok(draft.trim().to_string())
            }
        }
    }
}
