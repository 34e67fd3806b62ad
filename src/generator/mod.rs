use crate::config::PipelineConfig;
use crate::context::ContextPackage;
use crate::error::{LlmError, SmithError};
use crate::llm::ModelProvider;
use crate::prompt::{build_copywriter_system_prompt, build_copywriter_user_prompt};
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Per-request stylistic adjustments, passed explicitly into prompt
/// construction. No process-wide state influences which prompt is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleOverlay {
    pub tone: Option<String>,
    pub emphasis: Option<String>,
}

/// Produces the first draft: one prompt pair, one model call, no retries.
/// Retries, if any, are the editor's responsibility.
pub struct ContentGenerator {
    provider: Arc<dyn ModelProvider>,
    config: PipelineConfig,
}

impl ContentGenerator {
    pub fn new(provider: Arc<dyn ModelProvider>, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    pub async fn generate(
        &self,
        brief: &str,
        strategy: &Strategy,
        context: &ContextPackage,
        overlay: Option<&StyleOverlay>,
    ) -> Result<String, SmithError> {
        let system = build_copywriter_system_prompt(strategy, overlay)?;
        let user = build_copywriter_user_prompt(brief, strategy, context)?;
        debug!(
            system_len = system.len(),
            user_len = user.len(),
            "generation prompt built"
        );

        let draft = self
            .provider
            .chat_with_system(
                Some(&system),
                &user,
                &self.config.model,
                self.config.temperature,
                self.config.max_output_tokens,
            )
            .await
            .map_err(|e| {
                SmithError::Llm(LlmError::Request {
                    provider: self.provider.name().into(),
                    message: e.to_string(),
                })
            })?;

        Ok(draft.trim().to_string())
    }
}
