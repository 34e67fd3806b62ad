use crate::config::PipelineConfig;
use crate::context::assemble_scored;
use crate::editor::EditorialValidator;
use crate::error::SmithError;
use crate::generator::{ContentGenerator, StyleOverlay};
use crate::llm::ModelProvider;
use crate::store::{GenerationRecord, KnowledgeStore};
use crate::strategy::{Strategy, StrategyRouter};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// One content-generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub brief: String,
    pub organization_id: String,
    pub channel: Option<String>,
    pub product_id: Option<String>,
    pub overlay: Option<StyleOverlay>,
    /// Bypass the editorial pass entirely; the draft becomes final.
    pub skip_editor: bool,
    /// Additionally derive an image-generation prompt from the strategy.
    pub include_image_prompt: bool,
}

impl GenerationRequest {
    pub fn new(brief: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            organization_id: organization_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub run_id: String,
    pub model: String,
    pub duration_ms: u64,
    pub readiness_score: u8,
    pub reference_document_count: usize,
    pub writing_example_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub content: String,
    pub strategy: Strategy,
    pub metadata: RunMetadata,
    pub image_prompt: Option<String>,
}

/// Sequences the four pipeline stages: route, assemble, generate, validate.
pub struct ContentPipeline {
    provider: Arc<dyn ModelProvider>,
    store: Arc<dyn KnowledgeStore>,
    config: PipelineConfig,
    router: StrategyRouter,
    generator: ContentGenerator,
    editor: EditorialValidator,
}

impl ContentPipeline {
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        store: Arc<dyn KnowledgeStore>,
        config: PipelineConfig,
    ) -> Self {
        let router = StrategyRouter::new(
            Arc::clone(&provider),
            Arc::clone(&store),
            config.clone(),
        );
        let generator = ContentGenerator::new(Arc::clone(&provider), config.clone());
        let editor = EditorialValidator::new(Arc::clone(&provider), config.clone());
        Self {
            provider,
            store,
            config,
            router,
            generator,
            editor,
        }
    }

    /// Warm up the provider's connection pool before the first run.
    pub async fn warmup(&self) -> anyhow::Result<()> {
        self.provider.warmup().await
    }

    /// Run the full pipeline for one brief.
    ///
    /// The only pre-generation abort is the readiness gate inside assembly;
    /// every other degradation is logged and absorbed. Analytics recording
    /// is detached from the response path and can never fail the request.
    pub async fn run(&self, request: GenerationRequest) -> Result<GenerationOutcome, SmithError> {
        let started = Instant::now();
        let run_id = Uuid::new_v4().to_string();
        info!(run_id, organization_id = %request.organization_id, "pipeline run started");

        let strategy = self
            .router
            .route(
                &request.brief,
                &request.organization_id,
                request.channel.as_deref(),
                request.product_id.as_deref(),
            )
            .await;

        let (context, readiness) = assemble_scored(
            self.store.as_ref(),
            &strategy,
            &request.organization_id,
            &request.brief,
        )
        .await
        .map_err(SmithError::Pipeline)?;

        let draft = self
            .generator
            .generate(&request.brief, &strategy, &context, request.overlay.as_ref())
            .await?;

        let content = if request.skip_editor {
            draft
        } else {
            self.editor.validate(&draft, &strategy, &context).await?
        };

        let image_prompt = request
            .include_image_prompt
            .then(|| build_image_prompt(&request.brief, &strategy));

        let duration_ms =
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let metadata = RunMetadata {
            run_id: run_id.clone(),
            model: self.config.model.clone(),
            duration_ms,
            readiness_score: readiness.score,
            reference_document_count: context.reference_documents.len(),
            writing_example_count: context.writing_examples.len(),
        };

        self.record_run(&request, &strategy, &content, context.summary(), duration_ms, run_id);

        Ok(GenerationOutcome {
            content,
            strategy,
            metadata,
            image_prompt,
        })
    }

    /// Fire-and-forget analytics append with its own error boundary.
    fn record_run(
        &self,
        request: &GenerationRequest,
        strategy: &Strategy,
        content: &str,
        context_summary: String,
        duration_ms: u64,
        run_id: String,
    ) {
        let record = GenerationRecord {
            id: run_id,
            organization_id: request.organization_id.clone(),
            brief: request.brief.clone(),
            strategy: strategy.clone(),
            content: content.to_string(),
            context_summary,
            duration_ms,
            created_at: Utc::now(),
        };
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            if let Err(e) = store.record_generation(&record).await {
                warn!(record_id = %record.id, error = %e, "analytics recording failed");
            }
        });
    }
}

/// Phrases that introduce a product description in a brief.
const PRODUCT_MARKERS: [&str; 4] = ["for ", "about ", "promoting ", "launching "];
const PRODUCT_DESCRIPTION_MAX: usize = 80;

/// Naive pattern extraction of the product description from a brief: the
/// text following the first marker phrase, up to the next sentence break.
fn extract_product_description(brief: &str) -> String {
    let lower = brief.to_ascii_lowercase();
    let after_marker = PRODUCT_MARKERS
        .iter()
        .filter_map(|marker| lower.find(marker).map(|at| at + marker.len()))
        .min()
        .and_then(|start| brief.get(start..));

    let description = after_marker.unwrap_or(brief);
    let end = description
        .find(['.', ',', ';', '\n'])
        .unwrap_or(description.len());
    let mut description = description[..end].trim().to_string();
    if description.is_empty() {
        description = brief.trim().to_string();
    }
    if description.len() > PRODUCT_DESCRIPTION_MAX {
        let cut = description
            .char_indices()
            .map(|(at, _)| at)
            .take_while(|at| *at <= PRODUCT_DESCRIPTION_MAX)
            .last()
            .unwrap_or(0);
        description.truncate(cut);
    }
    description
}

/// Substitute the product description into the visual technique's template
/// and append the strategy's negative hints.
fn build_image_prompt(brief: &str, strategy: &Strategy) -> String {
    let description = extract_product_description(brief);
    let base = strategy
        .primary_visual_technique
        .image_prompt_template()
        .replace("{product}", &description);
    if strategy.forbidden_visual_hints.is_empty() {
        base
    } else {
        let hints: Vec<&str> = strategy
            .forbidden_visual_hints
            .iter()
            .map(String::as_str)
            .collect();
        format!("{base}. Avoid: {}", hints.join(", "))
    }
}
