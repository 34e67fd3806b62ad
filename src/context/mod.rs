mod identity;

pub use identity::{IDENTITY_CHAIN, IdentityStep, resolve_brand_identity};

use crate::error::PipelineError;
use crate::readiness::{ReadinessResult, check_readiness};
use crate::squads::AwarenessStage;
use crate::store::{
    BrandIdentity, DesignTokens, IndustryContext, KnowledgeStore, ProductFacts, UploadedKnowledge,
};
use crate::strategy::Strategy;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Bounds on the example sets used as style anchors.
pub const WRITING_EXAMPLE_LIMIT: usize = 5;
pub const VISUAL_EXAMPLE_LIMIT: usize = 3;

/// Everything the generator needs for one request. Built once, read-only
/// after assembly, owned by a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextPackage {
    /// Full reference documents, never chunked or truncated.
    pub reference_documents: Vec<String>,
    pub stage_template: String,
    pub product_facts: Option<ProductFacts>,
    pub brand_identity: BrandIdentity,
    pub design_tokens: DesignTokens,
    pub writing_examples: Vec<String>,
    pub visual_examples: Vec<String>,
    pub industry: Option<IndustryContext>,
    pub uploaded_knowledge: Option<UploadedKnowledge>,
}

impl ContextPackage {
    /// Short shape summary for the analytics record.
    pub fn summary(&self) -> String {
        format!(
            "refs={} examples={}w/{}v product={} identity={} industry={}",
            self.reference_documents.len(),
            self.writing_examples.len(),
            self.visual_examples.len(),
            self.product_facts.is_some(),
            self.brand_identity.source,
            self.industry
                .as_ref()
                .map_or("none", |industry| industry.id.as_str()),
        )
    }
}

/// Assemble the context package for one request.
///
/// The readiness gate runs first and is the only hard-abort condition;
/// every knowledge-source fetch afterwards runs concurrently and degrades
/// independently to its documented default.
pub async fn assemble(
    store: &dyn KnowledgeStore,
    strategy: &Strategy,
    organization_id: &str,
    brief: &str,
) -> Result<ContextPackage, PipelineError> {
    let (package, _) = assemble_scored(store, strategy, organization_id, brief).await?;
    Ok(package)
}

/// As [`assemble`], also returning the readiness result so the orchestrator
/// can report the score without re-running the gate.
pub(crate) async fn assemble_scored(
    store: &dyn KnowledgeStore,
    strategy: &Strategy,
    organization_id: &str,
    brief: &str,
) -> Result<(ContextPackage, ReadinessResult), PipelineError> {
    let readiness = check_readiness(store, organization_id).await;
    if !readiness.is_ready {
        return Err(PipelineError::BrandNotReady {
            score: readiness.score,
            missing_elements: readiness.missing_elements,
            recommendations: readiness.recommendations,
        });
    }

    let (
        reference_documents,
        stage_template,
        product_facts,
        brand_identity,
        design_tokens,
        writing_examples,
        visual_examples,
        industry,
        uploaded_knowledge,
    ) = tokio::join!(
        fetch_reference_documents(store, strategy),
        fetch_stage_template(store, strategy.awareness_stage),
        fetch_product_facts(store, organization_id, strategy.product_id.as_deref()),
        resolve_brand_identity(store, organization_id),
        fetch_design_tokens(store, organization_id),
        fetch_examples(store, organization_id, brief, ExampleKind::Writing),
        fetch_examples(store, organization_id, brief, ExampleKind::Visual),
        fetch_industry(store, organization_id),
        fetch_uploaded_knowledge(store, organization_id),
    );

    let package = ContextPackage {
        reference_documents,
        stage_template,
        product_facts,
        brand_identity,
        design_tokens,
        writing_examples,
        visual_examples,
        industry,
        uploaded_knowledge,
    };
    Ok((package, readiness))
}

async fn fetch_reference_documents(store: &dyn KnowledgeStore, strategy: &Strategy) -> Vec<String> {
    let keys = strategy.reference_keys();
    let results = join_all(keys.iter().map(|key| store.reference_document(key))).await;

    let mut documents = Vec::with_capacity(keys.len());
    for (key, result) in keys.iter().zip(results) {
        match result {
            Ok(Some(document)) if !document.is_empty() => documents.push(document),
            Ok(_) => warn!(key, "reference document missing"),
            Err(e) => warn!(key, error = %e, "reference document fetch failed"),
        }
    }
    if documents.is_empty() {
        warn!(
            technique = %strategy.primary_copy_technique,
            "no reference documents available; falling back to built-in playbook"
        );
        documents.push(strategy.primary_copy_technique.builtin_playbook().to_string());
    }
    documents
}

async fn fetch_stage_template(store: &dyn KnowledgeStore, stage: AwarenessStage) -> String {
    match store.stage_template(stage).await {
        Ok(Some(template)) if !template.is_empty() => template,
        Ok(_) => {
            warn!(%stage, "stage template missing; using built-in default");
            stage.default_template().to_string()
        }
        Err(e) => {
            warn!(%stage, error = %e, "stage template fetch failed; using built-in default");
            stage.default_template().to_string()
        }
    }
}

async fn fetch_product_facts(
    store: &dyn KnowledgeStore,
    organization_id: &str,
    product_id: Option<&str>,
) -> Option<ProductFacts> {
    let product_id = product_id?;
    match store.product_facts(organization_id, product_id).await {
        Ok(facts) => facts,
        Err(e) => {
            warn!(organization_id, product_id, error = %e, "product facts fetch failed");
            None
        }
    }
}

async fn fetch_design_tokens(store: &dyn KnowledgeStore, organization_id: &str) -> DesignTokens {
    match store.design_tokens(organization_id).await {
        Ok(Some(tokens)) => tokens,
        Ok(None) => DesignTokens::neutral(),
        Err(e) => {
            warn!(organization_id, error = %e, "design tokens fetch failed; using neutral defaults");
            DesignTokens::neutral()
        }
    }
}

#[derive(Clone, Copy)]
enum ExampleKind {
    Writing,
    Visual,
}

async fn fetch_examples(
    store: &dyn KnowledgeStore,
    organization_id: &str,
    brief: &str,
    kind: ExampleKind,
) -> Vec<String> {
    let result = match kind {
        ExampleKind::Writing => {
            store
                .writing_examples(organization_id, brief, WRITING_EXAMPLE_LIMIT)
                .await
        }
        ExampleKind::Visual => {
            store
                .visual_examples(organization_id, brief, VISUAL_EXAMPLE_LIMIT)
                .await
        }
    };
    match result {
        Ok(mut examples) => {
            let limit = match kind {
                ExampleKind::Writing => WRITING_EXAMPLE_LIMIT,
                ExampleKind::Visual => VISUAL_EXAMPLE_LIMIT,
            };
            examples.truncate(limit);
            examples
        }
        Err(e) => {
            warn!(organization_id, error = %e, "example retrieval failed; continuing without");
            Vec::new()
        }
    }
}

async fn fetch_industry(
    store: &dyn KnowledgeStore,
    organization_id: &str,
) -> Option<IndustryContext> {
    match store.industry(organization_id).await {
        Ok(industry) => industry,
        Err(e) => {
            warn!(organization_id, error = %e, "industry fetch failed");
            None
        }
    }
}

async fn fetch_uploaded_knowledge(
    store: &dyn KnowledgeStore,
    organization_id: &str,
) -> Option<UploadedKnowledge> {
    match store.uploaded_knowledge(organization_id).await {
        Ok(knowledge) => knowledge,
        Err(e) => {
            warn!(organization_id, error = %e, "uploaded knowledge fetch failed");
            None
        }
    }
}
