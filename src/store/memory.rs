use super::traits::KnowledgeStore;
use super::types::{
    BrandIdentity, DesignTokens, GenerationRecord, IndustryContext, ProductFacts,
    UploadedKnowledge,
};
use crate::squads::AwarenessStage;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory [`KnowledgeStore`] backend.
///
/// Used for embedding the pipeline without a database and as the seeded
/// store in tests. Example retrieval is most-recent-N; there is no
/// similarity ranking here, so the query argument is ignored.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    identities: HashMap<String, BrandIdentity>,
    knowledge: HashMap<String, UploadedKnowledge>,
    products: HashMap<(String, String), ProductFacts>,
    tokens: HashMap<String, DesignTokens>,
    documents: HashMap<String, String>,
    stage_templates: HashMap<AwarenessStage, String>,
    writing: HashMap<String, Vec<String>>,
    visual: HashMap<String, Vec<String>>,
    industries: HashMap<String, IndustryContext>,
    records: Vec<GenerationRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_brand_identity(&self, organization_id: &str, identity: BrandIdentity) {
        self.inner
            .write()
            .await
            .identities
            .insert(organization_id.into(), identity);
    }

    pub async fn set_uploaded_knowledge(&self, organization_id: &str, knowledge: UploadedKnowledge) {
        self.inner
            .write()
            .await
            .knowledge
            .insert(organization_id.into(), knowledge);
    }

    pub async fn insert_product(&self, organization_id: &str, facts: ProductFacts) {
        self.inner
            .write()
            .await
            .products
            .insert((organization_id.into(), facts.id.clone()), facts);
    }

    pub async fn set_design_tokens(&self, organization_id: &str, tokens: DesignTokens) {
        self.inner
            .write()
            .await
            .tokens
            .insert(organization_id.into(), tokens);
    }

    pub async fn insert_reference_document(&self, key: &str, text: impl Into<String>) {
        self.inner
            .write()
            .await
            .documents
            .insert(key.into(), text.into());
    }

    pub async fn set_stage_template(&self, stage: AwarenessStage, text: impl Into<String>) {
        self.inner
            .write()
            .await
            .stage_templates
            .insert(stage, text.into());
    }

    pub async fn add_writing_example(&self, organization_id: &str, snippet: impl Into<String>) {
        self.inner
            .write()
            .await
            .writing
            .entry(organization_id.into())
            .or_default()
            .push(snippet.into());
    }

    pub async fn add_visual_example(&self, organization_id: &str, snippet: impl Into<String>) {
        self.inner
            .write()
            .await
            .visual
            .entry(organization_id.into())
            .or_default()
            .push(snippet.into());
    }

    pub async fn set_industry(&self, organization_id: &str, industry: IndustryContext) {
        self.inner
            .write()
            .await
            .industries
            .insert(organization_id.into(), industry);
    }

    /// Recorded analytics rows, oldest first. Test accessor.
    pub async fn recorded_generations(&self) -> Vec<GenerationRecord> {
        self.inner.read().await.records.clone()
    }
}

fn most_recent(snippets: Option<&Vec<String>>, limit: usize) -> Vec<String> {
    snippets
        .map(|all| all.iter().rev().take(limit).cloned().collect())
        .unwrap_or_default()
}

#[async_trait]
impl KnowledgeStore for MemoryStore {
    async fn brand_identity(&self, organization_id: &str) -> anyhow::Result<Option<BrandIdentity>> {
        Ok(self.inner.read().await.identities.get(organization_id).cloned())
    }

    async fn uploaded_knowledge(
        &self,
        organization_id: &str,
    ) -> anyhow::Result<Option<UploadedKnowledge>> {
        Ok(self.inner.read().await.knowledge.get(organization_id).cloned())
    }

    async fn product_facts(
        &self,
        organization_id: &str,
        product_id: &str,
    ) -> anyhow::Result<Option<ProductFacts>> {
        Ok(self
            .inner
            .read()
            .await
            .products
            .get(&(organization_id.into(), product_id.into()))
            .cloned())
    }

    async fn design_tokens(&self, organization_id: &str) -> anyhow::Result<Option<DesignTokens>> {
        Ok(self.inner.read().await.tokens.get(organization_id).cloned())
    }

    async fn reference_document(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.inner.read().await.documents.get(key).cloned())
    }

    async fn stage_template(&self, stage: AwarenessStage) -> anyhow::Result<Option<String>> {
        Ok(self.inner.read().await.stage_templates.get(&stage).cloned())
    }

    async fn writing_examples(
        &self,
        organization_id: &str,
        _query: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<String>> {
        Ok(most_recent(
            self.inner.read().await.writing.get(organization_id),
            limit,
        ))
    }

    async fn visual_examples(
        &self,
        organization_id: &str,
        _query: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<String>> {
        Ok(most_recent(
            self.inner.read().await.visual.get(organization_id),
            limit,
        ))
    }

    async fn industry(&self, organization_id: &str) -> anyhow::Result<Option<IndustryContext>> {
        Ok(self.inner.read().await.industries.get(organization_id).cloned())
    }

    async fn record_generation(&self, record: &GenerationRecord) -> anyhow::Result<()> {
        self.inner.write().await.records.push(record.clone());
        Ok(())
    }
}
