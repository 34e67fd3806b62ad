use super::types::{
    BrandIdentity, DesignTokens, GenerationRecord, IndustryContext, ProductFacts,
    UploadedKnowledge,
};
use crate::squads::AwarenessStage;
use async_trait::async_trait;

/// Read-mostly contract to the backing knowledge store.
///
/// Every lookup is keyed by organization id (plus a secondary key where
/// noted) and returns `None` for absence — absence is a valid state the
/// assembler degrades around, not an error. The single write path is the
/// fire-and-forget analytics append.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    async fn brand_identity(&self, organization_id: &str) -> anyhow::Result<Option<BrandIdentity>>;

    async fn uploaded_knowledge(
        &self,
        organization_id: &str,
    ) -> anyhow::Result<Option<UploadedKnowledge>>;

    async fn product_facts(
        &self,
        organization_id: &str,
        product_id: &str,
    ) -> anyhow::Result<Option<ProductFacts>>;

    async fn design_tokens(&self, organization_id: &str) -> anyhow::Result<Option<DesignTokens>>;

    /// Full reference document for a technique key. Documents are returned
    /// whole; completeness matters more than size.
    async fn reference_document(&self, key: &str) -> anyhow::Result<Option<String>>;

    async fn stage_template(&self, stage: AwarenessStage) -> anyhow::Result<Option<String>>;

    /// Up to `limit` brand-authored writing snippets, best-match first where
    /// the backend supports similarity ranking, most-recent first otherwise.
    async fn writing_examples(
        &self,
        organization_id: &str,
        query: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<String>>;

    async fn visual_examples(
        &self,
        organization_id: &str,
        query: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<String>>;

    async fn industry(&self, organization_id: &str) -> anyhow::Result<Option<IndustryContext>>;

    /// Append-only analytics write; never read back by this crate.
    async fn record_generation(&self, record: &GenerationRecord) -> anyhow::Result<()>;
}
