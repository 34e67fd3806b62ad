use crate::harness::{DegradedStore, ORG, ready_store};
use brandsmith::context::{
    IDENTITY_CHAIN, IdentityStep, VISUAL_EXAMPLE_LIMIT, WRITING_EXAMPLE_LIMIT, assemble,
};
use brandsmith::error::PipelineError;
use brandsmith::squads::AwarenessStage;
use brandsmith::store::{DesignTokens, IdentitySource, MemoryStore, ProductFacts};
use brandsmith::strategy::fallback_strategy;

#[tokio::test]
async fn gate_failure_is_the_only_abort() {
    let store = MemoryStore::new();
    let strategy = fallback_strategy("brief", None, None, None);
    let err = assemble(&store, &strategy, ORG, "brief").await.unwrap_err();
    assert!(matches!(err, PipelineError::BrandNotReady { .. }));
}

/// Scenario D: a strategy whose stage has no stored template still
/// assembles, using the built-in default text for that stage.
#[tokio::test]
async fn missing_stage_template_uses_builtin_default() {
    let store = ready_store().await;
    let strategy = fallback_strategy("brief", None, None, None);
    let package = assemble(&store, &strategy, ORG, "brief").await.unwrap();
    assert_eq!(
        package.stage_template,
        AwarenessStage::SolutionAware.default_template()
    );
}

#[tokio::test]
async fn stored_stage_template_wins_over_builtin() {
    let store = ready_store().await;
    store
        .set_stage_template(AwarenessStage::SolutionAware, "house template")
        .await;
    let strategy = fallback_strategy("brief", None, None, None);
    let package = assemble(&store, &strategy, ORG, "brief").await.unwrap();
    assert_eq!(package.stage_template, "house template");
}

#[tokio::test]
async fn every_failing_fetch_degrades_to_its_default() {
    // Gate lookups succeed; every other fetch errors.
    let store = DegradedStore {
        inner: ready_store().await,
    };
    let strategy = fallback_strategy("a data benchmark brief", None, None, Some("p1"));
    let package = assemble(&store, &strategy, ORG, "brief").await.unwrap();

    assert_eq!(
        package.reference_documents,
        vec![strategy.primary_copy_technique.builtin_playbook().to_string()]
    );
    assert_eq!(
        package.stage_template,
        strategy.awareness_stage.default_template()
    );
    assert!(package.product_facts.is_none());
    assert_eq!(package.design_tokens, DesignTokens::neutral());
    assert!(package.writing_examples.is_empty());
    assert!(package.visual_examples.is_empty());
    // Identity still resolves through the chain: the gate store has an
    // explicit record.
    assert_eq!(package.brand_identity.source, IdentitySource::Explicit);
}

#[tokio::test]
async fn product_facts_are_fetched_when_product_id_present() {
    let store = ready_store().await;
    store
        .insert_product(
            ORG,
            ProductFacts {
                id: "p1".into(),
                name: "Pour-over kit".into(),
                price: Some("$39".into()),
                benefits: vec!["repeatable brews".into()],
                claims: vec![],
            },
        )
        .await;
    let strategy = fallback_strategy("brief", None, None, Some("p1"));
    let package = assemble(&store, &strategy, ORG, "brief").await.unwrap();
    assert_eq!(
        package.product_facts.as_ref().map(|f| f.name.as_str()),
        Some("Pour-over kit")
    );
}

#[tokio::test]
async fn example_sets_respect_their_bounds() {
    let store = ready_store().await;
    for i in 0..20 {
        store.add_writing_example(ORG, format!("w{i}")).await;
        store.add_visual_example(ORG, format!("v{i}")).await;
    }
    let strategy = fallback_strategy("brief", None, None, None);
    let package = assemble(&store, &strategy, ORG, "brief").await.unwrap();
    assert_eq!(package.writing_examples.len(), WRITING_EXAMPLE_LIMIT);
    assert_eq!(package.visual_examples.len(), VISUAL_EXAMPLE_LIMIT);
}

#[tokio::test]
async fn industry_and_knowledge_are_carried_into_the_package() {
    let store = ready_store().await;
    let strategy = fallback_strategy("brief", None, None, None);
    let package = assemble(&store, &strategy, ORG, "brief").await.unwrap();
    assert_eq!(
        package.industry.as_ref().map(|i| i.id.as_str()),
        Some("specialty_coffee")
    );
    assert!(package.uploaded_knowledge.is_some());
}

#[test]
fn identity_chain_order_is_fixed() {
    assert_eq!(
        IDENTITY_CHAIN,
        &[
            IdentityStep::Explicit,
            IdentityStep::Synthesized,
            IdentityStep::NeutralDefault,
        ]
    );
}
