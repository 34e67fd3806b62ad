use crate::harness::{MockProvider, ORG, ready_store, router_json};
use brandsmith::error::{PipelineError, SmithError};
use brandsmith::readiness::{READY_THRESHOLD, check_readiness};
use brandsmith::store::{
    IndustryContext, KnowledgeFragment, MemoryStore, UploadedKnowledge,
};
use brandsmith::{ContentPipeline, GenerationRequest, PipelineConfig};
use std::sync::Arc;

/// Scenario A: readiness score 0 aborts the pipeline before any content
/// generation call reaches the model.
#[tokio::test]
async fn unready_brand_blocks_before_generation() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("scientists", "minimalists", "unaware")),
        Ok("this draft must never be requested".into()),
    ]));
    let store = Arc::new(MemoryStore::new());
    let pipeline = ContentPipeline::new(
        Arc::clone(&provider) as _,
        Arc::clone(&store) as _,
        PipelineConfig::default(),
    );

    let result = pipeline
        .run(GenerationRequest::new("Launch post", ORG))
        .await;

    match result {
        Err(SmithError::Pipeline(PipelineError::BrandNotReady {
            score,
            missing_elements,
            recommendations,
        })) => {
            assert_eq!(score, 0);
            assert_eq!(missing_elements.len(), 3);
            assert!(!recommendations.is_empty());
        }
        other => panic!("expected BrandNotReady, got {other:?}"),
    }

    // Only the routing call happened; the generation prompt never reached
    // the model.
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn blocking_error_message_is_human_readable() {
    let store = MemoryStore::new();
    let readiness = check_readiness(&store, ORG).await;
    let err = PipelineError::BrandNotReady {
        score: readiness.score,
        missing_elements: readiness.missing_elements,
        recommendations: readiness.recommendations,
    };
    let message = err.to_string();
    assert!(message.contains("industry selection"));
    assert!(message.contains("uploaded brand knowledge"));
    assert!(message.contains("brand identity record"));
    assert!(message.contains("Complete your brand setup"));
}

/// Scenario B: the 50-point boundary. The additive table cannot produce 49
/// or 50 exactly, so the threshold predicate is verified at the boundary
/// values and the gate at the nearest reachable scores on either side.
#[tokio::test]
async fn readiness_boundary_at_fifty() {
    assert!(50 >= READY_THRESHOLD);
    assert!(49 < READY_THRESHOLD);

    // 40 = specific industry (30) + identity-only knowledge (10): not ready.
    let store = MemoryStore::new();
    store
        .set_industry(
            ORG,
            IndustryContext {
                id: "fitness".into(),
                sub_industry: None,
            },
        )
        .await;
    store
        .set_uploaded_knowledge(
            ORG,
            UploadedKnowledge::new(vec![KnowledgeFragment::Identity {
                mission: None,
                values: vec![],
                dna_scan: None,
            }]),
        )
        .await;
    let below = check_readiness(&store, ORG).await;
    assert_eq!(below.score, 40);
    assert!(!below.is_ready);

    // 60 = the same plus a DNA scan (20): ready.
    store
        .set_uploaded_knowledge(
            ORG,
            UploadedKnowledge::new(vec![KnowledgeFragment::Identity {
                mission: None,
                values: vec![],
                dna_scan: Some("scan".into()),
            }]),
        )
        .await;
    let above = check_readiness(&store, ORG).await;
    assert_eq!(above.score, 60);
    assert!(above.is_ready);
}

#[tokio::test]
async fn ready_store_passes_the_gate() {
    let store = ready_store().await;
    let readiness = check_readiness(&store, ORG).await;
    assert_eq!(readiness.score, 100);
    assert!(readiness.is_ready);
    assert!(readiness.missing_elements.is_empty());
}

#[tokio::test]
async fn gate_result_is_recomputed_per_invocation() {
    let store = MemoryStore::new();
    let first = check_readiness(&store, ORG).await;
    assert!(!first.is_ready);

    store
        .set_industry(
            ORG,
            IndustryContext {
                id: "fitness".into(),
                sub_industry: None,
            },
        )
        .await;
    let second = check_readiness(&store, ORG).await;
    assert!(second.score > first.score);
}
