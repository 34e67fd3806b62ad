use crate::harness::{MockProvider, ORG, RecordFailStore, ready_store, router_json};
use brandsmith::squads::{CopySquad, VisualSquad};
use brandsmith::store::MemoryStore;
use brandsmith::{ContentPipeline, GenerationRequest, PipelineConfig, StyleOverlay};
use std::sync::Arc;
use std::time::Duration;

fn pipeline(provider: Arc<MockProvider>, store: Arc<MemoryStore>) -> ContentPipeline {
    ContentPipeline::new(provider as _, store as _, PipelineConfig::default())
}

async fn wait_for_records(store: &MemoryStore) -> Vec<brandsmith::store::GenerationRecord> {
    for _ in 0..50 {
        let records = store.recorded_generations().await;
        if !records.is_empty() {
            return records;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    Vec::new()
}

#[tokio::test]
async fn full_run_sequences_all_four_stages() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("scientists", "minimalists", "product_aware")),
        Ok("Draft: teams shipped 31% faster.".into()),
        Ok("[APPROVED] Draft: teams shipped 31% faster.".into()),
    ]));
    let store = Arc::new(ready_store().await);
    let pipeline = pipeline(Arc::clone(&provider), Arc::clone(&store));

    let outcome = pipeline
        .run(GenerationRequest::new(
            "Announce the benchmark results for our pour-over kit",
            ORG,
        ))
        .await
        .unwrap();

    assert_eq!(outcome.content, "Draft: teams shipped 31% faster.");
    assert_eq!(outcome.strategy.copy_squad, CopySquad::Scientists);
    assert_eq!(outcome.strategy.visual_squad, VisualSquad::Minimalists);
    assert_eq!(outcome.metadata.readiness_score, 100);
    assert!(outcome.metadata.reference_document_count >= 1);
    assert!(outcome.image_prompt.is_none());
    assert_eq!(provider.call_count(), 3);

    // Router, generator, and reviewer each got their own role prompt.
    let systems = provider.seen_system_prompts();
    assert_eq!(systems.len(), 3);
    assert!(systems[0].as_deref().unwrap().contains("strategy director"));
    assert!(systems[1].as_deref().unwrap().contains("senior copywriter"));
    assert!(systems[2].as_deref().unwrap().contains("copy chief"));

    // The generation prompt carried the forbidden block and the brief last.
    let generation_prompt = &provider.seen_messages()[1];
    assert!(generation_prompt.contains("Reminder: forbidden language"));
    assert!(generation_prompt.ends_with("Announce the benchmark results for our pour-over kit"));
}

#[tokio::test]
async fn skip_editor_bypasses_the_review_call() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("storytellers", "storytellers", "solution_aware")),
        Ok("The draft, untouched.".into()),
    ]));
    let store = Arc::new(ready_store().await);
    let pipeline = pipeline(Arc::clone(&provider), Arc::clone(&store));

    let request = GenerationRequest {
        skip_editor: true,
        ..GenerationRequest::new("Tell our founder story", ORG)
    };
    let outcome = pipeline.run(request).await.unwrap();
    assert_eq!(outcome.content, "The draft, untouched.");
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn image_prompt_is_derived_from_visual_technique() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("storytellers", "storytellers", "solution_aware")),
        Ok("Draft.".into()),
        Ok("[APPROVED] Draft.".into()),
    ]));
    let store = Arc::new(ready_store().await);
    let pipeline = pipeline(Arc::clone(&provider), Arc::clone(&store));

    let request = GenerationRequest {
        include_image_prompt: true,
        ..GenerationRequest::new("A post promoting our pour-over kit, warm tone", ORG)
    };
    let outcome = pipeline.run(request).await.unwrap();
    let image_prompt = outcome.image_prompt.unwrap();
    assert!(image_prompt.contains("our pour-over kit"));
    assert!(image_prompt.contains("Avoid: "));
    // Storyteller visuals forbid sterile studio shots.
    assert!(image_prompt.contains("sterile studio backdrop"));
}

#[tokio::test]
async fn style_overlay_reaches_the_generation_prompt() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("storytellers", "storytellers", "solution_aware")),
        Ok("Draft.".into()),
        Ok("[APPROVED] Draft.".into()),
    ]));
    let store = Arc::new(ready_store().await);
    let pipeline = pipeline(Arc::clone(&provider), Arc::clone(&store));

    let request = GenerationRequest {
        overlay: Some(StyleOverlay {
            tone: Some("playful".into()),
            emphasis: Some("limited stock".into()),
        }),
        ..GenerationRequest::new("Spring sale post", ORG)
    };
    pipeline.run(request).await.unwrap();

    let generation_system = provider.seen_system_prompts()[1].clone().unwrap();
    assert!(generation_system.contains("Tone overlay for this request: playful"));
    assert!(generation_system.contains("Emphasis overlay for this request: limited stock"));
}

#[tokio::test]
async fn analytics_record_is_appended_off_the_critical_path() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("scientists", "minimalists", "unaware")),
        Ok("Draft.".into()),
        Ok("[APPROVED] Draft.".into()),
    ]));
    let store = Arc::new(ready_store().await);
    let pipeline = pipeline(Arc::clone(&provider), Arc::clone(&store));

    let outcome = pipeline
        .run(GenerationRequest::new("Benchmark brief", ORG))
        .await
        .unwrap();

    let records = wait_for_records(&store).await;
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, outcome.metadata.run_id);
    assert_eq!(record.organization_id, ORG);
    assert_eq!(record.brief, "Benchmark brief");
    assert_eq!(record.content, outcome.content);
    assert!(record.context_summary.contains("refs="));
}

#[tokio::test]
async fn analytics_failure_never_fails_the_request() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("scientists", "minimalists", "unaware")),
        Ok("Draft.".into()),
        Ok("[APPROVED] Draft.".into()),
    ]));
    let store = Arc::new(RecordFailStore {
        inner: ready_store().await,
    });
    let pipeline = ContentPipeline::new(
        Arc::clone(&provider) as _,
        store as _,
        PipelineConfig::default(),
    );

    let outcome = pipeline
        .run(GenerationRequest::new("Benchmark brief", ORG))
        .await
        .unwrap();
    assert_eq!(outcome.content, "Draft.");
}

#[tokio::test]
async fn configured_output_bound_reaches_every_model_call() {
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("scientists", "minimalists", "unaware")),
        Ok("Draft.".into()),
        Ok("[APPROVED] Draft.".into()),
    ]));
    let store = Arc::new(ready_store().await);
    let config = PipelineConfig {
        max_output_tokens: 77,
        ..PipelineConfig::default()
    };
    let pipeline = ContentPipeline::new(Arc::clone(&provider) as _, store as _, config);

    pipeline
        .run(GenerationRequest::new("Benchmark brief", ORG))
        .await
        .unwrap();
    assert_eq!(provider.seen_max_tokens(), vec![77, 77, 77]);
}

#[tokio::test]
async fn generation_failure_surfaces_as_an_error() {
    // Router succeeds, generation fails: no usable content exists, so the
    // run errors rather than inventing output.
    let provider = Arc::new(MockProvider::new(vec![
        Ok(router_json("scientists", "minimalists", "unaware")),
        Err(anyhow::anyhow!("model down")),
    ]));
    let store = Arc::new(ready_store().await);
    let pipeline = pipeline(Arc::clone(&provider), Arc::clone(&store));

    let result = pipeline.run(GenerationRequest::new("brief", ORG)).await;
    assert!(result.is_err());
}
