use crate::harness::{MockProvider, ORG, ready_store};
use brandsmith::context::assemble;
use brandsmith::editor::{EditorialValidator, quick_validate, suggest_alternatives};
use brandsmith::squads::CopySquad;
use brandsmith::strategy::fallback_strategy;
use brandsmith::{ContextPackage, PipelineConfig, ReviewMode, Strategy};
use std::sync::Arc;

async fn scientists_fixture() -> (Strategy, ContextPackage) {
    let store = ready_store().await;
    let strategy = fallback_strategy("a data benchmark brief", None, None, None);
    assert_eq!(strategy.copy_squad, CopySquad::Scientists);
    let package = assemble(&store, &strategy, ORG, "brief").await.unwrap();
    (strategy, package)
}

#[test]
fn quick_validate_empty_list_is_always_valid() {
    for draft in ["", "anything", "AMAZING amazing Amazing"] {
        let report = quick_validate(draft, &[]);
        assert!(report.is_valid);
        assert!(report.violations.is_empty());
    }
}

#[test]
fn quick_validate_finds_exactly_the_present_terms() {
    let forbidden: Vec<String> = ["amazing", "synergy", "cheap"]
        .iter()
        .map(|t| (*t).to_string())
        .collect();
    let report = quick_validate("An Amazing deal, no synergy required.", &forbidden);
    assert_eq!(report.violations, vec!["amazing", "synergy"]);
    assert!(!report.is_valid);
}

#[test]
fn quick_validate_twice_yields_identical_reports() {
    let forbidden: Vec<String> = vec!["bold".into()];
    let first = quick_validate("a bold claim", &forbidden);
    let second = quick_validate("a bold claim", &forbidden);
    assert_eq!(first, second);
}

/// Scenario E: alternatives for "amazing" differ by squad and the
/// scientists' list reads technical and measured.
#[test]
fn alternatives_are_squad_specific() {
    let scientists = suggest_alternatives("amazing", CopySquad::Scientists);
    let storytellers = suggest_alternatives("amazing", CopySquad::Storytellers);
    assert!(!scientists.is_empty());
    assert_ne!(scientists, storytellers);
    assert!(scientists.iter().any(|s| *s == "measurable" || *s == "proven"));
}

#[tokio::test]
async fn approved_draft_is_returned_with_marker_stripped() {
    let (strategy, package) = scientists_fixture().await;
    let provider = Arc::new(MockProvider::new(vec![Ok(
        "[APPROVED] Teams shipped 31% faster.".into(),
    )]));
    let editor = EditorialValidator::new(Arc::clone(&provider) as _, PipelineConfig::default());

    let final_text = editor
        .validate("Teams shipped 31% faster.", &strategy, &package)
        .await
        .unwrap();
    assert_eq!(final_text, "Teams shipped 31% faster.");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn reviewer_receives_violations_and_checklists() {
    let (strategy, package) = scientists_fixture().await;
    let provider = Arc::new(MockProvider::new(vec![Ok("Rewritten clean copy.".into())]));
    let editor = EditorialValidator::new(Arc::clone(&provider) as _, PipelineConfig::default());

    let final_text = editor
        .validate("An amazing result.", &strategy, &package)
        .await
        .unwrap();
    assert_eq!(final_text, "Rewritten clean copy.");

    let sent = provider.seen_messages().pop().unwrap();
    assert!(sent.contains("Detected violations"));
    assert!(sent.contains("amazing"));
    assert!(sent.contains("Technique checklist"));
    assert!(sent.contains("Stage checklist"));
}

#[tokio::test]
async fn always_mode_reviews_even_clean_drafts() {
    let (strategy, package) = scientists_fixture().await;
    let provider = Arc::new(MockProvider::new(vec![Ok("[APPROVED] Clean copy.".into())]));
    let config = PipelineConfig::default();
    assert_eq!(config.review_mode, ReviewMode::Always);
    let editor = EditorialValidator::new(Arc::clone(&provider) as _, config);

    editor.validate("Clean copy.", &strategy, &package).await.unwrap();
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn on_violation_mode_skips_model_when_clean() {
    let (strategy, package) = scientists_fixture().await;
    let provider = Arc::new(MockProvider::new(vec![]));
    let config = PipelineConfig {
        review_mode: ReviewMode::OnViolation,
        ..PipelineConfig::default()
    };
    let editor = EditorialValidator::new(Arc::clone(&provider) as _, config);

    let final_text = editor
        .validate("Clean copy.", &strategy, &package)
        .await
        .unwrap();
    assert_eq!(final_text, "Clean copy.");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn on_violation_mode_still_reviews_dirty_drafts() {
    let (strategy, package) = scientists_fixture().await;
    let provider = Arc::new(MockProvider::new(vec![Ok("Fixed copy.".into())]));
    let config = PipelineConfig {
        review_mode: ReviewMode::OnViolation,
        ..PipelineConfig::default()
    };
    let editor = EditorialValidator::new(Arc::clone(&provider) as _, config);

    let final_text = editor
        .validate("An amazing result.", &strategy, &package)
        .await
        .unwrap();
    assert_eq!(final_text, "Fixed copy.");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn review_failure_degrades_to_the_draft() {
    let (strategy, package) = scientists_fixture().await;
    let provider = Arc::new(MockProvider::failing());
    let editor = EditorialValidator::new(Arc::clone(&provider) as _, PipelineConfig::default());

    let final_text = editor
        .validate("  Draft with an amazing claim.  ", &strategy, &package)
        .await
        .unwrap();
    assert_eq!(final_text, "Draft with an amazing claim.");
}
