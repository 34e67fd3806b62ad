use crate::context::ContextPackage;
use crate::error::PromptError;
use crate::generator::StyleOverlay;
use crate::squads::{AwarenessStage, CopySquad, VisualSquad};
use crate::store::{BrandIdentity, IdentitySource};
use crate::strategy::Strategy;
use serde_json::json;
use tera::{Context, Tera};

/// Marker the reviewer prefixes to an unchanged draft. Stripped before the
/// final text is returned.
pub const APPROVAL_MARKER: &str = "[APPROVED]";

pub const ROUTER_ROLE_PROMPT: &str = "\
You are the strategy director of a brand content studio. Given a brief, you \
select exactly one copy squad, one visual squad, their techniques, and the \
audience awareness stage. Respond with a single JSON object and nothing else: \
no prose, no markdown fences. Shape: {\"copy_squad\": ..., \"visual_squad\": \
..., \"primary_copy_technique\": ..., \"primary_visual_technique\": ..., \
\"secondary_copy_technique\": null, \"awareness_stage\": ..., \"reasoning\": \
...}. Use the snake_case names exactly as defined in the assignment.";

pub const COPYWRITER_ROLE_PROMPT: &str = "\
You are the studio's senior copywriter. You write finished marketing copy, \
never outlines or meta-commentary. You stay strictly inside the assigned \
squad's voice and treat every forbidden term as a hard constraint, not a \
suggestion.";

pub const REVIEWER_ROLE_PROMPT: &str = "\
You are the studio's copy chief on final review. If the draft fully respects \
its constraints, return it unchanged, prefixed with [APPROVED] on its own. If \
any passage violates a constraint, rewrite only the offending passages, keep \
everything else word-for-word, and return the full corrected draft without \
the marker. Never add commentary.";

const ROUTER_DECISION_NAME: &str = "router_decision";
const ROUTER_DECISION_TEMPLATE: &str = "\
## Brief
{{ brief }}

{% if channel %}## Channel
{{ channel }}
{% endif %}\
{% if brand_defaults %}## Brand defaults
{{ brand_defaults }}
{% endif %}\
## Copy squads (pick exactly one)
{% for squad in copy_squads %}### {{ squad.name }}
{{ squad.description }}
When to use: {{ squad.applicability }}
Techniques: {{ squad.techniques | join(sep=\", \") }}
{% endfor %}\
## Visual squads (pick exactly one)
{% for squad in visual_squads %}### {{ squad.name }}
{{ squad.description }}
When to use: {{ squad.applicability }}
Techniques: {{ squad.techniques | join(sep=\", \") }}
{% endfor %}\
## Awareness stages (pick exactly one)
{% for stage in stages %}- {{ stage.name }}: {{ stage.description }}
{% endfor %}";

const COPYWRITER_SYSTEM_NAME: &str = "copywriter_system";
const COPYWRITER_SYSTEM_TEMPLATE: &str = "\
{{ role }}

## Current assignment
Copy squad: {{ copy_squad }} — {{ copy_squad_description }}
Technique: {{ primary_copy_technique }}
Visual squad: {{ visual_squad }}
Awareness stage: {{ awareness_stage }} — {{ stage_description }}
{% if overlay_tone %}Tone overlay for this request: {{ overlay_tone }}
{% endif %}\
{% if overlay_emphasis %}Emphasis overlay for this request: {{ overlay_emphasis }}
{% endif %}
## Forbidden squads
You must not write in the voice of: {{ forbidden_copy_squads | join(sep=\", \") }}.
You must not evoke the visual language of: {{ forbidden_visual_squads | join(sep=\", \") }}.

## Forbidden language
The following terms must not appear anywhere in your output, in any casing:
{% for term in forbidden_language %}- {{ term }}
{% endfor %}";

const COPYWRITER_USER_NAME: &str = "copywriter_user";
const COPYWRITER_USER_TEMPLATE: &str = "\
{% if reference_documents %}## Reference material
{% for doc in reference_documents %}{{ doc }}

{% endfor %}{% endif %}\
## Narrative structure for this awareness stage
{{ stage_template }}

## Brand
{% if brand_note %}{{ brand_note }}
{% endif %}\
{% if brand_mission %}Mission: {{ brand_mission }}
{% endif %}\
{% if brand_tone %}Tone: {{ brand_tone }}
{% endif %}\
{% if product_name %}## Product facts
Name: {{ product_name }}
{% if product_price %}Price: {{ product_price }}
{% endif %}\
{% if product_benefits %}Benefits: {{ product_benefits | join(sep=\"; \") }}
{% endif %}\
{% if product_claims %}Approved claims: {{ product_claims | join(sep=\"; \") }}
{% endif %}{% endif %}\
{% if writing_examples %}## Writing examples in the brand's voice
{% for example in writing_examples %}- {{ example }}
{% endfor %}{% endif %}\
## Reminder: forbidden language
Do not use: {{ forbidden_language | join(sep=\", \") }}.
Wrong: {{ negative_example }}
Right: {{ positive_example }}

## Brief
{{ brief }}";

const REVIEW_NAME: &str = "review";
const REVIEW_TEMPLATE: &str = "\
## Draft under review
{{ draft }}

## Constraints
Squad: {{ copy_squad }}. Awareness stage: {{ awareness_stage }}.
Forbidden terms: {{ forbidden_language | join(sep=\", \") }}.
{% if violations %}
## Detected violations
The local scan already found these forbidden terms in the draft; they must be
rewritten: {{ violations | join(sep=\", \") }}.
{% endif %}
## Technique checklist
{% for item in technique_checklist %}- {{ item }}
{% endfor %}\
## Stage checklist
{% for item in stage_checklist %}- {{ item }}
{% endfor %}";

/// A tera instance with every prompt template registered.
fn prompt_engine() -> Result<Tera, PromptError> {
    let mut tera = Tera::default();
    tera.add_raw_template(ROUTER_DECISION_NAME, ROUTER_DECISION_TEMPLATE)?;
    tera.add_raw_template(COPYWRITER_SYSTEM_NAME, COPYWRITER_SYSTEM_TEMPLATE)?;
    tera.add_raw_template(COPYWRITER_USER_NAME, COPYWRITER_USER_TEMPLATE)?;
    tera.add_raw_template(REVIEW_NAME, REVIEW_TEMPLATE)?;
    Ok(tera)
}

fn squad_entries_copy() -> Vec<serde_json::Value> {
    CopySquad::all()
        .into_iter()
        .map(|squad| {
            json!({
                "name": squad.to_string(),
                "description": squad.description(),
                "applicability": squad.applicability(),
                "techniques": squad
                    .techniques()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            })
        })
        .collect()
}

fn squad_entries_visual() -> Vec<serde_json::Value> {
    VisualSquad::all()
        .into_iter()
        .map(|squad| {
            json!({
                "name": squad.to_string(),
                "description": squad.description(),
                "applicability": squad.applicability(),
                "techniques": squad
                    .techniques()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>(),
            })
        })
        .collect()
}

fn stage_entries() -> Vec<serde_json::Value> {
    AwarenessStage::all()
        .into_iter()
        .map(|stage| {
            json!({
                "name": stage.to_string(),
                "description": stage.description(),
            })
        })
        .collect()
}

fn identity_defaults_line(identity: Option<&BrandIdentity>) -> String {
    let Some(identity) = identity else {
        return String::new();
    };
    let mut parts = Vec::new();
    if let Some(squad) = identity.essence.copy_squad {
        parts.push(format!("preferred copy squad: {squad}"));
    }
    if let Some(squad) = identity.essence.visual_squad {
        parts.push(format!("preferred visual squad: {squad}"));
    }
    if !identity.essence.tone.is_empty() {
        parts.push(format!("brand tone: {}", identity.essence.tone.join(", ")));
    }
    if !identity.forbidden_copy_squads.is_empty() {
        let names: Vec<String> = identity
            .forbidden_copy_squads
            .iter()
            .map(ToString::to_string)
            .collect();
        parts.push(format!("never use these squads: {}", names.join(", ")));
    }
    parts.join("; ")
}

/// Decision prompt for the strategy router.
pub fn build_router_prompt(
    brief: &str,
    identity: Option<&BrandIdentity>,
    channel: Option<&str>,
) -> Result<String, PromptError> {
    let engine = prompt_engine()?;
    let mut ctx = Context::new();
    ctx.insert("brief", brief);
    ctx.insert("channel", &channel.unwrap_or_default());
    ctx.insert("brand_defaults", &identity_defaults_line(identity));
    ctx.insert("copy_squads", &squad_entries_copy());
    ctx.insert("visual_squads", &squad_entries_visual());
    ctx.insert("stages", &stage_entries());
    Ok(engine.render(ROUTER_DECISION_NAME, &ctx)?)
}

/// System half of the generation prompt: role preamble, current assignment,
/// and the imperative forbidden block.
pub fn build_copywriter_system_prompt(
    strategy: &Strategy,
    overlay: Option<&StyleOverlay>,
) -> Result<String, PromptError> {
    let engine = prompt_engine()?;
    let mut ctx = Context::new();
    ctx.insert("role", COPYWRITER_ROLE_PROMPT);
    ctx.insert("copy_squad", &strategy.copy_squad.to_string());
    ctx.insert("copy_squad_description", strategy.copy_squad.description());
    ctx.insert(
        "primary_copy_technique",
        &strategy.primary_copy_technique.to_string(),
    );
    ctx.insert("visual_squad", &strategy.visual_squad.to_string());
    ctx.insert("awareness_stage", &strategy.awareness_stage.to_string());
    ctx.insert("stage_description", strategy.awareness_stage.description());
    ctx.insert(
        "overlay_tone",
        &overlay.and_then(|o| o.tone.as_deref()).unwrap_or_default(),
    );
    ctx.insert(
        "overlay_emphasis",
        &overlay
            .and_then(|o| o.emphasis.as_deref())
            .unwrap_or_default(),
    );
    ctx.insert(
        "forbidden_copy_squads",
        &strategy
            .forbidden_copy_squads
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    );
    ctx.insert(
        "forbidden_visual_squads",
        &strategy
            .forbidden_visual_squads
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
    );
    ctx.insert(
        "forbidden_language",
        &strategy.forbidden_language.iter().collect::<Vec<_>>(),
    );
    Ok(engine.render(COPYWRITER_SYSTEM_NAME, &ctx)?)
}

/// User half of the generation prompt. Section order is part of the
/// contract: references, stage template, brand, product, examples, forbidden
/// reminder, brief.
pub fn build_copywriter_user_prompt(
    brief: &str,
    strategy: &Strategy,
    context: &ContextPackage,
) -> Result<String, PromptError> {
    let engine = prompt_engine()?;
    let identity = &context.brand_identity;
    let (negative_example, positive_example) = strategy.copy_squad.worked_example();

    let brand_note = if identity.source == IdentitySource::NeutralDefault {
        "No brand identity on file. Use a neutral, professional register and do not \
         invent brand facts."
    } else {
        ""
    };

    let mut ctx = Context::new();
    ctx.insert("reference_documents", &context.reference_documents);
    ctx.insert("stage_template", &context.stage_template);
    ctx.insert("brand_note", brand_note);
    ctx.insert(
        "brand_mission",
        &identity.essence.mission.as_deref().unwrap_or_default(),
    );
    ctx.insert("brand_tone", &identity.essence.tone.join(", "));
    let facts = context.product_facts.as_ref();
    ctx.insert("product_name", &facts.map(|f| f.name.as_str()).unwrap_or_default());
    ctx.insert(
        "product_price",
        &facts.and_then(|f| f.price.as_deref()).unwrap_or_default(),
    );
    ctx.insert(
        "product_benefits",
        &facts.map(|f| f.benefits.clone()).unwrap_or_default(),
    );
    ctx.insert(
        "product_claims",
        &facts.map(|f| f.claims.clone()).unwrap_or_default(),
    );
    ctx.insert("writing_examples", &context.writing_examples);
    ctx.insert(
        "forbidden_language",
        &strategy.forbidden_language.iter().collect::<Vec<_>>(),
    );
    ctx.insert("negative_example", negative_example);
    ctx.insert("positive_example", positive_example);
    ctx.insert("brief", brief);
    Ok(engine.render(COPYWRITER_USER_NAME, &ctx)?)
}

/// Review prompt for the editorial pass. Checklists are supplied by the
/// editor's data tables.
pub fn build_review_prompt(
    draft: &str,
    violations: &[String],
    strategy: &Strategy,
    technique_checklist: &[&str],
    stage_checklist: &[&str],
) -> Result<String, PromptError> {
    let engine = prompt_engine()?;
    let mut ctx = Context::new();
    ctx.insert("draft", draft);
    ctx.insert("violations", violations);
    ctx.insert("copy_squad", &strategy.copy_squad.to_string());
    ctx.insert("awareness_stage", &strategy.awareness_stage.to_string());
    ctx.insert(
        "forbidden_language",
        &strategy.forbidden_language.iter().collect::<Vec<_>>(),
    );
    ctx.insert("technique_checklist", technique_checklist);
    ctx.insert("stage_checklist", stage_checklist);
    Ok(engine.render(REVIEW_NAME, &ctx)?)
}
