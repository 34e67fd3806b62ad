use super::{Strategy, StrategySelection};
use crate::squads::{AwarenessStage, CopySquad, VisualSquad};
use crate::store::BrandIdentity;

/// One row of the deterministic routing table: if any keyword appears in the
/// brief, the row's squads apply.
struct KeywordRoute {
    keywords: &'static [&'static str],
    copy: CopySquad,
    visual: VisualSquad,
}

/// Single lookup table consumed by [`fallback_strategy`]. Rows are checked
/// in order; the first match wins.
const KEYWORD_ROUTES: &[KeywordRoute] = &[
    KeywordRoute {
        keywords: &[
            "data", "metric", "benchmark", "roi", "performance", "accuracy", "efficiency",
            "study", "results",
        ],
        copy: CopySquad::Scientists,
        visual: VisualSquad::Minimalists,
    },
    KeywordRoute {
        keywords: &[
            "bold", "disrupt", "challenge", "rebel", "controversial", "provoke", "myth",
        ],
        copy: CopySquad::Provocateurs,
        visual: VisualSquad::Maximalists,
    },
    KeywordRoute {
        keywords: &[
            "story", "journey", "community", "family", "celebrate", "inspire", "founder",
        ],
        copy: CopySquad::Storytellers,
        visual: VisualSquad::Storytellers,
    },
];

/// Channel hints only influence the visual squad.
const CHANNEL_VISUALS: &[(&str, VisualSquad)] = &[
    ("instagram", VisualSquad::Storytellers),
    ("tiktok", VisualSquad::Maximalists),
    ("linkedin", VisualSquad::Minimalists),
    ("email", VisualSquad::Minimalists),
];

/// Fully deterministic strategy used when the routing model is unavailable
/// or returns unparseable output. Precedence: brand-identity defaults, then
/// the keyword table, then channel hint (visual only), then system defaults.
pub fn fallback_strategy(
    brief: &str,
    channel: Option<&str>,
    identity: Option<&BrandIdentity>,
    product_id: Option<&str>,
) -> Strategy {
    let brief_lower = brief.to_lowercase();
    let keyword_match = KEYWORD_ROUTES.iter().find(|route| {
        route
            .keywords
            .iter()
            .any(|keyword| brief_lower.contains(keyword))
    });

    let copy_squad = identity
        .and_then(|i| i.essence.copy_squad)
        .or(keyword_match.map(|route| route.copy))
        .unwrap_or(CopySquad::DEFAULT);

    let channel_visual = channel.and_then(|channel| {
        let channel = channel.to_lowercase();
        CHANNEL_VISUALS
            .iter()
            .find(|(name, _)| *name == channel)
            .map(|(_, squad)| *squad)
    });
    let visual_squad = identity
        .and_then(|i| i.essence.visual_squad)
        .or(keyword_match.map(|route| route.visual))
        .or(channel_visual)
        .unwrap_or(VisualSquad::DEFAULT);

    Strategy::from_selection(
        StrategySelection {
            copy_squad,
            visual_squad,
            primary_copy_technique: None,
            primary_visual_technique: None,
            secondary_copy_technique: None,
            awareness_stage: AwarenessStage::DEFAULT,
            reasoning: "Deterministic fallback: routing model output was unavailable or \
                        unparseable."
                .into(),
            product_id: product_id.map(Into::into),
        },
        identity,
    )
}
