mod fallback;
mod router;

pub use fallback::fallback_strategy;
pub use router::StrategyRouter;

use crate::squads::{AwarenessStage, CopySquad, CopyTechnique, VisualSquad, VisualTechnique};
use crate::store::BrandIdentity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Validated router output before forbidden sets are derived. Field-level
/// defaults have already been applied; [`Strategy::from_selection`] is the
/// only consumer.
#[derive(Debug, Clone)]
pub struct StrategySelection {
    pub copy_squad: CopySquad,
    pub visual_squad: VisualSquad,
    pub primary_copy_technique: Option<CopyTechnique>,
    pub primary_visual_technique: Option<VisualTechnique>,
    pub secondary_copy_technique: Option<CopyTechnique>,
    pub awareness_stage: AwarenessStage,
    pub reasoning: String,
    pub product_id: Option<String>,
}

/// The stylistic contract for one pipeline run. Immutable after
/// construction; owned by exactly one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub copy_squad: CopySquad,
    pub visual_squad: VisualSquad,
    pub primary_copy_technique: CopyTechnique,
    pub primary_visual_technique: VisualTechnique,
    pub secondary_copy_technique: Option<CopyTechnique>,
    /// Always exactly the copy enumeration minus `copy_squad`.
    pub forbidden_copy_squads: Vec<CopySquad>,
    /// Always exactly the visual enumeration minus `visual_squad`.
    pub forbidden_visual_squads: Vec<VisualSquad>,
    pub forbidden_language: BTreeSet<String>,
    pub forbidden_visual_hints: BTreeSet<String>,
    pub awareness_stage: AwarenessStage,
    /// Advisory only; never parsed.
    pub reasoning: String,
    pub product_id: Option<String>,
}

impl Strategy {
    /// Build a strategy from a validated selection, enforcing every
    /// invariant:
    ///
    /// - a squad the brand identity forbids is replaced by the first
    ///   permitted squad before anything is derived from it;
    /// - techniques must belong to the selected squad, else the squad's
    ///   master technique is used;
    /// - forbidden squad sets are recomputed here, never taken from model
    ///   output;
    /// - `forbidden_language` is the union of squad terms and the
    ///   organization's own forbidden words, de-duplicated.
    pub fn from_selection(
        selection: StrategySelection,
        identity: Option<&BrandIdentity>,
    ) -> Self {
        let copy_squad = permitted_copy_squad(selection.copy_squad, identity);
        let visual_squad = selection.visual_squad;

        let primary_copy_technique = selection
            .primary_copy_technique
            .filter(|t| t.squad() == copy_squad)
            .unwrap_or_else(|| copy_squad.default_technique());
        let secondary_copy_technique = selection
            .secondary_copy_technique
            .filter(|t| t.squad() == copy_squad && *t != primary_copy_technique);
        let primary_visual_technique = selection
            .primary_visual_technique
            .filter(|t| t.squad() == visual_squad)
            .unwrap_or_else(|| visual_squad.default_technique());

        let mut forbidden_language: BTreeSet<String> = copy_squad
            .forbidden_language()
            .iter()
            .map(|term| term.to_lowercase())
            .collect();
        if let Some(identity) = identity {
            forbidden_language.extend(
                identity
                    .forbidden_words
                    .iter()
                    .map(|word| word.to_lowercase()),
            );
        }

        let forbidden_visual_hints: BTreeSet<String> = visual_squad
            .negative_hints()
            .iter()
            .map(|hint| (*hint).to_string())
            .collect();

        Self {
            copy_squad,
            visual_squad,
            primary_copy_technique,
            primary_visual_technique,
            secondary_copy_technique,
            forbidden_copy_squads: copy_squad.all_except(),
            forbidden_visual_squads: visual_squad.all_except(),
            forbidden_language,
            forbidden_visual_hints,
            awareness_stage: selection.awareness_stage,
            reasoning: selection.reasoning,
            product_id: selection.product_id,
        }
    }

    /// Reference-document keys for the chosen techniques, primary first,
    /// de-duplicated in order.
    pub fn reference_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        for key in self
            .primary_copy_technique
            .reference_keys()
            .iter()
            .chain(
                self.secondary_copy_technique
                    .map(CopyTechnique::reference_keys)
                    .unwrap_or_default(),
            )
        {
            if !keys.contains(key) {
                keys.push(*key);
            }
        }
        keys
    }
}

/// Brand identities may forbid squads outright; a forbidden selection is
/// replaced rather than violating the enumeration-minus-selection invariant.
fn permitted_copy_squad(selected: CopySquad, identity: Option<&BrandIdentity>) -> CopySquad {
    let Some(identity) = identity else {
        return selected;
    };
    if !identity.forbidden_copy_squads.contains(&selected) {
        return selected;
    }
    std::iter::once(CopySquad::DEFAULT)
        .chain(CopySquad::all())
        .find(|candidate| !identity.forbidden_copy_squads.contains(candidate))
        .unwrap_or(CopySquad::DEFAULT)
}
