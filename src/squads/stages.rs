use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Audience-awareness stages, ordered least to most aware. The stage decides
/// which narrative template frames the piece.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AwarenessStage {
    Unaware,
    ProblemAware,
    SolutionAware,
    ProductAware,
    MostAware,
}

impl AwarenessStage {
    /// Router fallback default: the middle stage.
    pub const DEFAULT: Self = Self::SolutionAware;

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Unaware => "Audience does not yet recognize the problem exists.",
            Self::ProblemAware => "Audience feels the problem but knows no solutions.",
            Self::SolutionAware => "Audience knows solutions exist but not this product.",
            Self::ProductAware => "Audience knows the product but is not yet convinced.",
            Self::MostAware => "Audience is convinced and needs only the offer.",
        }
    }

    /// Built-in narrative template, used when the store has no override for
    /// this stage.
    pub const fn default_template(self) -> &'static str {
        match self {
            Self::Unaware => {
                "Open on a vivid symptom the reader will recognize before they can name its \
                 cause. Surface the hidden problem gradually. Do not mention the product \
                 until the problem is undeniable, then introduce it as one consequence of \
                 seeing the problem clearly."
            }
            Self::ProblemAware => {
                "Name the problem in the reader's own words within the first two sentences. \
                 Agitate its real cost. Introduce the solution category, then position the \
                 product as the natural entry point."
            }
            Self::SolutionAware => {
                "Acknowledge the solutions the reader has already considered. Differentiate \
                 on the one axis competitors cannot follow. Make the product's mechanism \
                 concrete and comparable."
            }
            Self::ProductAware => {
                "Lead with the strongest proof the product delivers. Answer the unspoken \
                 objection directly. Reduce perceived risk with specifics: numbers, \
                 guarantees, named customers."
            }
            Self::MostAware => {
                "Skip persuasion. State the offer, the terms, and the deadline plainly. \
                 Every sentence either restates the deal or removes a step between the \
                 reader and acting on it."
            }
        }
    }
}
