use super::techniques::{CopyTechnique, VisualTechnique};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Mutually exclusive copywriting personas. Exactly one is active per request;
/// the other two are carried on the strategy as explicit negative constraints.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CopySquad {
    /// Data-driven: claims backed by numbers, benchmarks, citations.
    Scientists,
    /// Narrative: audience-as-protagonist, arcs, sensory detail.
    Storytellers,
    /// Provocative: contrarian openers, sacred-cow challenges.
    Provocateurs,
}

impl CopySquad {
    /// Router fallback default when the model selection is missing or invalid.
    pub const DEFAULT: Self = Self::Storytellers;

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Every squad in the enumeration except `self`.
    pub fn all_except(self) -> Vec<Self> {
        Self::iter().filter(|s| *s != self).collect()
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Scientists => {
                "Evidence-first copy. Every claim is quantified or attributed; the reader is \
                 persuaded by measurement, not enthusiasm."
            }
            Self::Storytellers => {
                "Narrative copy. The audience is the protagonist; change is shown through a \
                 concrete before-and-after arc rather than asserted."
            }
            Self::Provocateurs => {
                "Confrontational copy. Opens by challenging an assumption the reader holds, \
                 then stakes out a sharp position without hedging."
            }
        }
    }

    /// Applicability heuristics embedded in the router decision prompt.
    pub const fn applicability(self) -> &'static str {
        match self {
            Self::Scientists => {
                "Fits technical buyers, performance or ROI briefs, regulated or skeptical \
                 markets, comparison and benchmark content."
            }
            Self::Storytellers => {
                "Fits consumer and community brands, founder stories, lifestyle products, \
                 launches aimed at broad audiences."
            }
            Self::Provocateurs => {
                "Fits crowded categories needing differentiation, challenger brands, \
                 opinionated thought-leadership pieces."
            }
        }
    }

    /// Language this squad must never use. Unioned with the organization's
    /// own forbidden words when a strategy is built.
    pub const fn forbidden_language(self) -> &'static [&'static str] {
        match self {
            Self::Scientists => &[
                "amazing",
                "incredible",
                "revolutionary",
                "game-changing",
                "magical",
                "unbelievable",
            ],
            Self::Storytellers => &[
                "utilize",
                "leverage",
                "synergy",
                "best-in-class",
                "streamline",
                "facilitate",
            ],
            Self::Provocateurs => &[
                "maybe",
                "perhaps",
                "possibly",
                "arguably",
                "we believe",
                "somewhat",
            ],
        }
    }

    pub const fn techniques(self) -> &'static [CopyTechnique] {
        match self {
            Self::Scientists => &[CopyTechnique::ProofStack, CopyTechnique::CaseStudy],
            Self::Storytellers => &[CopyTechnique::HeroJourney, CopyTechnique::BeforeAfter],
            Self::Provocateurs => &[
                CopyTechnique::PatternInterrupt,
                CopyTechnique::ContrarianTake,
            ],
        }
    }

    /// The squad's master technique, used when the router output names none.
    pub const fn default_technique(self) -> CopyTechnique {
        match self {
            Self::Scientists => CopyTechnique::ProofStack,
            Self::Storytellers => CopyTechnique::HeroJourney,
            Self::Provocateurs => CopyTechnique::PatternInterrupt,
        }
    }

    /// One negative and one positive worked example for the second
    /// forbidden-language reminder in the generation prompt.
    pub const fn worked_example(self) -> (&'static str, &'static str) {
        match self {
            Self::Scientists => (
                "This amazing platform will revolutionize your workflow.",
                "Teams using the platform shipped 31% faster across 1,200 tracked projects.",
            ),
            Self::Storytellers => (
                "Our solution leverages best-in-class synergy to streamline operations.",
                "Maya opened the dashboard on a Monday and, for the first time, saw her \
                 whole week before it happened.",
            ),
            Self::Provocateurs => (
                "We believe this could perhaps improve your results somewhat.",
                "Your onboarding flow is losing half your signups. Stop polishing it. \
                 Delete it.",
            ),
        }
    }
}

/// Mutually exclusive visual personas, selected alongside the copy squad.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VisualSquad {
    /// Restraint: whitespace, one subject, quiet palettes.
    Minimalists,
    /// Scene-setting: people, places, sequential moments.
    Storytellers,
    /// Abundance: saturated color, collage, deliberate excess.
    Maximalists,
}

impl VisualSquad {
    pub const DEFAULT: Self = Self::Storytellers;

    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn all_except(self) -> Vec<Self> {
        Self::iter().filter(|s| *s != self).collect()
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Minimalists => {
                "One subject, generous negative space, a restrained palette. The product \
                 carries the frame alone."
            }
            Self::Storytellers => {
                "Lived-in scenes with people mid-moment. The product appears in use, never \
                 staged in a vacuum."
            }
            Self::Maximalists => {
                "Saturated, layered, loud. Collage energy and clashing color used on \
                 purpose, never by accident."
            }
        }
    }

    pub const fn applicability(self) -> &'static str {
        match self {
            Self::Minimalists => {
                "Fits premium positioning, technical products, audiences that reward \
                 restraint over spectacle."
            }
            Self::Storytellers => {
                "Fits social feeds, lifestyle and community brands, any brief centered on \
                 people rather than objects."
            }
            Self::Maximalists => {
                "Fits youth-leaning audiences, entertainment, drops and events that must \
                 interrupt a crowded feed."
            }
        }
    }

    /// Terms appended as negative hints to image-generation prompts while
    /// this squad is active.
    pub const fn negative_hints(self) -> &'static [&'static str] {
        match self {
            Self::Minimalists => &[
                "cluttered layout",
                "busy background",
                "ornate borders",
                "stacked typography",
            ],
            Self::Storytellers => &[
                "sterile studio backdrop",
                "isolated product on white",
                "abstract geometry",
            ],
            Self::Maximalists => &[
                "muted palette",
                "empty whitespace",
                "single centered object",
            ],
        }
    }

    pub const fn techniques(self) -> &'static [VisualTechnique] {
        match self {
            Self::Minimalists => &[
                VisualTechnique::NegativeSpace,
                VisualTechnique::ProductHero,
            ],
            Self::Storytellers => &[
                VisualTechnique::LifestyleScene,
                VisualTechnique::StoryBoard,
            ],
            Self::Maximalists => &[VisualTechnique::BoldCollage, VisualTechnique::ColorClash],
        }
    }

    pub const fn default_technique(self) -> VisualTechnique {
        match self {
            Self::Minimalists => VisualTechnique::NegativeSpace,
            Self::Storytellers => VisualTechnique::LifestyleScene,
            Self::Maximalists => VisualTechnique::BoldCollage,
        }
    }
}
