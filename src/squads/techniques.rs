use super::styles::{CopySquad, VisualSquad};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Named sub-strategies within a copy squad. Each belongs to exactly one
/// squad; `Strategy` construction rejects cross-squad combinations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CopyTechnique {
    ProofStack,
    CaseStudy,
    HeroJourney,
    BeforeAfter,
    PatternInterrupt,
    ContrarianTake,
}

impl CopyTechnique {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub const fn squad(self) -> CopySquad {
        match self {
            Self::ProofStack | Self::CaseStudy => CopySquad::Scientists,
            Self::HeroJourney | Self::BeforeAfter => CopySquad::Storytellers,
            Self::PatternInterrupt | Self::ContrarianTake => CopySquad::Provocateurs,
        }
    }

    /// Keys of the full reference documents the assembler fetches for this
    /// technique.
    pub const fn reference_keys(self) -> &'static [&'static str] {
        match self {
            Self::ProofStack => &["proof_stack_playbook", "claims_and_evidence_guide"],
            Self::CaseStudy => &["case_study_playbook", "claims_and_evidence_guide"],
            Self::HeroJourney => &["hero_journey_playbook", "narrative_structure_guide"],
            Self::BeforeAfter => &["before_after_playbook", "narrative_structure_guide"],
            Self::PatternInterrupt => &["pattern_interrupt_playbook", "hook_writing_guide"],
            Self::ContrarianTake => &["contrarian_take_playbook", "hook_writing_guide"],
        }
    }

    /// Degraded default when none of the reference documents can be fetched.
    pub const fn builtin_playbook(self) -> &'static str {
        match self {
            Self::ProofStack => {
                "Proof stack: lead with the single strongest quantified result, then stack \
                 two or three supporting data points in descending order of impact. Attribute \
                 every number. Close with the measurable outcome the reader can expect."
            }
            Self::CaseStudy => {
                "Case study: name a real customer, state their starting condition with one \
                 metric, describe the intervention in plain language, and end on the delta. \
                 No adjectives where a number will do."
            }
            Self::HeroJourney => {
                "Hero journey: open inside the reader's ordinary frustration, introduce the \
                 product as the guide (not the hero), show one concrete turning point, and \
                 end with the reader transformed."
            }
            Self::BeforeAfter => {
                "Before/after: paint the 'before' in sensory, specific detail, cross the \
                 bridge in one sentence, then paint the 'after' with the same specificity. \
                 The contrast does the selling."
            }
            Self::PatternInterrupt => {
                "Pattern interrupt: the first line must break an expectation the reader \
                 brought with them. Short sentences. No wind-up. Earn the turn by paying it \
                 off with substance within two paragraphs."
            }
            Self::ContrarianTake => {
                "Contrarian take: name the consensus explicitly, disagree with it plainly, \
                 and spend the rest of the piece defending the disagreement with evidence \
                 or lived specifics. Never hedge the thesis."
            }
        }
    }
}

/// Named sub-strategies within a visual squad.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VisualTechnique {
    NegativeSpace,
    ProductHero,
    LifestyleScene,
    StoryBoard,
    BoldCollage,
    ColorClash,
}

impl VisualTechnique {
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub const fn squad(self) -> VisualSquad {
        match self {
            Self::NegativeSpace | Self::ProductHero => VisualSquad::Minimalists,
            Self::LifestyleScene | Self::StoryBoard => VisualSquad::Storytellers,
            Self::BoldCollage | Self::ColorClash => VisualSquad::Maximalists,
        }
    }

    /// Image-generation prompt template. `{product}` is replaced with the
    /// product description extracted from the brief.
    pub const fn image_prompt_template(self) -> &'static str {
        match self {
            Self::NegativeSpace => {
                "Minimal product photograph of {product}, single subject, vast negative \
                 space, soft directional light, restrained two-tone palette"
            }
            Self::ProductHero => {
                "Hero shot of {product}, centered low-angle composition, clean seamless \
                 backdrop, crisp studio lighting, premium finish"
            }
            Self::LifestyleScene => {
                "Candid lifestyle photograph of {product} in use, natural light, real \
                 setting with people mid-moment, warm documentary tone"
            }
            Self::StoryBoard => {
                "Three-panel sequential scene featuring {product}, same subject across \
                 panels, visible progression from problem to resolution"
            }
            Self::BoldCollage => {
                "Layered mixed-media collage around {product}, torn paper edges, saturated \
                 clashing colors, oversized cutout typography"
            }
            Self::ColorClash => {
                "High-saturation pop composition of {product}, complementary color blocking, \
                 hard shadows, graphic flat background"
            }
        }
    }
}
