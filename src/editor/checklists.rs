use crate::squads::{AwarenessStage, CopyTechnique};

/// Review checklist for a copy technique. Data, not branching logic: the
/// reviewer prompt renders these verbatim.
pub const fn technique_checklist(technique: CopyTechnique) -> &'static [&'static str] {
    match technique {
        CopyTechnique::ProofStack => &[
            "Every claim carries a number or a named source",
            "The strongest data point leads",
            "No superlative stands without evidence",
        ],
        CopyTechnique::CaseStudy => &[
            "A real customer is named or clearly anonymized",
            "Before and after states are both quantified",
            "The intervention is described in plain language",
        ],
        CopyTechnique::HeroJourney => &[
            "The reader, not the product, is the protagonist",
            "There is one concrete turning point",
            "The ending shows the reader transformed",
        ],
        CopyTechnique::BeforeAfter => &[
            "The before state is specific and sensory",
            "The bridge is a single sentence",
            "Before and after are described with matching specificity",
        ],
        CopyTechnique::PatternInterrupt => &[
            "The first line breaks a reader expectation",
            "The opening promise is paid off within two paragraphs",
            "Sentences stay short through the hook",
        ],
        CopyTechnique::ContrarianTake => &[
            "The consensus position is stated explicitly",
            "The disagreement is defended with evidence or specifics",
            "The thesis is never hedged",
        ],
    }
}

/// Review checklist for an awareness stage.
pub const fn stage_checklist(stage: AwarenessStage) -> &'static [&'static str] {
    match stage {
        AwarenessStage::Unaware => &[
            "The problem is surfaced before the product is mentioned",
            "The opening names a symptom the reader recognizes",
        ],
        AwarenessStage::ProblemAware => &[
            "The problem is named in the reader's own words early",
            "The cost of inaction is concrete",
        ],
        AwarenessStage::SolutionAware => &[
            "Known alternatives are acknowledged",
            "Differentiation rests on one clear axis",
        ],
        AwarenessStage::ProductAware => &[
            "The strongest proof leads",
            "The main objection is answered directly",
        ],
        AwarenessStage::MostAware => &[
            "The offer and terms are stated plainly",
            "No persuasion padding before the call to action",
        ],
    }
}
