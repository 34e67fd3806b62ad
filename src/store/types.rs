use crate::squads::{CopySquad, VisualSquad};
use crate::strategy::Strategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// ─── Brand identity ─────────────────────────────────────────────────────────

/// Where a resolved brand identity came from. `NeutralDefault` marks the
/// clearly-labelled fallback so downstream prompts never present invented
/// colors or tone as brand facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdentitySource {
    Explicit,
    Synthesized,
    NeutralDefault,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualIdentity {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub typography: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandEssence {
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub tone: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub copy_squad: Option<CopySquad>,
    #[serde(default)]
    pub visual_squad: Option<VisualSquad>,
}

/// Canonical organization-level brand record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub visual: VisualIdentity,
    pub essence: BrandEssence,
    #[serde(default)]
    pub forbidden_words: Vec<String>,
    #[serde(default)]
    pub forbidden_copy_squads: Vec<CopySquad>,
    pub source: IdentitySource,
}

impl BrandIdentity {
    /// Neutral fallback when neither an explicit record nor uploaded
    /// knowledge exists. Carries no brand-specific colors or tone.
    pub fn neutral_default() -> Self {
        Self {
            visual: VisualIdentity::default(),
            essence: BrandEssence::default(),
            forbidden_words: Vec::new(),
            forbidden_copy_squads: Vec::new(),
            source: IdentitySource::NeutralDefault,
        }
    }
}

// ─── Design tokens ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTypography {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub palette: TokenPalette,
    pub typography: TokenTypography,
}

impl DesignTokens {
    /// Fixed neutral palette/typography used when no dedicated tokens exist.
    pub fn neutral() -> Self {
        Self {
            palette: TokenPalette {
                primary: "#1a1a1a".into(),
                secondary: "#4a4a4a".into(),
                accent: "#0066cc".into(),
                background: "#ffffff".into(),
                text: "#1a1a1a".into(),
            },
            typography: TokenTypography {
                heading: "system-ui".into(),
                body: "system-ui".into(),
            },
        }
    }
}

// ─── Product facts ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFacts {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub claims: Vec<String>,
}

// ─── Uploaded knowledge ─────────────────────────────────────────────────────

/// Category discriminant matching [`KnowledgeFragment`] variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KnowledgeCategory {
    Voice,
    Vocabulary,
    Identity,
    Examples,
    Structure,
}

/// One uploaded brand-knowledge fragment. Each category has its own fixed
/// shape; the serialized form is tagged by `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum KnowledgeFragment {
    Voice {
        tone: Vec<String>,
        #[serde(default)]
        sample: Option<String>,
    },
    Vocabulary {
        #[serde(default)]
        preferred: Vec<String>,
        #[serde(default)]
        forbidden: Vec<String>,
    },
    Identity {
        #[serde(default)]
        mission: Option<String>,
        #[serde(default)]
        values: Vec<String>,
        /// DNA-scan report produced by an automated brand analysis, when one
        /// was run for this organization.
        #[serde(default)]
        dna_scan: Option<String>,
    },
    Examples {
        snippets: Vec<String>,
    },
    Structure {
        outline: String,
    },
}

impl KnowledgeFragment {
    pub const fn category(&self) -> KnowledgeCategory {
        match self {
            Self::Voice { .. } => KnowledgeCategory::Voice,
            Self::Vocabulary { .. } => KnowledgeCategory::Vocabulary,
            Self::Identity { .. } => KnowledgeCategory::Identity,
            Self::Examples { .. } => KnowledgeCategory::Examples,
            Self::Structure { .. } => KnowledgeCategory::Structure,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedKnowledge {
    pub fragments: Vec<KnowledgeFragment>,
}

impl UploadedKnowledge {
    pub fn new(fragments: Vec<KnowledgeFragment>) -> Self {
        Self { fragments }
    }

    pub fn has_category(&self, category: KnowledgeCategory) -> bool {
        self.fragments.iter().any(|f| f.category() == category)
    }

    /// The DNA-scan report, if any identity fragment carries one.
    pub fn dna_scan(&self) -> Option<&str> {
        self.fragments.iter().find_map(|f| match f {
            KnowledgeFragment::Identity {
                dna_scan: Some(report),
                ..
            } => Some(report.as_str()),
            _ => None,
        })
    }
}

// ─── Industry ───────────────────────────────────────────────────────────────

/// Placeholder industry ids that score as non-specific in the readiness gate.
const PLACEHOLDER_INDUSTRIES: [&str; 2] = ["other", "general"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryContext {
    pub id: String,
    #[serde(default)]
    pub sub_industry: Option<String>,
}

impl IndustryContext {
    /// Whether the selection names a real industry rather than a placeholder
    /// default.
    pub fn is_specific(&self) -> bool {
        let id = self.id.trim();
        !id.is_empty()
            && !PLACEHOLDER_INDUSTRIES
                .iter()
                .any(|p| id.eq_ignore_ascii_case(p))
    }
}

// ─── Analytics ──────────────────────────────────────────────────────────────

/// Append-only record of one pipeline run; never read back by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub id: String,
    pub organization_id: String,
    pub brief: String,
    pub strategy: Strategy,
    pub content: String,
    pub context_summary: String,
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
}
