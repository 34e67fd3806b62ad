mod memory;
mod traits;
pub mod types;

pub use memory::MemoryStore;
pub use traits::KnowledgeStore;
pub use types::{
    BrandEssence, BrandIdentity, DesignTokens, GenerationRecord, IdentitySource, IndustryContext,
    KnowledgeCategory, KnowledgeFragment, ProductFacts, TokenPalette, TokenTypography,
    UploadedKnowledge, VisualIdentity,
};
