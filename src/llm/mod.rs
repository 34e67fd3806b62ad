// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod json;
pub mod traits;

// ── Provider implementations ────────────────────────────────────────────────
pub mod compatible;

pub use compatible::OpenAiCompatibleProvider;
pub use json::extract_json_object;
pub use traits::ModelProvider;
