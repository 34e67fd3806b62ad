mod stages;
mod styles;
mod techniques;

pub use stages::AwarenessStage;
pub use styles::{CopySquad, VisualSquad};
pub use techniques::{CopyTechnique, VisualTechnique};
