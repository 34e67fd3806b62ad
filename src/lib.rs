#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod context;
pub mod editor;
pub mod error;
pub mod generator;
pub mod llm;
pub mod observability;
pub mod pipeline;
pub mod prompt;
pub mod readiness;
pub mod squads;
pub mod store;
pub mod strategy;

pub use config::{PipelineConfig, ReviewMode};
pub use context::ContextPackage;
pub use error::{PipelineError, SmithError};
pub use generator::StyleOverlay;
pub use pipeline::{ContentPipeline, GenerationOutcome, GenerationRequest, RunMetadata};
pub use readiness::{ReadinessResult, check_readiness};
pub use strategy::Strategy;
