use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// When the editorial reviewer calls the model.
///
/// `Always` keeps the model review as a safety net even when the local scan
/// is clean; `OnViolation` skips the second model call on a clean scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    #[default]
    Always,
    OnViolation,
}

/// Tuning knobs for one pipeline instance.
///
/// All fields have serde defaults so a partial TOML file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Model identifier passed through to the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for content generation and review.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Lower temperature for the strategy-routing call, which expects JSON.
    #[serde(default = "default_router_temperature")]
    pub router_temperature: f64,

    /// Upper bound on completion size requested from the provider.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default)]
    pub review_mode: ReviewMode,
}

fn default_model() -> String {
    "gpt-4o-mini".into()
}

const fn default_temperature() -> f64 {
    0.7
}

const fn default_router_temperature() -> f64 {
    0.2
}

const fn default_max_output_tokens() -> u32 {
    1024
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            router_temperature: default_router_temperature(),
            max_output_tokens: default_max_output_tokens(),
            review_mode: ReviewMode::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Ok(Self::from_toml_str(&contents)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Validation(format!(
                "temperature {} out of range 0.0..=2.0",
                self.temperature
            )));
        }
        if !(0.0..=2.0).contains(&self.router_temperature) {
            return Err(ConfigError::Validation(format!(
                "router_temperature {} out of range 0.0..=2.0",
                self.router_temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(ConfigError::Validation(
                "max_output_tokens must be positive".into(),
            ));
        }
        Ok(())
    }
}
