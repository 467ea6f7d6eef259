use crate::error::LlmwlError;
use crate::wordlist::MaskCatalog;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_RUNNER: &str = "ollama";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;
pub const MAX_ITERATIONS: u32 = 100;
pub const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// Static settings shared by every run of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub api_url: String,
    pub default_model: String,
    pub runner_program: String,
    pub timeout_seconds: u64,
    pub mask_catalog: MaskCatalog,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            runner_program: DEFAULT_RUNNER.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            mask_catalog: MaskCatalog::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_runner_program(mut self, program: impl Into<String>) -> Self {
        self.runner_program = program.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_mask_catalog(mut self, catalog: MaskCatalog) -> Self {
        self.mask_catalog = catalog;
        self
    }

    pub fn validate(&self) -> Result<(), LlmwlError> {
        if self.api_url.trim().is_empty() {
            return Err(LlmwlError::ConfigError("API URL cannot be empty".to_string()));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(LlmwlError::ConfigError(format!(
                "API URL must use http or https: {}",
                self.api_url
            )));
        }

        if self.runner_program.trim().is_empty() {
            return Err(LlmwlError::ConfigError(
                "Local runner program cannot be empty".to_string(),
            ));
        }

        if !(1..=MAX_TIMEOUT_SECONDS).contains(&self.timeout_seconds) {
            return Err(LlmwlError::ConfigError(format!(
                "Timeout must be between 1 and {} seconds",
                MAX_TIMEOUT_SECONDS
            )));
        }

        Ok(())
    }
}
