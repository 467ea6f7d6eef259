use crate::config::MAX_ITERATIONS;
use crate::error::LlmwlError;
use crate::wordlist::MaskTemplate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Local model runner subprocess
    Local,
    /// Remote HTTP generation API
    Api,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Api => "api",
        }
    }
}

/// Inputs for a single wordlist run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub personal_data: Vec<String>,
    pub base_wordlist: Option<PathBuf>,
    pub masks: Vec<MaskTemplate>,
    pub iterations: u32,
    pub model: String,
    pub output_path: PathBuf,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            prompt: prompt.into(),
            personal_data: Vec::new(),
            base_wordlist: None,
            masks: Vec::new(),
            iterations: 1,
            model: model.into(),
            output_path: output_path.into(),
        }
    }

    pub fn with_personal_data(mut self, hints: Vec<String>) -> Self {
        self.personal_data = hints;
        self
    }

    pub fn with_base_wordlist(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_wordlist = Some(path.into());
        self
    }

    pub fn with_masks(mut self, masks: Vec<MaskTemplate>) -> Self {
        self.masks = masks;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Checks that must pass before any generation call is made.
    pub fn validate(&self) -> Result<(), LlmwlError> {
        if self.prompt.trim().is_empty() {
            return Err(LlmwlError::MissingRequiredInput { field: "prompt" });
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(LlmwlError::MissingRequiredInput {
                field: "output path",
            });
        }

        if !(1..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(LlmwlError::InvalidArguments(format!(
                "Iterations must be between 1 and {}",
                MAX_ITERATIONS
            )));
        }

        Ok(())
    }
}
