use crate::config::{
    PipelineConfig, DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_RUNNER, MAX_ITERATIONS,
    MAX_TIMEOUT_SECONDS,
};
use crate::error::LlmwlError;
use crate::generator::PromptTemplate;
use crate::models::{BackendKind, GenerationRequest};
use crate::wordlist::MaskTemplate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "llmwl")]
#[command(about = "Generate password wordlists from LLM suggestions, base lists, and masks")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Prompt describing the words to generate
    #[arg(short = 'p', long)]
    pub prompt: Option<String>,

    /// Personal data hints to include (comma-separated)
    #[arg(long, value_name = "HINTS")]
    pub data: Option<String>,

    /// Base wordlist merged into the output (one word per line)
    #[arg(short = 'b', long, value_name = "FILE")]
    pub base: Option<PathBuf>,

    /// Mask template to apply, e.g. "{word}123" (repeatable)
    #[arg(long = "mask", value_name = "TEMPLATE")]
    pub masks: Vec<String>,

    /// Apply every mask in the catalog
    #[arg(long, conflicts_with = "masks")]
    pub all_masks: bool,

    /// Number of generation rounds (1-100)
    #[arg(short = 'n', long, default_value = "1", value_parser = validate_iterations)]
    pub iterations: u32,

    /// Generation backend
    #[arg(long, value_enum, env = "LLMWL_BACKEND", default_value = "local")]
    pub backend: BackendKind,

    /// Model name passed to the backend
    #[arg(short = 'm', long, env = "LLMWL_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Generation API endpoint used by the api backend
    #[arg(long, env = "LLMWL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Program used by the local backend
    #[arg(long, env = "LLMWL_RUNNER", default_value = DEFAULT_RUNNER)]
    pub runner: String,

    /// Maximum time for a single generation call in seconds (1-3600)
    #[arg(short = 't', long, env = "LLMWL_TIMEOUT", default_value = "120", value_parser = validate_timeout)]
    pub timeout: u64,

    /// Output wordlist path (overwritten if present)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the mask catalog and exit
    #[arg(long)]
    pub list_masks: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including backend calls
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Only report errors
    #[arg(short = 'q', long, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<(), LlmwlError> {
        for mask in &self.masks {
            MaskTemplate::parse(mask)?;
        }

        Ok(())
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_api_url(self.api_url.clone())
            .with_runner_program(self.runner.clone())
            .with_timeout(self.timeout)
    }

    /// Build the run request; masks are resolved against the configured catalog.
    pub fn generation_request(&self, config: &PipelineConfig) -> Result<GenerationRequest, LlmwlError> {
        let masks = if self.all_masks {
            config.mask_catalog.templates().to_vec()
        } else {
            config.mask_catalog.select(&self.masks)?
        };

        let personal_data = self
            .data
            .as_deref()
            .map(PromptTemplate::parse_personal_data)
            .unwrap_or_default();

        let mut request = GenerationRequest::new(
            self.prompt.clone().unwrap_or_default(),
            self.model.clone(),
            self.output.clone().unwrap_or_default(),
        )
        .with_personal_data(personal_data)
        .with_masks(masks)
        .with_iterations(self.iterations);

        if let Some(ref base) = self.base {
            request = request.with_base_wordlist(base.clone());
        }

        Ok(request)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        std::env::var("NO_COLOR").is_err()
    }
}

fn validate_iterations(s: &str) -> Result<u32, String> {
    let iterations: u32 = s.parse().map_err(|_| "Iterations must be a number")?;

    if (1..=MAX_ITERATIONS).contains(&iterations) {
        Ok(iterations)
    } else {
        Err(format!("Iterations must be between 1 and {}", MAX_ITERATIONS))
    }
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse().map_err(|_| "Timeout must be a number")?;

    if (1..=MAX_TIMEOUT_SECONDS).contains(&timeout) {
        Ok(timeout)
    } else {
        Err(format!(
            "Timeout must be between 1 and {} seconds",
            MAX_TIMEOUT_SECONDS
        ))
    }
}
