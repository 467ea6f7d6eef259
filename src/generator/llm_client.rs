use crate::config::PipelineConfig;
use crate::error::LlmwlError;
use crate::models::BackendKind;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use tokio::process::Command;

pub type GenerationFuture<'a> = Pin<Box<dyn Future<Output = Result<String, LlmwlError>> + Send + 'a>>;

/// Source of generated text: one prompt in, newline-separated candidates out.
pub trait GenerationBackend: Send + Sync {
    fn generate<'a>(&'a self, prompt: &'a str, model: &'a str) -> GenerationFuture<'a>;
    fn name(&self) -> &str;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Non-streaming client for an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaApiClient {
    http: reqwest::Client,
    api_url: String,
}

impl OllamaApiClient {
    pub fn new(api_url: impl Into<String>) -> Result<Self, LlmwlError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("llmwl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LlmwlError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }

    async fn send_generate_request(&self, prompt: &str, model: &str) -> Result<String, LlmwlError> {
        let body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(&self.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmwlError::generation(self.name(), format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmwlError::generation(self.name(), format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LlmwlError::generation(
                self.name(),
                format!("HTTP {}: {}", status, text.trim()),
            ));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| LlmwlError::generation(self.name(), format!("Invalid response: {}", e)))?;

        Ok(parsed.response.trim().to_string())
    }
}

impl GenerationBackend for OllamaApiClient {
    fn generate<'a>(&'a self, prompt: &'a str, model: &'a str) -> GenerationFuture<'a> {
        Box::pin(self.send_generate_request(prompt, model))
    }

    fn name(&self) -> &str {
        "api"
    }
}

/// Runs `<program> run <model> <prompt>` and captures stdout.
pub struct LocalRunnerClient {
    program: String,
}

impl LocalRunnerClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    async fn run_model(&self, prompt: &str, model: &str) -> Result<String, LlmwlError> {
        tracing::debug!(program = %self.program, model, "spawning local model runner");

        let output = Command::new(&self.program)
            .arg("run")
            .arg(model)
            .arg(prompt)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                LlmwlError::generation(
                    self.name(),
                    format!("Failed to start '{}': {}", self.program, e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LlmwlError::generation(
                self.name(),
                format!(
                    "'{} run {}' exited with {}: {}",
                    self.program,
                    model,
                    output.status,
                    stderr.trim()
                ),
            ));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            LlmwlError::generation(self.name(), format!("Runner produced non-UTF-8 output: {}", e))
        })?;

        Ok(stdout.trim().to_string())
    }
}

impl GenerationBackend for LocalRunnerClient {
    fn generate<'a>(&'a self, prompt: &'a str, model: &'a str) -> GenerationFuture<'a> {
        Box::pin(self.run_model(prompt, model))
    }

    fn name(&self) -> &str {
        "local"
    }
}

pub fn create_backend(
    kind: BackendKind,
    config: &PipelineConfig,
) -> Result<Box<dyn GenerationBackend>, LlmwlError> {
    match kind {
        BackendKind::Api => Ok(Box::new(OllamaApiClient::new(config.api_url.clone())?)),
        BackendKind::Local => Ok(Box::new(LocalRunnerClient::new(
            config.runner_program.clone(),
        ))),
    }
}
