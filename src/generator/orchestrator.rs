use crate::error::LlmwlError;
use crate::generator::llm_client::GenerationBackend;
use crate::wordlist::normalize_lines;
use std::sync::Arc;
use tokio::time::{timeout, Duration};

/// Drives repeated, strictly sequential generation calls.
pub struct GenerationOrchestrator {
    backend: Arc<dyn GenerationBackend>,
    call_timeout: Duration,
}

impl GenerationOrchestrator {
    pub fn new(backend: Arc<dyn GenerationBackend>, timeout_seconds: u64) -> Self {
        Self {
            backend,
            call_timeout: Duration::from_secs(timeout_seconds),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Call the backend `iterations` times and collect every candidate line.
    ///
    /// The first failing call aborts the whole batch; nothing gathered so far
    /// is returned.
    pub async fn generate_batches(
        &self,
        prompt: &str,
        model: &str,
        iterations: u32,
    ) -> Result<Vec<String>, LlmwlError> {
        if iterations == 0 {
            return Err(LlmwlError::InvalidArguments(
                "Iteration count must be at least 1".to_string(),
            ));
        }

        let mut words = Vec::new();

        for batch in 1..=iterations {
            tracing::info!("Batch {}/{}...", batch, iterations);

            let raw = self.execute_single_generation(prompt, model).await?;
            let candidates = normalize_lines(&raw);

            tracing::debug!(batch, candidates = candidates.len(), "batch complete");
            words.extend(candidates);
        }

        Ok(words)
    }

    async fn execute_single_generation(&self, prompt: &str, model: &str) -> Result<String, LlmwlError> {
        timeout(self.call_timeout, self.backend.generate(prompt, model))
            .await
            .map_err(|_| LlmwlError::GenerationTimeout {
                timeout: self.call_timeout.as_secs(),
            })?
    }
}
