use crate::config::PipelineConfig;
use crate::error::LlmwlError;
use crate::generator::{
    create_backend, GenerationBackend, GenerationOrchestrator, PromptTemplate, SourceAggregator,
};
use crate::models::{BackendKind, GenerationRequest, PipelineStage, RunReport};
use crate::wordlist::{MaskExpander, WordlistWriter};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;

/// Linear run: generate, aggregate, mask, write.
///
/// A pipeline value is consumed by its run, so no stage is ever re-entered.
pub struct WordlistPipeline {
    config: PipelineConfig,
    orchestrator: GenerationOrchestrator,
    stage: PipelineStage,
    visited: Vec<PipelineStage>,
}

impl WordlistPipeline {
    pub fn new(config: PipelineConfig, backend: Arc<dyn GenerationBackend>) -> Result<Self, LlmwlError> {
        config.validate()?;
        let orchestrator = GenerationOrchestrator::new(backend, config.timeout_seconds);

        Ok(Self {
            config,
            orchestrator,
            stage: PipelineStage::Idle,
            visited: Vec::new(),
        })
    }

    pub fn with_backend_kind(config: PipelineConfig, kind: BackendKind) -> Result<Self, LlmwlError> {
        let backend = create_backend(kind, &config)?;
        Self::new(config, backend.into())
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Hand the run to the runtime as a background task.
    pub fn spawn(self, request: GenerationRequest) -> JoinHandle<Result<RunReport, LlmwlError>> {
        tokio::spawn(self.run(request))
    }

    pub async fn run(mut self, request: GenerationRequest) -> Result<RunReport, LlmwlError> {
        match self.execute(&request).await {
            Ok(report) => Ok(report),
            Err(e) => {
                let failed_in = self.stage;
                self.transition(PipelineStage::Failed);
                tracing::error!(stage = %failed_in, "Error: {}", e);
                Err(e)
            }
        }
    }

    async fn execute(&mut self, request: &GenerationRequest) -> Result<RunReport, LlmwlError> {
        let started = Instant::now();

        request.validate()?;
        self.check_masks_in_catalog(request)?;

        tracing::info!("Starting generation...");

        // Read the base list up front so a bad file costs no backend calls.
        let aggregator = SourceAggregator::with_base_wordlist(request.base_wordlist.as_deref())?;

        let prompt = PromptTemplate::build_generation_prompt(&request.prompt, &request.personal_data);
        if !request.personal_data.is_empty() {
            tracing::info!("Added structured data: {:?}", request.personal_data);
        }

        let model = match request.model.trim() {
            "" => self.config.default_model.clone(),
            named => named.to_string(),
        };

        self.transition(PipelineStage::Generating);
        let llm_words = self
            .orchestrator
            .generate_batches(&prompt, &model, request.iterations)
            .await?;
        let llm_count = llm_words.len();

        self.transition(PipelineStage::Aggregating);
        let mut working = aggregator.aggregate(llm_words);

        let mut mask_derived = 0;
        if !request.masks.is_empty() {
            self.transition(PipelineStage::Masking);
            let source_count = working.len();
            mask_derived = MaskExpander::extend(&mut working, &request.masks);
            tracing::info!(
                "Applied {} mask patterns to {} words.",
                request.masks.len(),
                source_count
            );
        }

        self.transition(PipelineStage::Writing);
        let writer = WordlistWriter::new(&request.output_path);
        let unique_entries = writer.write(working)?;
        tracing::info!(
            "Saved {} unique entries to {}",
            unique_entries,
            request.output_path.display()
        );

        self.transition(PipelineStage::Done);

        Ok(RunReport {
            output_path: request.output_path.clone(),
            backend: self.orchestrator.backend_name().to_string(),
            model,
            iterations: request.iterations,
            llm_words: llm_count,
            base_words: aggregator.base_words().len(),
            masks_applied: request.masks.len(),
            mask_derived_words: mask_derived,
            unique_entries,
            duration_ms: started.elapsed().as_millis() as u64,
            stages: self.visited.clone(),
        })
    }

    fn check_masks_in_catalog(&self, request: &GenerationRequest) -> Result<(), LlmwlError> {
        let catalog = self.config.mask_catalog.templates();
        match request.masks.iter().find(|mask| !catalog.contains(mask)) {
            Some(mask) => Err(LlmwlError::InvalidMask {
                template: mask.to_string(),
                reason: "not in the mask catalog".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn transition(&mut self, next: PipelineStage) {
        tracing::debug!(from = %self.stage, to = %next, "pipeline stage");
        self.stage = next;
        self.visited.push(next);
    }
}
