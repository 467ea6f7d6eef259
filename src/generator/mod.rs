// Generator module - LLM backends, prompt building, and source aggregation

pub mod aggregator;
pub mod llm_client;
pub mod orchestrator;
pub mod prompts;

pub use aggregator::SourceAggregator;
pub use llm_client::{
    create_backend, GenerationBackend, GenerationFuture, LocalRunnerClient, OllamaApiClient,
};
pub use orchestrator::GenerationOrchestrator;
pub use prompts::PromptTemplate;
