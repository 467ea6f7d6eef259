pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod pipeline;
pub mod wordlist;

pub use error::LlmwlError;

// Re-export commonly used types
pub use models::{BackendKind, GenerationRequest, PipelineStage, RunReport};

pub use config::PipelineConfig;
pub use pipeline::WordlistPipeline;
pub use wordlist::{MaskCatalog, MaskExpander, MaskTemplate, WordlistWriter};

pub use cli::CliHandler;
