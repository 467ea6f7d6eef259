pub mod report;
pub mod request;

pub use report::{PipelineStage, RunReport};
pub use request::{BackendKind, GenerationRequest};
