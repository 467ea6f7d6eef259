use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    Idle,
    Generating,
    Aggregating,
    Masking,
    Writing,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "idle",
            PipelineStage::Generating => "generating",
            PipelineStage::Aggregating => "aggregating",
            PipelineStage::Masking => "masking",
            PipelineStage::Writing => "writing",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub backend: String,
    pub model: String,
    pub iterations: u32,
    pub llm_words: usize,
    pub base_words: usize,
    pub masks_applied: usize,
    pub mask_derived_words: usize,
    pub unique_entries: usize,
    pub duration_ms: u64,
    pub stages: Vec<PipelineStage>,
}

impl RunReport {
    pub fn total_candidates(&self) -> usize {
        self.llm_words + self.base_words + self.mask_derived_words
    }

    pub fn duplicates_removed(&self) -> usize {
        self.total_candidates().saturating_sub(self.unique_entries)
    }
}
