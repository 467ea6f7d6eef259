use crate::error::LlmwlError;
use crate::wordlist::normalize_lines;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Merges LLM output with an optional base wordlist.
#[derive(Debug, Default)]
pub struct SourceAggregator {
    base_words: Vec<String>,
}

impl SourceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an aggregator from an optional base wordlist path.
    ///
    /// A path that does not exist contributes nothing. A path that exists but
    /// cannot be read as UTF-8 text is an error.
    pub fn with_base_wordlist(path: Option<&Path>) -> Result<Self, LlmwlError> {
        let base_words = match path {
            Some(path) => load_base_wordlist(path)?,
            None => Vec::new(),
        };
        Ok(Self { base_words })
    }

    pub fn base_words(&self) -> &[String] {
        &self.base_words
    }

    /// LLM words first, then base words.
    pub fn aggregate(&self, llm_words: Vec<String>) -> Vec<String> {
        let mut working = llm_words;
        working.extend(self.base_words.iter().cloned());
        working
    }
}

pub fn load_base_wordlist(path: &Path) -> Result<Vec<String>, LlmwlError> {
    if path.as_os_str().is_empty() {
        return Ok(Vec::new());
    }

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let words = normalize_lines(&content);
            tracing::info!("Loaded {} words from base file.", words.len());
            Ok(words)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "base wordlist not found, skipping");
            Ok(Vec::new())
        }
        Err(source) => Err(LlmwlError::FileReadFailure {
            path: PathBuf::from(path),
            source,
        }),
    }
}
