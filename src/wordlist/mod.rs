// Wordlist module - mask expansion, normalization, and output

pub mod mask;
pub mod writer;

pub use mask::{MaskCatalog, MaskExpander, MaskTemplate, DEFAULT_MASKS, PLACEHOLDER};
pub use writer::{deduplicate, WordlistWriter};

/// Split text into trimmed, non-empty lines.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
