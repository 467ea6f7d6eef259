use crate::error::LlmwlError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Substitution point inside a mask template.
pub const PLACEHOLDER: &str = "{word}";

/// Templates offered when no catalog is configured.
pub const DEFAULT_MASKS: &[&str] = &[
    "{word}123",
    "123{word}",
    "{word}@2025",
    "{word}!",
    "!{word}",
    "{word}#1",
    "{word}_pass",
    "pass_{word}",
];

/// A template with exactly one `{word}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaskTemplate {
    prefix: String,
    suffix: String,
}

impl MaskTemplate {
    pub fn parse(template: &str) -> Result<Self, LlmwlError> {
        match template.split_once(PLACEHOLDER) {
            Some((prefix, suffix)) if !suffix.contains(PLACEHOLDER) => Ok(Self {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => Err(LlmwlError::InvalidMask {
                template: template.to_string(),
                reason: format!(
                    "expected exactly one {} placeholder, found {}",
                    PLACEHOLDER,
                    template.matches(PLACEHOLDER).count()
                ),
            }),
        }
    }

    pub fn apply(&self, word: &str) -> String {
        let mut derived = String::with_capacity(self.prefix.len() + word.len() + self.suffix.len());
        derived.push_str(&self.prefix);
        derived.push_str(word);
        derived.push_str(&self.suffix);
        derived
    }

    pub fn as_template(&self) -> String {
        format!("{}{}{}", self.prefix, PLACEHOLDER, self.suffix)
    }
}

impl fmt::Display for MaskTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, PLACEHOLDER, self.suffix)
    }
}

impl TryFrom<String> for MaskTemplate {
    type Error = LlmwlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MaskTemplate> for String {
    fn from(mask: MaskTemplate) -> Self {
        mask.as_template()
    }
}

/// The fixed set of templates a run may select from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskCatalog {
    templates: Vec<MaskTemplate>,
}

impl MaskCatalog {
    pub fn new<S: AsRef<str>>(templates: &[S]) -> Result<Self, LlmwlError> {
        let templates = templates
            .iter()
            .map(|t| MaskTemplate::parse(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[MaskTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Resolve user-selected templates against the catalog, keeping selection
    /// order and dropping repeats.
    pub fn select<S: AsRef<str>>(&self, selection: &[S]) -> Result<Vec<MaskTemplate>, LlmwlError> {
        let mut selected: Vec<MaskTemplate> = Vec::with_capacity(selection.len());

        for raw in selection {
            let mask = MaskTemplate::parse(raw.as_ref())?;
            if !self.templates.contains(&mask) {
                return Err(LlmwlError::InvalidMask {
                    template: raw.as_ref().to_string(),
                    reason: "not in the mask catalog (see --list-masks)".to_string(),
                });
            }
            if !selected.contains(&mask) {
                selected.push(mask);
            }
        }

        Ok(selected)
    }
}

impl Default for MaskCatalog {
    fn default() -> Self {
        Self {
            templates: DEFAULT_MASKS
                .iter()
                .filter_map(|t| MaskTemplate::parse(t).ok())
                .collect(),
        }
    }
}

pub struct MaskExpander;

impl MaskExpander {
    /// Every (word, mask) pair, word-major.
    pub fn expand(words: &[String], masks: &[MaskTemplate]) -> Vec<String> {
        words
            .iter()
            .flat_map(|word| masks.iter().map(move |mask| mask.apply(word)))
            .collect()
    }

    /// Append the expansion to `words`, returning how many entries were added.
    pub fn extend(words: &mut Vec<String>, masks: &[MaskTemplate]) -> usize {
        if masks.is_empty() {
            return 0;
        }
        let derived = Self::expand(words, masks);
        let added = derived.len();
        words.extend(derived);
        added
    }
}
