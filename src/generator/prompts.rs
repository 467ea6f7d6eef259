pub struct PromptTemplate;

impl PromptTemplate {
    /// Split a comma-separated hint string into trimmed, non-empty entries.
    pub fn parse_personal_data(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|hint| !hint.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Append personal-data hints to the prompt as a trailing sentence.
    pub fn build_generation_prompt(prompt: &str, personal_data: &[String]) -> String {
        let prompt = prompt.trim();
        if personal_data.is_empty() {
            return prompt.to_string();
        }

        format!(
            "{}\nInclude personal data: {}.",
            prompt,
            personal_data.join(", ")
        )
    }
}
