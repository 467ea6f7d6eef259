use crate::cli::args::Cli;
use crate::error::LlmwlError;
use crate::models::RunReport;
use crate::wordlist::MaskCatalog;

pub struct ReportFormatter {
    use_colors: bool,
    verbose: bool,
    json: bool,
}

impl ReportFormatter {
    pub fn new(cli: &Cli) -> Self {
        Self {
            use_colors: cli.should_use_color(),
            verbose: cli.is_verbose(),
            json: cli.json,
        }
    }

    pub fn format_run_report(&self, report: &RunReport) -> Result<String, LlmwlError> {
        if self.json {
            return serde_json::to_string_pretty(report)
                .map_err(|e| LlmwlError::ConfigError(format!("Failed to serialize report: {}", e)));
        }

        let mut output = self.highlight(&format!(
            "Wordlist generated with {} unique entries.",
            report.unique_entries
        ));
        output.push_str(&format!("\nSaved to: {}", report.output_path.display()));

        if self.verbose {
            output.push_str(&format!(
                "\n\nBackend: {} (model {}, {} iteration{})",
                report.backend,
                report.model,
                report.iterations,
                if report.iterations == 1 { "" } else { "s" }
            ));
            output.push_str(&format!("\nLLM words: {}", report.llm_words));
            output.push_str(&format!("\nBase words: {}", report.base_words));
            output.push_str(&format!(
                "\nMask-derived words: {} ({} masks)",
                report.mask_derived_words, report.masks_applied
            ));
            output.push_str(&format!("\nDuplicates removed: {}", report.duplicates_removed()));
            output.push_str(&format!("\nElapsed: {}ms", report.duration_ms));
        }

        Ok(output)
    }

    pub fn format_mask_catalog(&self, catalog: &MaskCatalog) -> String {
        catalog
            .templates()
            .iter()
            .enumerate()
            .map(|(i, mask)| format!("{:>2}. {}", i + 1, mask))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn highlight(&self, text: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[32m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }
}
