pub mod args;
pub mod logging;
pub mod reporter;

pub use args::Cli;
pub use logging::initialize_logging;
pub use reporter::ReportFormatter;

use crate::error::LlmwlError;
use crate::pipeline::WordlistPipeline;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, LlmwlError> {
        let config = self.cli.pipeline_config();
        let formatter = ReportFormatter::new(&self.cli);

        if self.cli.list_masks {
            println!("{}", formatter.format_mask_catalog(&config.mask_catalog));
            return Ok(0);
        }

        // Step 1: Resolve masks and build the request
        let request = self.cli.generation_request(&config)?;
        request.validate()?;

        tracing::debug!(
            backend = self.cli.backend.as_str(),
            model = %request.model,
            iterations = request.iterations,
            masks = request.masks.len(),
            "run requested"
        );

        // Step 2: Hand the run to a background task and wait for it
        let pipeline = WordlistPipeline::with_backend_kind(config, self.cli.backend)?;
        let report = pipeline
            .spawn(request)
            .await
            .map_err(|e| LlmwlError::TaskFailed(e.to_string()))??;

        // Step 3: Report
        println!("{}", formatter.format_run_report(&report)?);

        Ok(0)
    }
}
