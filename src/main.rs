use clap::Parser;
use llmwl::cli::{initialize_logging, Cli, CliHandler};
use std::process;

#[tokio::main]
async fn main() {
    // Help and version requests exit through clap with their own status
    let cli = Cli::try_parse().unwrap_or_else(|e| e.exit());

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e);
        process::exit(e.exit_code());
    }

    if let Err(e) = initialize_logging(&cli) {
        eprintln!("⚠️ {}", e);
    }

    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
