use std::process::ExitCode;

use iss_flyover::config::Config;
use iss_flyover::lookup::LookupClient;
use iss_flyover::{logging, report};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.log_level);

    let client = match LookupClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Startup failed: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match client.next_passes().await {
        Ok(passes) => {
            report::print_passes(&passes);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Flyover lookup failed: {e}");
            ExitCode::FAILURE
        }
    }
}
