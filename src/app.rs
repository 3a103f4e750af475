use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crate::infrastructure::config::{AppConfig, ConfigService};
use crate::interfaces::cli::Outcome;

/// Logs go to stderr; stdout is reserved for tool output.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Shared entry point for every binary: load config, install logging, then
/// run `tool` against locked stdin/stdout.
pub fn run<F>(tool: F) -> ExitCode
where
    F: FnOnce(&AppConfig, &mut dyn BufRead, &mut dyn Write) -> io::Result<Outcome>,
{
    let config = match ConfigService::load() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&AppConfig::default().log_filter);
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let result = tool(&config, &mut input, &mut output).and_then(|outcome| {
        output.flush()?;
        Ok(outcome)
    });

    match result {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to write output");
            ExitCode::FAILURE
        }
    }
}
