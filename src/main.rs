use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cpee_steps::cli::{self, Cli};
use cpee_steps::config::Config;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CPEE_STEPS_LOG";

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    init_tracing(config.log_filter.as_deref());

    if let Err(e) = cli::run(cli, &config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `CPEE_STEPS_LOG`, then config, then `warn`.
fn init_tracing(default_filter: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or("warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
