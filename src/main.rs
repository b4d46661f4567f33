//! API Test Runner CLI
//!
//! Sends the positive and negative test cases from a JSON configuration
//! file to an HTTP service and prints each request and response.

use std::path::PathBuf;

use apitest::cli::{self, DEFAULT_BASE_URL, DEFAULT_CONFIG_PATH};
use clap::Parser;

#[derive(Parser)]
#[command(name = "apitest", about = "Configuration-driven HTTP API test runner")]
#[command(version, long_about = None)]
struct Cli {
    /// Path to the JSON test configuration
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Base URL that each route path is appended to
    #[arg(long, env = "APITEST_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only the report
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("apitest=info,warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli::run(&cli.config, &cli.base_url).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
