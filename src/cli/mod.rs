//! CLI entry point
//!
//! Loads the configuration, echoes it, and runs every test case against the
//! target service.

use std::io;
use std::path::Path;

use crate::common::Result;
use crate::testing::{self, Config, HttpExecutor};

/// Config file read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Base URL that route paths are appended to when none is given
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Load `config_path` and run all of its test cases against `base_url`
///
/// Fails before any request is sent if the file cannot be read or parsed.
pub async fn run(config_path: &Path, base_url: &str) -> Result<()> {
    let config = Config::load(config_path)?;
    tracing::debug!(path = %config_path.display(), "Loaded config");

    let mut stdout = io::stdout();
    testing::dump_config(&config, &mut stdout)?;

    let executor = HttpExecutor::new()?;
    testing::run(&config, base_url, &executor, &mut stdout).await
}
