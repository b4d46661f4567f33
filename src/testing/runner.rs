//! Test runner implementation
//!
//! Walks every route in a [`Config`] and runs its positive then negative
//! test cases, one request at a time, writing a plain-text report.

use std::io::{self, Write};

use colored::Colorize;

use crate::common::Result;

use super::config::{Config, TestCase};
use super::executor::{Outcome, RequestExecutor};

const BANNER: &str = "##################################################";

/// Write the parsed configuration to `out` before anything runs
pub fn dump_config<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER.dimmed())?;
    writeln!(out, "{}", "json config :".cyan())?;
    serde_json::to_writer_pretty(&mut *out, config).map_err(io::Error::from)?;
    writeln!(out)?;
    writeln!(out, "{}", BANNER.dimmed())?;
    writeln!(out)?;
    Ok(())
}

/// Run every test case in `config` against `base_url`
///
/// The URL for a route is `base_url` with the route path appended. Send and
/// read failures are logged and skipped; only fatal errors end the run.
pub async fn run<E, W>(config: &Config, base_url: &str, executor: &E, out: &mut W) -> Result<()>
where
    E: RequestExecutor + ?Sized,
    W: Write,
{
    tracing::info!(
        routes = config.routes.len(),
        test_cases = config.test_case_count(),
        base_url,
        "Starting run"
    );

    for (path, route) in &config.routes {
        let url = format!("{}{}", base_url, path);

        writeln!(out, "{} {}", "Testing route:".blue().bold(), url.white().bold())?;

        writeln!(out, "{}", "Running Positive Test Cases...".green())?;
        for case in &route.positive_test_cases {
            run_case(executor, &url, case, out).await?;
        }

        writeln!(out, "{}", "Running Negative Test Cases...".yellow())?;
        for case in &route.negative_test_cases {
            run_case(executor, &url, case, out).await?;
        }
    }

    Ok(())
}

/// Execute one test case and report its outcome
async fn run_case<E, W>(executor: &E, url: &str, case: &TestCase, out: &mut W) -> Result<()>
where
    E: RequestExecutor + ?Sized,
    W: Write,
{
    match executor.execute(url, case).await? {
        Outcome::Completed(exchange) => {
            writeln!(out, "Test Case: {}", case.name)?;
            writeln!(out, "Request Body: {}", exchange.request_body)?;
            writeln!(out, "Response Code: {}", exchange.status)?;
            writeln!(out, "Response Body: {}", exchange.response_body)?;
            writeln!(out)?;
        }
        Outcome::SendFailed(error) => {
            tracing::warn!(test_case = %case.name, url, "Error in test case '{}': {}", case.name, error);
        }
        Outcome::ReadFailed(error) => {
            tracing::warn!(
                test_case = %case.name,
                url,
                "Failed to read response body for test case '{}': {}",
                case.name,
                error
            );
        }
    }
    Ok(())
}
