//! API test runner
//!
//! Loads a JSON description of routes and their test cases, then POSTs each
//! test case's values to its route and reports the response.

mod config;
mod executor;
mod runner;

pub use config::*;
pub use executor::{request_body, Exchange, HttpExecutor, Outcome, RequestExecutor};
pub use runner::{dump_config, run};
