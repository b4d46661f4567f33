//! API Test Runner - Configuration-driven HTTP API testing
//!
//! This library reads a JSON file mapping route paths to positive and
//! negative test cases and sends each case as a JSON POST request.

pub mod cli;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use testing::{Config, RouteConfig, TestCase};
