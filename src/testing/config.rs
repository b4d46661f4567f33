//! Test configuration types
//!
//! Defines the data structures for deserializing the JSON route/test case
//! configuration.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

use crate::common::{Error, Result};

/// The complete configuration: route path (e.g. `/users`) to its test cases
///
/// Route iteration order is that of a hash map and carries no meaning.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(transparent)]
pub struct Config {
    pub routes: HashMap<String, RouteConfig>,
}

/// Configuration for a single route
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RouteConfig {
    /// Declared request parameters; informational only
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: Vec<HashMap<String, HashMap<String, Value>>>,
    /// Status codes the route is expected to answer with; informational only
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowed_http_status_codes: Vec<i64>,
    /// Inputs expected to succeed, run in order
    #[serde(default, deserialize_with = "null_as_default")]
    pub positive_test_cases: Vec<TestCase>,
    /// Inputs expected to be rejected, run in order after the positive ones
    #[serde(default, deserialize_with = "null_as_default")]
    pub negative_test_cases: Vec<TestCase>,
}

/// A single named request payload
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    /// Sent verbatim as the JSON request body
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Map<String, Value>,
    /// Expected output; not compared against the response
    #[serde(default, deserialize_with = "null_as_default")]
    pub output: String,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read(path).map_err(|e| Error::config_read(path, e))?;
        serde_json::from_slice(&content).map_err(|e| Error::config_parse(path, e))
    }

    /// Total number of test cases across all routes
    pub fn test_case_count(&self) -> usize {
        self.routes
            .values()
            .map(|r| r.positive_test_cases.len() + r.negative_test_cases.len())
            .sum()
    }
}
