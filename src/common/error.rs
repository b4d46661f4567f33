//! Error types for the API test runner
//!
//! Every variant here is fatal: it ends the run before (or instead of)
//! sending further requests. Per-request network and body-read failures are
//! not errors at this level; they are reported as
//! [`Outcome`](crate::testing::Outcome) values and the run moves on.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the API test runner
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // === Request Errors ===
    #[error("Failed to serialize request body for test case '{name}': {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a config read error for the given path
    pub fn config_read(path: &Path, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a config parse error for the given path
    pub fn config_parse(path: &Path, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: path.display().to_string(),
            source,
        }
    }
}
