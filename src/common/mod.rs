//! Common utilities shared across the runner

pub mod error;

pub use error::{Error, Result};
