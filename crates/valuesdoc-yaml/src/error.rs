//! Error types for YAML decoding.

use crate::SourceInfo;
use thiserror::Error;

/// Result type alias for valuesdoc-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding YAML into raw nodes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// YAML syntax error
    #[error("{}", format_with_location(.message, .location))]
    ParseError {
        message: String,
        location: Option<SourceInfo>,
    },

    /// The event stream did not describe a well-formed tree
    #[error("invalid YAML structure: {message}")]
    InvalidStructure { message: String },
}

fn format_with_location(message: &str, location: &Option<SourceInfo>) -> String {
    match location {
        Some(loc) => format!("parse error at line {} column {}: {}", loc.line, loc.col, message),
        None => format!("parse error: {}", message),
    }
}
