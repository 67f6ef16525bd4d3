/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for building documentation trees.

use thiserror::Error;

/// Errors that abort a parse. No partial tree is ever returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not well-formed YAML.
    #[error("Decode error: {0}")]
    Decode(#[from] valuesdoc_yaml::Error),

    /// A built node violates a structural rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A sequence default could not be rendered inline.
    #[error("Cannot render default for {anchor}: {source}")]
    Serialization {
        anchor: String,
        #[source]
        source: SerializationError,
    },
}

/// A node failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error at {anchor}: {detail}")]
pub struct ValidationError {
    /// Anchor of the offending node.
    pub anchor: String,
    pub detail: String,
}

impl ValidationError {
    pub fn new(anchor: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            detail: detail.into(),
        }
    }
}

/// An element of a sequence has no inline (flow) rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct SerializationError {
    pub detail: String,
}

/// Result type for tree building.
pub type ParseResult<T> = Result<T, ParseError>;
