/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tree builder configuration.

use serde::{Deserialize, Serialize};

use crate::breadcrumb;

/// Options controlling how a tree is built and validated.
///
/// Deserializable from kebab-case configuration, every field optional:
///
/// ```toml
/// anchor-prefix = "v"
/// check-sibling-collisions = true
/// require-recurse-explanation = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParseOptions {
    /// Prefix prepended to breadcrumbs to form anchors.
    pub anchor_prefix: String,

    /// Reject sibling keys whose anchors would collide.
    pub check_sibling_collisions: bool,

    /// Require a comment on `@recurse: false` nodes whose `@type` describes
    /// nested structure.
    pub require_recurse_explanation: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            anchor_prefix: "v".to_string(),
            check_sibling_collisions: true,
            require_recurse_explanation: true,
        }
    }
}

impl ParseOptions {
    /// Anchor for a breadcrumb under these options.
    pub fn anchor(&self, breadcrumb: &str) -> String {
        breadcrumb::anchor(&self.anchor_prefix, breadcrumb)
    }
}
