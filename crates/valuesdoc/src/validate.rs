/*
 * validate.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Structural validation of built nodes.

use std::collections::HashMap;

use crate::breadcrumb::collision_key;
use crate::error::ValidationError;
use crate::node::DocNode;
use crate::options::ParseOptions;

/// Check a node before it is attached to its parent.
pub fn validate(node: &DocNode, options: &ParseOptions) -> Result<(), ValidationError> {
    let fail = |detail: String| Err(ValidationError::new(node.anchor.clone(), detail));

    if node.is_root() {
        return Ok(());
    }

    if node.key.is_empty() {
        return fail("key must be a non-empty scalar".into());
    }

    if !node.kind_tag.is_recognized() {
        return fail(format!("unrecognized value tag {}", node.kind_tag));
    }

    let annotations = &node.annotations;
    if let (None, Some(literal)) = (annotations.recurse, &annotations.recurse_literal) {
        return fail(format!(
            "@recurse must be true or false, found {:?}",
            literal
        ));
    }

    if annotations.suppresses_recursion() {
        if node.default.is_some() || !node.children.is_empty() {
            return fail("@recurse: false node must not have a default or children".into());
        }
        let structural = annotations
            .type_override
            .as_deref()
            .is_some_and(is_structural_type);
        if options.require_recurse_explanation && structural && node.comment.trim().is_empty() {
            return fail(format!(
                "@recurse: false hides the structure of @type {}; describe it in the comment",
                annotations.type_override.as_deref().unwrap_or_default()
            ));
        }
        return Ok(());
    }

    match (node.default.is_some(), node.children.is_empty()) {
        (true, false) => fail("node has both a default and children".into()),
        (false, true) => fail("node has neither a default nor children".into()),
        _ => Ok(()),
    }
}

/// Reject sibling keys that differ only in case or separator characters.
///
/// Keys are compared by [`collision_key`], which also drops `-`, `_`, `.`
/// and spaces, so `nodePort` and `node_port` collide even though their
/// anchors (`v-nodeport`, `v-node_port`) differ.
pub fn validate_siblings(nodes: &[DocNode], options: &ParseOptions) -> Result<(), ValidationError> {
    if !options.check_sibling_collisions {
        return Ok(());
    }

    let mut seen: HashMap<String, &str> = HashMap::new();
    for node in nodes {
        if let Some(previous) = seen.insert(collision_key(&node.key), &node.key) {
            return Err(ValidationError::new(
                node.anchor.clone(),
                format!("key {:?} collides with sibling key {:?}", node.key, previous),
            ));
        }
    }
    Ok(())
}

/// Types that describe nested structure: `map`, `object`, `array<...>`.
fn is_structural_type(type_name: &str) -> bool {
    let type_name = type_name.trim().to_lowercase();
    type_name.starts_with("map") || type_name.starts_with("object") || type_name.starts_with("array")
}
