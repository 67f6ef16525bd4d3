/*
 * breadcrumb.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Breadcrumbs and anchors.
//!
//! A breadcrumb is the lowercase path of keys leading to a node, each key
//! preceded by `-`: the leaf of `server.resources.limits` has the breadcrumb
//! `-server-resources-limits`. Anchors prefix a breadcrumb for use in links.

/// Breadcrumb of `key` under `parent`.
pub fn child_breadcrumb(parent: &str, key: &str) -> String {
    format!("{}-{}", parent, key.to_lowercase())
}

/// Renderer-facing anchor for a breadcrumb.
pub fn anchor(prefix: &str, breadcrumb: &str) -> String {
    format!("{}{}", prefix, breadcrumb)
}

/// Normalized form used to detect sibling keys that differ only in case or
/// separator characters.
pub fn collision_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
