/*
 * comment.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Comment cleaning and annotation extraction.
//!
//! A key's head comment is processed in two passes. The first strips the
//! comment marker from every line exactly once and records which lines sit
//! inside fenced code examples. The second recognizes annotations on the
//! remaining lines and assembles the display text. Fenced lines are copied
//! verbatim, so a documented example such as
//!
//! ````text
//! # ```yaml
//! # # @type: not-an-annotation
//! # image: "consul:1.5.0"
//! # ```
//! ````
//!
//! keeps its own `#` lines and never contributes annotations.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Comment marker plus at most one following space.
static COMMENT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\S\n]*#[^\S\n]?").unwrap());

/// An annotation line, e.g. `@type: array<string>`.
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*@(type|default|recurse):[^\S\n]*(.*?)\s*$").unwrap());

const FENCE: &str = "```";

/// Directives extracted from a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    /// `@type:` value.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_override: Option<String>,

    /// `@default:` value.
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_override: Option<String>,

    /// `@recurse:` value, when it is `true` or `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurse: Option<bool>,

    /// The last `@recurse:` value as written.
    #[serde(skip)]
    pub recurse_literal: Option<String>,
}

impl Annotations {
    /// True when `@recurse: false` was given.
    pub fn suppresses_recursion(&self) -> bool {
        self.recurse == Some(false)
    }

    fn apply(&mut self, name: &str, value: &str) {
        let value = value.to_string();
        match name {
            "type" => self.type_override = Some(value),
            "default" => self.default_override = Some(value),
            "recurse" => {
                self.recurse = parse_bool(&value);
                self.recurse_literal = Some(value);
            }
            _ => {}
        }
    }
}

/// Display text and annotations of one comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedComment {
    pub display: String,
    pub annotations: Annotations,
}

struct CommentLine<'a> {
    text: &'a str,
    fenced: bool,
}

/// Clean a raw comment block and pull out its annotations.
///
/// When an annotation occurs more than once the last occurrence wins.
///
/// ```rust
/// use valuesdoc::comment::extract_comment;
///
/// let extracted = extract_comment("# Replica count.\n#\n# @type: integer\n# @type: int");
/// assert_eq!(extracted.display, "Replica count.");
/// assert_eq!(extracted.annotations.type_override.as_deref(), Some("int"));
/// ```
pub fn extract_comment(raw: &str) -> ExtractedComment {
    let mut annotations = Annotations::default();
    let mut display: Vec<&str> = Vec::new();

    for line in strip_markers(raw) {
        if !line.fenced {
            if let Some(caps) = ANNOTATION.captures(line.text) {
                annotations.apply(&caps[1], caps.get(2).map_or("", |m| m.as_str()));
                continue;
            }
        }
        display.push(line.text);
    }

    while display.last().is_some_and(|line| line.trim().is_empty()) {
        display.pop();
    }

    ExtractedComment {
        display: display.join("\n"),
        annotations,
    }
}

/// Pass one: remove the outer comment marker and delimit fenced regions.
/// Fence delimiter lines count as fenced.
fn strip_markers(raw: &str) -> Vec<CommentLine<'_>> {
    let mut in_fence = false;
    raw.lines()
        .map(|line| {
            let text = match COMMENT_PREFIX.find(line) {
                Some(marker) => &line[marker.end()..],
                None => line,
            };
            let is_fence = text.trim_start().starts_with(FENCE);
            let fenced = in_fence || is_fence;
            if is_fence {
                in_fence = !in_fence;
            }
            CommentLine { text, fenced }
        })
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
