/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The documentation tree.

use serde::Serialize;
use valuesdoc_yaml::tags;

use crate::breadcrumb;
use crate::comment::Annotations;

/// Scalar text that defers the displayed default to `@default`.
pub const DEFAULT_SENTINEL: &str = "-";

/// Semantic kind of a node's value, derived from the raw node's tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KindTag {
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Sequence,
    Map,
    /// Any tag outside the recognized set, as written.
    Unrecognized(String),
}

impl KindTag {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            tags::STR => KindTag::String,
            tags::INT => KindTag::Integer,
            tags::FLOAT => KindTag::Float,
            tags::BOOL => KindTag::Boolean,
            tags::NULL => KindTag::Null,
            tags::SEQ => KindTag::Sequence,
            tags::MAP => KindTag::Map,
            other => KindTag::Unrecognized(other.to_string()),
        }
    }

    /// Type name as shown in rendered docs.
    pub fn name(&self) -> &str {
        match self {
            KindTag::String => "string",
            KindTag::Integer => "integer",
            KindTag::Float => "float",
            KindTag::Boolean => "boolean",
            KindTag::Null => "null",
            KindTag::Sequence => "array",
            KindTag::Map => "map",
            KindTag::Unrecognized(tag) => tag.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, KindTag::Unrecognized(_))
    }
}

impl std::fmt::Display for KindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the documentation tree.
///
/// Trees are built by [`crate::parse`] and are not modified afterwards. Each
/// node owns its children; the only link back to the ancestors is the
/// `parent_breadcrumb` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocNode {
    /// Field name. Empty only for the root.
    pub key: String,

    /// Nesting marker: `0` for the root, `1` for top-level fields, `+2` per
    /// nested level.
    pub column: usize,

    pub kind_tag: KindTag,

    /// Literal default as written, or the inline form of a sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Cleaned comment text.
    pub comment: String,

    pub annotations: Annotations,

    pub parent_breadcrumb: String,

    /// True when this node was promoted out of a sequence element.
    pub parent_was_map: bool,

    pub anchor: String,

    pub children: Vec<DocNode>,
}

impl DocNode {
    /// The synthetic root holding the top-level fields.
    pub fn root(children: Vec<DocNode>, anchor: String) -> Self {
        Self {
            key: String::new(),
            column: 0,
            kind_tag: KindTag::Map,
            default: None,
            comment: String::new(),
            annotations: Annotations::default(),
            parent_breadcrumb: String::new(),
            parent_was_map: false,
            anchor,
            children,
        }
    }

    pub fn is_root(&self) -> bool {
        self.column == 0
    }

    pub fn is_map(&self) -> bool {
        self.kind_tag == KindTag::Map
    }

    /// Breadcrumb of this node, which is the parent breadcrumb of its children.
    pub fn breadcrumb(&self) -> String {
        if self.is_root() {
            return String::new();
        }
        breadcrumb::child_breadcrumb(&self.parent_breadcrumb, &self.key)
    }

    /// `@type` when given, otherwise the kind name.
    pub fn display_type(&self) -> &str {
        self.annotations
            .type_override
            .as_deref()
            .unwrap_or_else(|| self.kind_tag.name())
    }

    /// Default to show in docs.
    ///
    /// The `@default` annotation replaces the literal only when the literal
    /// is the `-` sentinel or absent.
    pub fn display_default(&self) -> Option<&str> {
        let annotated = self.annotations.default_override.as_deref();
        match self.default.as_deref() {
            Some(DEFAULT_SENTINEL) => annotated.or(Some(DEFAULT_SENTINEL)),
            Some(literal) => Some(literal),
            None => annotated,
        }
    }

    /// All descendants in depth-first pre-order, for list rendering.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Descendants with map kind in pre-order, one table section each.
    pub fn map_sections(&self) -> impl Iterator<Item = &DocNode> {
        self.walk().filter(|node| node.is_map())
    }
}

/// Pre-order iterator over a node's descendants.
pub struct Walk<'a> {
    stack: Vec<&'a DocNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a DocNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
