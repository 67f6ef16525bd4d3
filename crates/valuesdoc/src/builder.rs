/*
 * builder.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tree builder: turns the decoder's raw nodes into a [`DocNode`] tree.
//!
//! The raw tree stores a mapping as a flat `key, value, key, value` list.
//! Building walks that list in discrete pairs and produces one documentation
//! node per pair. Sequences whose elements are mappings are documented
//! through their first element, whose fields are promoted to children of the
//! sequence node.

use tracing::{debug, trace};
use valuesdoc_yaml::{NodeKind, RawNode};

use crate::breadcrumb::child_breadcrumb;
use crate::comment::{ExtractedComment, extract_comment};
use crate::error::{ParseError, ParseResult, ValidationError};
use crate::flow::to_flow_text;
use crate::node::{DocNode, KindTag};
use crate::options::ParseOptions;
use crate::validate::{validate, validate_siblings};

/// Parse annotated YAML into a documentation tree with default options.
///
/// # Example
///
/// ```rust
/// let root = valuesdoc::parse("# Line 1\n# Line 2\nkey: value").unwrap();
/// let node = &root.children[0];
/// assert_eq!(node.key, "key");
/// assert_eq!(node.column, 1);
/// assert_eq!(node.comment, "Line 1\nLine 2");
/// assert_eq!(node.default.as_deref(), Some("value"));
/// ```
///
/// # Errors
///
/// Fails on malformed YAML, on the first node that fails validation, and
/// when a sequence default cannot be rendered inline.
pub fn parse(text: &str) -> ParseResult<DocNode> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse annotated YAML into a documentation tree.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> ParseResult<DocNode> {
    debug!(bytes = text.len(), "Building documentation tree");

    let document = valuesdoc_yaml::parse(text)?;
    let builder = TreeBuilder { options };

    let children = match document.content.first().map(RawNode::resolved) {
        None => Vec::new(),
        // A bare `---` document decodes to a single null scalar.
        Some(top) if top.is_scalar() && KindTag::from_tag(&top.tag) == KindTag::Null => Vec::new(),
        Some(top) if top.is_mapping() => builder.build_children(&top.content, "", false, 1)?,
        Some(top) => {
            return Err(ValidationError::new(
                options.anchor(""),
                format!(
                    "top-level content must be a map, found {}",
                    KindTag::from_tag(&top.tag)
                ),
            )
            .into());
        }
    };

    Ok(DocNode::root(children, options.anchor("")))
}

/// How a list of raw nodes is turned into children.
enum ChildShape<'a> {
    /// A single node holding nested content: a sequence element that is a
    /// map. Its fields are promoted without consuming a pair.
    Wrapped(&'a RawNode),

    /// Alternating key and value nodes.
    Pairs(&'a [RawNode]),
}

impl<'a> ChildShape<'a> {
    fn classify(raw: &'a [RawNode]) -> Self {
        match raw {
            [single] if !single.resolved().content.is_empty() => {
                ChildShape::Wrapped(single.resolved())
            }
            _ => ChildShape::Pairs(raw),
        }
    }
}

struct TreeBuilder<'o> {
    options: &'o ParseOptions,
}

impl TreeBuilder<'_> {
    /// Build the nodes for `raw`, placing them at `column`.
    fn build_children(
        &self,
        raw: &[RawNode],
        parent_breadcrumb: &str,
        parent_was_map: bool,
        column: usize,
    ) -> ParseResult<Vec<DocNode>> {
        let pairs = match ChildShape::classify(raw) {
            ChildShape::Wrapped(inner) => {
                trace!(breadcrumb = parent_breadcrumb, "Promoting fields of sequence element");
                return self.build_children(&inner.content, parent_breadcrumb, true, column + 2);
            }
            ChildShape::Pairs(pairs) => pairs,
        };

        let chunks = pairs.chunks_exact(2);
        if let Some(stray) = chunks.remainder().first() {
            return Err(ValidationError::new(
                self.options.anchor(parent_breadcrumb),
                format!("unpaired node at line {}", stray.source_info.line),
            )
            .into());
        }

        let nodes = chunks
            .map(|pair| {
                self.build_doc_node(&pair[0], &pair[1], parent_breadcrumb, parent_was_map, column)
            })
            .collect::<ParseResult<Vec<_>>>()?;

        validate_siblings(&nodes, self.options)?;
        Ok(nodes)
    }

    fn build_doc_node(
        &self,
        key: &RawNode,
        value: &RawNode,
        parent_breadcrumb: &str,
        parent_was_map: bool,
        column: usize,
    ) -> ParseResult<DocNode> {
        let key_text = match key.resolved() {
            resolved if resolved.is_scalar() => resolved.value.clone(),
            _ => String::new(),
        };
        let ExtractedComment {
            display,
            annotations,
        } = extract_comment(&key.head_comment);

        let value = value.resolved();
        let breadcrumb = child_breadcrumb(parent_breadcrumb, &key_text);
        let anchor = self.options.anchor(&breadcrumb);

        let (default, children) = if annotations.suppresses_recursion() {
            debug!(anchor = %anchor, "Recursion suppressed");
            (None, Vec::new())
        } else {
            match value.kind {
                NodeKind::Scalar => (Some(value.value.clone()), Vec::new()),
                NodeKind::Mapping if value.content.is_empty() => (Some("{}".to_string()), Vec::new()),
                NodeKind::Mapping => (
                    None,
                    self.build_children(&value.content, &breadcrumb, false, column + 2)?,
                ),
                NodeKind::Sequence if first_element_is_map(value) => (
                    None,
                    self.build_children(&value.content[..1], &breadcrumb, false, column + 2)?,
                ),
                NodeKind::Sequence => {
                    let text = to_flow_text(&value.content).map_err(|source| {
                        ParseError::Serialization {
                            anchor: anchor.clone(),
                            source,
                        }
                    })?;
                    (Some(text), Vec::new())
                }
                NodeKind::Alias | NodeKind::Document => (None, Vec::new()),
            }
        };

        let node = DocNode {
            key: key_text,
            column,
            kind_tag: KindTag::from_tag(&value.tag),
            default,
            comment: display,
            annotations,
            parent_breadcrumb: parent_breadcrumb.to_string(),
            parent_was_map,
            anchor,
            children,
        };

        validate(&node, self.options)?;
        Ok(node)
    }
}

fn first_element_is_map(sequence: &RawNode) -> bool {
    sequence.content.first().is_some_and(|first| {
        let first = first.resolved();
        first.is_mapping() && !first.content.is_empty()
    })
}
