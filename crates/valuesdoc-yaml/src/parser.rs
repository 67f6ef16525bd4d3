//! YAML decoder that builds RawNode trees.

use std::collections::HashMap;

use crate::comments::CommentIndex;
use crate::source_info::LineIndex;
use crate::tags;
use crate::{Error, RawNode, Result, ScalarStyle, SourceInfo};
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, ScanError, TScalarStyle};

/// Parse YAML text into a document envelope node.
///
/// The returned node has kind [`NodeKind::Document`]; its only content is the
/// top-level node, or nothing for an empty document. Only the first document
/// of a multi-document stream is decoded.
///
/// # Example
///
/// ```rust
/// use valuesdoc_yaml::{parse, NodeKind};
///
/// let doc = parse("title: My Chart").unwrap();
/// assert_eq!(doc.kind, NodeKind::Document);
/// assert!(doc.content[0].is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the text is not well-formed YAML.
pub fn parse(content: &str) -> Result<RawNode> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = RawTreeBuilder::new(content);

    parser
        .load(&mut builder, false) // false = single document only
        .map_err(|err| scan_error(&builder.line_index, &err))?;

    builder.result()
}

fn scan_error(lines: &LineIndex, err: &ScanError) -> Error {
    Error::ParseError {
        message: err.info().to_string(),
        location: Some(SourceInfo::from_offset(lines, err.marker().index())),
    }
}

/// Builder that implements MarkedEventReceiver to construct a RawNode tree.
struct RawTreeBuilder<'a> {
    line_index: LineIndex,
    comments: CommentIndex<'a>,

    /// Stack of collections being constructed
    stack: Vec<BuildNode>,

    /// Anchored nodes by anchor id, for alias resolution
    anchors: HashMap<usize, RawNode>,

    root: Option<RawNode>,

    /// First structural problem seen; events cannot return errors directly.
    error: Option<Error>,
}

/// A collection being constructed during parsing.
enum BuildNode {
    Sequence {
        source_info: SourceInfo,
        tag: String,
        anchor_id: usize,
        items: Vec<RawNode>,
    },
    Mapping {
        source_info: SourceInfo,
        tag: String,
        anchor_id: usize,
        content: Vec<RawNode>,
    },
}

impl<'a> RawTreeBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            line_index: LineIndex::new(source),
            comments: CommentIndex::new(source),
            stack: Vec::new(),
            anchors: HashMap::new(),
            root: None,
            error: None,
        }
    }

    fn result(self) -> Result<RawNode> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(Error::InvalidStructure {
                message: "unterminated collection".into(),
            });
        }
        Ok(RawNode::new_document(self.root))
    }

    fn fail(&mut self, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(Error::InvalidStructure {
                message: message.into(),
            });
        }
    }

    fn register_anchor(&mut self, anchor_id: usize, node: &RawNode) {
        if anchor_id > 0 {
            self.anchors.insert(anchor_id, node.clone());
        }
    }

    fn push_complete(&mut self, node: RawNode) {
        match self.stack.last_mut() {
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
            Some(BuildNode::Sequence { items, .. }) => items.push(node),
            Some(BuildNode::Mapping { content, .. }) => {
                // Even positions are keys; only keys opening their line carry
                // head comments, so keys inside flow collections get none.
                if content.len() % 2 == 0 {
                    let SourceInfo { line, col, .. } = node.source_info;
                    let comment = if self.comments.opens_line(line, col) {
                        self.comments.head_comment(line)
                    } else {
                        String::new()
                    };
                    content.push(node.with_head_comment(comment));
                } else {
                    content.push(node);
                }
            }
        }
    }

    fn source_info(&self, marker: &Marker) -> SourceInfo {
        SourceInfo::from_offset(&self.line_index, marker.index())
    }
}

impl<'a> MarkedEventReceiver for RawTreeBuilder<'a> {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Scalar(value, style, anchor_id, tag) => {
                let source_info = self.source_info(&marker);
                let style = scalar_style(style);
                match style {
                    ScalarStyle::Literal | ScalarStyle::Folded => {
                        self.comments.mark_block_scalar(source_info.line);
                    }
                    ScalarStyle::SingleQuoted => {
                        self.comments
                            .mark_quoted_scalar(source_info.line, source_info.col, '\'');
                    }
                    ScalarStyle::DoubleQuoted => {
                        self.comments
                            .mark_quoted_scalar(source_info.line, source_info.col, '"');
                    }
                    ScalarStyle::Plain => {}
                }

                let tag = scalar_tag(&value, style, tag.as_ref());
                let node = RawNode::new_scalar(value, tag, style, source_info);
                self.register_anchor(anchor_id, &node);
                self.push_complete(node);
            }

            Event::SequenceStart(anchor_id, tag) => {
                let source_info = self.source_info(&marker);
                self.stack.push(BuildNode::Sequence {
                    source_info,
                    tag: collection_tag(tag.as_ref(), tags::SEQ),
                    anchor_id,
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => match self.stack.pop() {
                Some(BuildNode::Sequence {
                    source_info,
                    tag,
                    anchor_id,
                    items,
                }) => {
                    let node = RawNode::new_sequence(tag, source_info, items);
                    self.register_anchor(anchor_id, &node);
                    self.push_complete(node);
                }
                _ => self.fail("sequence end without matching start"),
            },

            Event::MappingStart(anchor_id, tag) => {
                let source_info = self.source_info(&marker);
                self.stack.push(BuildNode::Mapping {
                    source_info,
                    tag: collection_tag(tag.as_ref(), tags::MAP),
                    anchor_id,
                    content: Vec::new(),
                });
            }

            Event::MappingEnd => match self.stack.pop() {
                Some(BuildNode::Mapping {
                    source_info,
                    tag,
                    anchor_id,
                    content,
                }) => {
                    if content.len() % 2 != 0 {
                        self.fail("mapping entry without value");
                        return;
                    }
                    let node = RawNode::new_mapping(tag, source_info, content);
                    self.register_anchor(anchor_id, &node);
                    self.push_complete(node);
                }
                _ => self.fail("mapping end without matching start"),
            },

            Event::Alias(anchor_id) => {
                let source_info = self.source_info(&marker);
                match self.anchors.get(&anchor_id).cloned() {
                    Some(target) => self.push_complete(RawNode::new_alias(target, source_info)),
                    None => self.fail(format!(
                        "alias at line {} refers to an unknown anchor",
                        source_info.line
                    )),
                }
            }

            // Stream and document boundaries carry no nodes.
            _ => {}
        }
    }
}

fn scalar_style(style: TScalarStyle) -> ScalarStyle {
    match style {
        TScalarStyle::SingleQuoted => ScalarStyle::SingleQuoted,
        TScalarStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
        TScalarStyle::Literal => ScalarStyle::Literal,
        TScalarStyle::Folded => ScalarStyle::Folded,
        _ => ScalarStyle::Plain,
    }
}

fn scalar_tag(value: &str, style: ScalarStyle, tag: Option<&Tag>) -> String {
    match tag {
        Some(tag) => tags::resolve_explicit(&tag.handle, &tag.suffix)
            .unwrap_or_else(|| tags::STR.to_string()),
        None if style == ScalarStyle::Plain => tags::resolve_plain(value).to_string(),
        None => tags::STR.to_string(),
    }
}

fn collection_tag(tag: Option<&Tag>, default: &str) -> String {
    tag.and_then(|tag| tags::resolve_explicit(&tag.handle, &tag.suffix))
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;
    use pretty_assertions::assert_eq;

    fn top(content: &str) -> RawNode {
        let mut doc = parse(content).unwrap();
        assert_eq!(doc.kind, NodeKind::Document);
        doc.content.remove(0)
    }

    #[test]
    fn test_parse_scalar_tags() {
        let map = top("s: value\ni: 3\nb: true\nn: null\nf: 1.5\nq: \"3\"\n");
        let tags: Vec<_> = map.pairs().map(|(_, v)| v.tag.as_str()).collect();
        assert_eq!(tags, vec!["!!str", "!!int", "!!bool", "!!null", "!!float", "!!str"]);
    }

    #[test]
    fn test_mapping_content_is_flat_pairs() {
        let map = top("title: My Chart\nreplicas: 2");
        assert!(map.is_mapping());
        let flat: Vec<_> = map.content.iter().map(|n| n.value.as_str()).collect();
        assert_eq!(flat, vec!["title", "My Chart", "replicas", "2"]);
    }

    #[test]
    fn test_nested_structure() {
        let map = top("project:\n  authors:\n    - Alice\n    - Bob\n");
        let authors = map.get("project").unwrap().get("authors").unwrap();
        assert!(authors.is_sequence());
        assert_eq!(authors.tag, "!!seq");
        assert_eq!(authors.content.len(), 2);
    }

    #[test]
    fn test_head_comments_attach_to_keys() {
        let map = top("---\n# Line 1\n# Line 2\nkey: value\nother: 1\n");
        assert_eq!(map.content[0].head_comment, "# Line 1\n# Line 2");
        assert_eq!(map.content[1].head_comment, "");
        assert_eq!(map.content[2].head_comment, "");
    }

    #[test]
    fn test_nested_key_comments_keep_markers_drop_indent() {
        let map = top("map:\n  # Key line 1\n  #\n  # Key line 2\n  key: value\n");
        let inner = map.get("map").unwrap();
        assert_eq!(inner.content[0].head_comment, "# Key line 1\n#\n# Key line 2");
    }

    #[test]
    fn test_block_scalar_keeps_newlines() {
        let map = top("extraConfig: |\n  {}\n# next\nnext: 1\n");
        let value = map.get("extraConfig").unwrap();
        assert_eq!(value.style, ScalarStyle::Literal);
        assert_eq!(value.tag, "!!str");
        assert_eq!(value.value, "{}\n");
        assert_eq!(map.content[2].head_comment, "# next");
    }

    #[test]
    fn test_flow_mapping_keys_have_no_head_comment() {
        let map = top("# docs for resources\nresources: {requests: {cpu: 1}}\n");
        assert_eq!(map.content[0].head_comment, "# docs for resources");
        let requests = map.get("resources").unwrap();
        assert_eq!(requests.content[0].head_comment, "");
        assert_eq!(requests.get("requests").unwrap().content[0].head_comment, "");
    }

    #[test]
    fn test_quoted_scalar_lines_are_not_comments() {
        let map = top("a: \"foo\n  # @recurse: false\"\nb:\n  c: 1\n");
        assert_eq!(map.get("a").unwrap().value, "foo # @recurse: false");
        assert_eq!(map.content[2].head_comment, "");

        let map = top("a: 'one\n  # two'\n# docs\nb: 1\n");
        assert_eq!(map.content[2].head_comment, "# docs");
    }

    #[test]
    fn test_explicit_tags() {
        let map = top("a: !!str 3\nb: !secret hunter2\nc: !!map {}\n");
        assert_eq!(map.get("a").unwrap().tag, "!!str");
        assert_eq!(map.get("b").unwrap().tag, "!secret");
        assert_eq!(map.get("c").unwrap().tag, "!!map");
    }

    #[test]
    fn test_alias_resolves_anchor() {
        let map = top("base: &ports [80, 443]\ncopy: *ports\n");
        let copy = map.get("copy").unwrap();
        assert_eq!(copy.kind, NodeKind::Alias);
        assert_eq!(copy.tag, "!!seq");
        assert_eq!(copy.resolved().content.len(), 2);
    }

    #[test]
    fn test_source_info_tracking() {
        let map = top("a: 1\nbb: 2\n");
        let key = &map.content[2];
        assert_eq!(key.source_info.line, 2);
        assert_eq!(key.source_info.col, 1);
    }

    #[test]
    fn test_empty_document() {
        let doc = parse("# only a comment\n").unwrap();
        assert!(doc.content.is_empty());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let err = parse("key: [unclosed").unwrap_err();
        assert!(matches!(err, Error::ParseError { location: Some(_), .. }));
    }
}
