//! Generic raw nodes produced by the decoder.

use crate::SourceInfo;

/// Kind of a raw node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Envelope around the top-level node.
    Document,
    Mapping,
    Sequence,
    Scalar,
    /// Reference to an anchored node. The resolved node is the only content.
    Alias,
}

/// Presentation style of a scalar as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarStyle {
    #[default]
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

/// A node in the generic YAML tree.
///
/// Unlike a typed YAML value, mappings are not keyed: their `content` is the
/// flat alternating list `key, value, key, value, ...`, and comments found
/// directly above a mapping key are kept as the key's `head_comment`.
///
/// ## Example
///
/// ```rust
/// use valuesdoc_yaml::{parse, NodeKind};
///
/// let doc = parse("# port docs\nport: 8080").unwrap();
/// let top = &doc.content[0];
/// assert_eq!(top.kind, NodeKind::Mapping);
/// assert_eq!(top.content[0].value, "port");
/// assert_eq!(top.content[0].head_comment, "# port docs");
/// assert_eq!(top.content[1].tag, "!!int");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawNode {
    pub kind: NodeKind,

    /// Resolved short tag (`!!str`, `!!map`, ...) or the explicit custom tag.
    pub tag: String,

    /// Scalar text. Empty for collections.
    pub value: String,

    pub style: ScalarStyle,

    /// Comment lines directly above this node, markers included.
    pub head_comment: String,

    /// Source location where this node starts.
    pub source_info: SourceInfo,

    /// Child nodes. See the type docs for the mapping layout.
    pub content: Vec<RawNode>,
}

impl RawNode {
    /// Create a scalar node.
    pub fn new_scalar(
        value: impl Into<String>,
        tag: impl Into<String>,
        style: ScalarStyle,
        source_info: SourceInfo,
    ) -> Self {
        Self {
            kind: NodeKind::Scalar,
            tag: tag.into(),
            value: value.into(),
            style,
            head_comment: String::new(),
            source_info,
            content: Vec::new(),
        }
    }

    /// Create a sequence node.
    pub fn new_sequence(
        tag: impl Into<String>,
        source_info: SourceInfo,
        items: Vec<RawNode>,
    ) -> Self {
        Self {
            kind: NodeKind::Sequence,
            tag: tag.into(),
            value: String::new(),
            style: ScalarStyle::Plain,
            head_comment: String::new(),
            source_info,
            content: items,
        }
    }

    /// Create a mapping node from its flat key/value content.
    pub fn new_mapping(
        tag: impl Into<String>,
        source_info: SourceInfo,
        pairs: Vec<RawNode>,
    ) -> Self {
        Self {
            kind: NodeKind::Mapping,
            tag: tag.into(),
            value: String::new(),
            style: ScalarStyle::Plain,
            head_comment: String::new(),
            source_info,
            content: pairs,
        }
    }

    /// Create an alias node pointing at (a copy of) the anchored node.
    pub fn new_alias(target: RawNode, source_info: SourceInfo) -> Self {
        Self {
            kind: NodeKind::Alias,
            tag: target.tag.clone(),
            value: String::new(),
            style: ScalarStyle::Plain,
            head_comment: String::new(),
            source_info,
            content: vec![target],
        }
    }

    /// Create the document envelope.
    pub fn new_document(top: Option<RawNode>) -> Self {
        Self {
            kind: NodeKind::Document,
            tag: String::new(),
            value: String::new(),
            style: ScalarStyle::Plain,
            head_comment: String::new(),
            source_info: SourceInfo::default(),
            content: top.into_iter().collect(),
        }
    }

    pub fn with_head_comment(mut self, comment: impl Into<String>) -> Self {
        self.head_comment = comment.into();
        self
    }

    pub fn is_scalar(&self) -> bool {
        self.kind == NodeKind::Scalar
    }

    pub fn is_mapping(&self) -> bool {
        self.kind == NodeKind::Mapping
    }

    pub fn is_sequence(&self) -> bool {
        self.kind == NodeKind::Sequence
    }

    /// Follow aliases to the node they refer to.
    pub fn resolved(&self) -> &RawNode {
        match (self.kind, self.content.first()) {
            (NodeKind::Alias, Some(target)) => target.resolved(),
            _ => self,
        }
    }

    /// Iterate a mapping's content as `(key, value)` pairs.
    ///
    /// Returns an empty iterator for non-mappings.
    pub fn pairs(&self) -> impl Iterator<Item = (&RawNode, &RawNode)> {
        let content: &[RawNode] = if self.is_mapping() { &self.content } else { &[] };
        content.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Look up a mapping value by key text.
    pub fn get(&self, key: &str) -> Option<&RawNode> {
        self.pairs()
            .find(|(k, _)| k.is_scalar() && k.value == key)
            .map(|(_, v)| v)
    }
}
