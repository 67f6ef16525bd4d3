//! # valuesdoc-yaml
//!
//! Generic-node YAML decoding for documentation generation.
//!
//! This crate turns YAML text into a tree of [`RawNode`]s. The tree mirrors
//! the document's structure rather than its data model: mappings keep their
//! keys and values as adjacent siblings, every node carries a resolved short
//! tag (`!!str`, `!!int`, `!!map`, ...), scalars keep their source style, and
//! the comment block written directly above a mapping key is attached to
//! that key.
//!
//! ## Design
//!
//! Built on yaml-rust2's event parser. Its scanner drops comments, so head
//! comments are recovered from the source text by line, skipping the bodies
//! of block scalars.
//!
//! ## Example
//!
//! ```rust
//! use valuesdoc_yaml::parse;
//!
//! let content = r#"
//! ## Number of replicas.
//! replicas: 3
//! "#;
//!
//! let doc = parse(content).unwrap();
//! let top = &doc.content[0];
//! assert_eq!(top.content[0].head_comment, "# Number of replicas.");
//! assert_eq!(top.content[1].tag, "!!int");
//! ```

mod comments;
mod error;
mod parser;
mod raw_node;
mod source_info;
pub mod tags;

pub use error::{Error, Result};
pub use parser::parse;
pub use raw_node::{NodeKind, RawNode, ScalarStyle};
pub use source_info::{LineIndex, SourceInfo};
