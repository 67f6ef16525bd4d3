/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Documentation trees from annotated YAML configuration.
//!
//! This crate reads a configuration file such as a Helm chart's
//! `values.yaml`, where every field is documented by the comment block
//! above it, and builds a tree of [`DocNode`]s that renderers turn into
//! reference documentation.
//!
//! Comments may carry annotations, each on its own line:
//!
//! - `@type: <type>`: type to show instead of the value's own kind
//! - `@default: <value>`: default to show; a literal value of `-` defers to it
//! - `@recurse: false`: document the field but none of its nested fields
//!
//! # Architecture
//!
//! - [`comment`]: strips comment markers and extracts annotations
//! - [`breadcrumb`]: stable identifiers for nodes
//! - [`node`]: the output tree and its traversals
//! - [`flow`]: inline rendering of sequence defaults
//! - [`validate`]: structural checks run on every node
//! - `builder`: the recursive tree builder behind [`parse`]
//!
//! # Example
//!
//! ```rust
//! use valuesdoc::{KindTag, parse};
//!
//! let root = parse(
//!     r#"
//! server:
//!   ## Number of server replicas.
//!   replicas: 3
//! "#,
//! )
//! .unwrap();
//!
//! let replicas = &root.children[0].children[0];
//! assert_eq!(replicas.kind_tag, KindTag::Integer);
//! assert_eq!(replicas.anchor, "v-server-replicas");
//! assert_eq!(replicas.comment, "Number of server replicas.");
//! ```

pub mod breadcrumb;
mod builder;
pub mod comment;
pub mod error;
pub mod flow;
pub mod node;
pub mod options;
pub mod validate;

// Re-export main types at crate root
pub use builder::{parse, parse_with_options};
pub use comment::{Annotations, ExtractedComment};
pub use error::{ParseError, ParseResult, SerializationError, ValidationError};
pub use node::{DocNode, KindTag, Walk};
pub use options::ParseOptions;
