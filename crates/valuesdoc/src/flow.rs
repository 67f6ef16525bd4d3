/*
 * flow.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Single-line (flow) rendering of sequences.

use valuesdoc_yaml::{NodeKind, RawNode, ScalarStyle};

use crate::error::SerializationError;

/// Render sequence elements as a YAML flow sequence, e.g. `["a", "b"]`.
///
/// Scalars keep the quoting they were written with; nested collections are
/// rendered in flow form too.
pub fn to_flow_text(items: &[RawNode]) -> Result<String, SerializationError> {
    let rendered = items
        .iter()
        .map(flow_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", rendered.join(", ")))
}

fn flow_node(node: &RawNode) -> Result<String, SerializationError> {
    let text = match node.kind {
        NodeKind::Scalar => flow_scalar(node),
        NodeKind::Sequence => to_flow_text(&node.content)?,
        NodeKind::Mapping => {
            let entries = node
                .pairs()
                .map(|(key, value)| Ok(format!("{}: {}", flow_node(key)?, flow_node(value)?)))
                .collect::<Result<Vec<_>, SerializationError>>()?;
            format!("{{{}}}", entries.join(", "))
        }
        NodeKind::Alias => {
            return Err(SerializationError {
                detail: format!(
                    "alias at line {} cannot be rendered inline",
                    node.source_info.line
                ),
            });
        }
        NodeKind::Document => {
            return Err(SerializationError {
                detail: "document node cannot be rendered inline".into(),
            });
        }
    };

    match custom_tag(node) {
        Some(tag) => Ok(format!("{} {}", tag, text)),
        None => Ok(text),
    }
}

fn flow_scalar(node: &RawNode) -> String {
    let value = node.value.as_str();
    match node.style {
        ScalarStyle::SingleQuoted => format!("'{}'", value.replace('\'', "''")),
        ScalarStyle::DoubleQuoted | ScalarStyle::Literal | ScalarStyle::Folded => {
            double_quoted(value)
        }
        ScalarStyle::Plain if value.is_empty() => "null".to_string(),
        ScalarStyle::Plain if needs_quotes(value) => double_quoted(value),
        ScalarStyle::Plain => value.to_string(),
    }
}

/// Tags outside the core schema are written in front of the value.
fn custom_tag(node: &RawNode) -> Option<&str> {
    let tag = node.tag.as_str();
    (tag.starts_with('!') && !tag.starts_with("!!")).then_some(tag)
}

/// Plain text that would change meaning inside a flow collection.
fn needs_quotes(value: &str) -> bool {
    value.contains([',', '[', ']', '{', '}', '\n'])
        || value.contains(": ")
        || value.contains(" #")
        || value.ends_with(':')
}

fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
