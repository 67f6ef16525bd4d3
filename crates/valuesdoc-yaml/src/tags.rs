//! Short-tag resolution.
//!
//! Plain scalars are resolved with the YAML 1.2 core schema. Explicit tags
//! in the `tag:yaml.org,2002:` namespace are shortened to their `!!` form so
//! callers only ever see one spelling.

use once_cell::sync::Lazy;
use regex::Regex;

pub const STR: &str = "!!str";
pub const INT: &str = "!!int";
pub const FLOAT: &str = "!!float";
pub const BOOL: &str = "!!bool";
pub const NULL: &str = "!!null";
pub const SEQ: &str = "!!seq";
pub const MAP: &str = "!!map";

const YAML_NAMESPACE: &str = "tag:yaml.org,2002:";

static INT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-+]?[0-9]+|0o[0-7]+|0x[0-9a-fA-F]+)$").unwrap());

static FLOAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[-+]?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)(?:[eE][-+]?[0-9]+)?|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$",
    )
    .unwrap()
});

/// Resolve the tag of an untagged plain scalar.
pub fn resolve_plain(value: &str) -> &'static str {
    match value {
        "" | "~" | "null" | "Null" | "NULL" => NULL,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => BOOL,
        _ if INT_PATTERN.is_match(value) => INT,
        _ if FLOAT_PATTERN.is_match(value) => FLOAT,
        _ => STR,
    }
}

/// Shorten an explicit tag given as handle + suffix.
///
/// Returns `None` for the non-specific tag `!`, which leaves resolution to
/// the node kind.
pub fn resolve_explicit(handle: &str, suffix: &str) -> Option<String> {
    if handle == YAML_NAMESPACE || handle == "!!" {
        return Some(format!("!!{}", suffix));
    }
    if let Some(rest) = suffix.strip_prefix(YAML_NAMESPACE) {
        return Some(format!("!!{}", rest));
    }
    match (handle, suffix) {
        ("!", "") | ("", "!") | ("", "") => None,
        _ => Some(format!("{}{}", handle, suffix)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_core_schema() {
        assert_eq!(resolve_plain("value"), STR);
        assert_eq!(resolve_plain("3"), INT);
        assert_eq!(resolve_plain("-12"), INT);
        assert_eq!(resolve_plain("0x1F"), INT);
        assert_eq!(resolve_plain("0o17"), INT);
        assert_eq!(resolve_plain("1.5"), FLOAT);
        assert_eq!(resolve_plain("1e3"), FLOAT);
        assert_eq!(resolve_plain(".inf"), FLOAT);
        assert_eq!(resolve_plain(".NaN"), FLOAT);
        assert_eq!(resolve_plain("true"), BOOL);
        assert_eq!(resolve_plain("FALSE"), BOOL);
        assert_eq!(resolve_plain("null"), NULL);
        assert_eq!(resolve_plain("~"), NULL);
        assert_eq!(resolve_plain(""), NULL);
    }

    #[test]
    fn test_resolve_plain_keeps_yaml11_words_as_strings() {
        assert_eq!(resolve_plain("yes"), STR);
        assert_eq!(resolve_plain("off"), STR);
        assert_eq!(resolve_plain("inf"), STR);
        assert_eq!(resolve_plain("-"), STR);
        assert_eq!(resolve_plain("20m"), STR);
    }

    #[test]
    fn test_resolve_explicit() {
        assert_eq!(resolve_explicit("tag:yaml.org,2002:", "str").as_deref(), Some("!!str"));
        assert_eq!(resolve_explicit("!!", "int").as_deref(), Some("!!int"));
        assert_eq!(resolve_explicit("!", "secret").as_deref(), Some("!secret"));
        assert_eq!(resolve_explicit("!", ""), None);
    }
}
