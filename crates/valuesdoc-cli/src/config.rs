//! Loading parse options from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use valuesdoc::ParseOptions;

/// Read options from `path`, or return the defaults when no path is given.
pub fn load_options(path: Option<&Path>) -> Result<ParseOptions> {
    let Some(path) = path else {
        return Ok(ParseOptions::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let options = toml::from_str(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded parse options");
    Ok(options)
}
