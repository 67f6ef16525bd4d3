//! valuesdoc CLI - builds the documentation tree of an annotated YAML file

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[derive(Parser)]
#[command(name = "valuesdoc")]
#[command(version)]
#[command(about = "Build a documentation tree from an annotated YAML file", long_about = None)]
struct Cli {
    /// Annotated YAML file ('-' reads standard input)
    input: PathBuf,

    /// TOML file with parse options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only validate the file; print nothing on success
    #[arg(long)]
    check: bool,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "valuesdoc=info,valuesdoc_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let options = config::load_options(cli.config.as_deref())?;
    let text = read_input(&cli.input)?;

    let tree = valuesdoc::parse_with_options(&text, &options)
        .with_context(|| format!("Failed to document {}", cli.input.display()))?;
    tracing::info!(nodes = tree.walk().count(), "Built documentation tree");

    if cli.check {
        return Ok(());
    }

    let json = if cli.compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    println!("{}", json);
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
