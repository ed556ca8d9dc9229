//! xsdsharp command-line interface.
//!
//! Plumbing around the generator core: resolves the input schema under a
//! source directory, creates the destination directory, writes the generated
//! `.cs` file, and logs progress and diagnostics.

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use xsdsharp_codegen::{Generator, GeneratorConfig};
use xsdsharp_schema::parse_document;

/// Generate C# entity classes from an XML Schema document.
#[derive(Debug, Parser)]
#[command(name = "xsdsharp", version, about)]
struct Args {
    /// Schema file name, resolved under the source directory.
    input: PathBuf,

    /// Directory containing the input schema.
    #[arg(long, default_value = ".")]
    source_dir: PathBuf,

    /// Directory receiving the generated file (created if absent).
    #[arg(long, default_value = "generated")]
    dest_dir: PathBuf,

    /// Namespace wrapping the generated declarations.
    #[arg(long)]
    namespace: Option<String>,

    /// Spaces per indentation level.
    #[arg(long, default_value_t = 4)]
    indent: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let input = args.source_dir.join(&args.input);
    info!("pre-processing {}", input.display());

    let xml = fs::read_to_string(&input)
        .with_context(|| format!("failed to read schema file {}", input.display()))?;
    let doc = parse_document(&xml)
        .with_context(|| format!("failed to parse schema file {}", input.display()))?;

    let mut config = GeneratorConfig::default();
    if let Some(namespace) = args.namespace {
        config.namespace = namespace;
    }
    config.indent = " ".repeat(args.indent);

    let generated = Generator::with_config(&doc, config).generate();
    for diagnostic in &generated.diagnostics {
        warn!("{diagnostic}");
    }

    fs::create_dir_all(&args.dest_dir)
        .with_context(|| format!("failed to create {}", args.dest_dir.display()))?;

    let file_name = args
        .input
        .file_name()
        .context("input path has no file name")?;
    let dest = args.dest_dir.join(file_name).with_extension("cs");

    fs::write(&dest, &generated.text)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    info!("finished pre-processing, wrote {}", dest.display());

    Ok(())
}
