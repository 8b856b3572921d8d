//! Library half of the `outfit` binary.
//!
//! [`run`] executes a parsed [`Cli`](cli::Cli) against a registry and writes
//! the result to any writer, so the commands can be tested without spawning
//! a process.

pub mod cli;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use outfit::{catalog, merge_tokens, OptionRecord, ResolvedOptions, SchemaRegistry, Stylesheet, TokenSequence};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};

/// Loads the stylesheet at `path`, or the built-in catalog when `None`.
pub fn load_registry(path: Option<&Path>) -> Result<SchemaRegistry> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading stylesheet");
            let stylesheet = Stylesheet::from_file(path)
                .with_context(|| format!("failed to load stylesheet {}", path.display()))?;
            Ok(stylesheet.into_registry())
        }
        None => catalog::registry().context("failed to build the built-in catalog"),
    }
}

#[derive(Debug, Serialize)]
struct AxisSummary<'a> {
    name: &'a str,
    values: Vec<&'a str>,
    /// `None` when the default is computed from other inputs.
    default: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct KindSummary<'a> {
    kind: &'a str,
    axes: Vec<AxisSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    kind: &'a str,
    options: &'a ResolvedOptions,
    classes: &'a TokenSequence,
}

#[derive(Debug, Serialize)]
struct MergeReport {
    classes: String,
}

/// Runs `cli`, writing its output to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let registry = load_registry(cli.stylesheet.as_deref())?;
    match &cli.command {
        Commands::Kinds => kinds(&registry, cli.format, out),
        Commands::Resolve {
            kind,
            selections,
            inputs,
            classes,
        } => {
            let options = inputs
                .iter()
                .fold(selections.iter().cloned().collect::<OptionRecord>(), |record, input| {
                    record.input(input.as_str())
                });
            let composed = registry
                .compose(kind, &options, classes)
                .with_context(|| format!("cannot resolve '{}'", kind))?;

            match cli.format {
                OutputFormat::Text => writeln!(out, "{}", composed.tokens)?,
                OutputFormat::Json => write_json(
                    out,
                    &ResolveReport {
                        kind,
                        options: &composed.options,
                        classes: &composed.tokens,
                    },
                )?,
            }
            Ok(())
        }
        Commands::Merge { sources } => {
            let classes = merge_tokens(sources).join(" ");
            match cli.format {
                OutputFormat::Text => writeln!(out, "{}", classes)?,
                OutputFormat::Json => write_json(out, &MergeReport { classes })?,
            }
            Ok(())
        }
    }
}

fn kinds<W: Write>(registry: &SchemaRegistry, format: OutputFormat, out: &mut W) -> Result<()> {
    let mut summaries = Vec::with_capacity(registry.len());
    for kind in registry.kinds() {
        let schema = registry.get(kind)?;
        let axes = schema
            .axes()
            .map(|axis| AxisSummary {
                name: axis.name(),
                values: axis.allowed_values().collect(),
                default: axis.default_value().as_static(),
            })
            .collect();
        summaries.push(KindSummary { kind, axes });
    }

    match format {
        OutputFormat::Json => write_json(out, &summaries),
        OutputFormat::Text => {
            for summary in &summaries {
                writeln!(out, "{}", summary.kind)?;
                for axis in &summary.axes {
                    writeln!(
                        out,
                        "  {}: {} (default: {})",
                        axis.name,
                        axis.values.join(", "),
                        axis.default.unwrap_or("derived")
                    )?;
                }
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
