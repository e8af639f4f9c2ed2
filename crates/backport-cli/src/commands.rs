//! Subcommand implementations
//!
//! Each command writes to a caller-supplied writer so it can be driven
//! from tests as well as from `main`.

use anyhow::{Context, Result};
use backport_chain::{Converter, ConverterComposer, VersionLabel, VersionOrdering};
use backport_loader::{load_chain, LoaderConfig};
use clap::ArgMatches;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Dispatch a parsed subcommand
///
/// `input` feeds `convert` when no identifiers are given; all output goes
/// to `out`.
///
/// # Errors
/// Config, load, compose, read, or write failures, and unknown subcommands.
pub fn run(name: &str, args: &ArgMatches, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let config = load_config(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let json = args.get_flag("json");

    let dir = args
        .get_one::<PathBuf>("dir")
        .context("missing mapping directory")?;
    let ordering = load(dir, &config)?;

    match name {
        "versions" => versions(&ordering, json, out)?,
        "check" => check(&ordering, out)?,
        "convert" => {
            let from = args.get_one::<String>("from").context("missing --from")?;
            let to = args.get_one::<String>("to").context("missing --to")?;
            let converter = compose(&ordering, from, to)?;

            let ids: Vec<&String> = args
                .get_many::<String>("ids")
                .map(Iterator::collect)
                .unwrap_or_default();
            if ids.is_empty() {
                convert_lines(&converter, input, json, out)?;
            } else {
                convert_ids(&converter, &ids, json, out)?;
            }
        }
        other => anyhow::bail!("unknown subcommand: {other}"),
    }

    out.flush()?;
    Ok(())
}

/// Resolve loader config: file if given, defaults otherwise
///
/// # Errors
/// Any error reading or validating the config file.
pub fn load_config(path: Option<&Path>) -> Result<LoaderConfig> {
    match path {
        Some(path) => LoaderConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(LoaderConfig::default()),
    }
}

/// Load and validate a mapping directory
///
/// # Errors
/// Any load or chain validation error.
pub fn load(dir: &Path, config: &LoaderConfig) -> Result<VersionOrdering> {
    load_chain(dir, config).with_context(|| format!("loading mappings from {}", dir.display()))
}

#[derive(Debug, Serialize)]
struct VersionRow {
    version: VersionLabel,
    ordinal: usize,
    /// Sizes of the step down to the next older version
    step: Option<StepSize>,
}

#[derive(Debug, Serialize)]
struct StepSize {
    exact: usize,
    rename: usize,
}

/// `backport versions`
///
/// # Errors
/// Write failures.
pub fn versions(ordering: &VersionOrdering, json: bool, out: &mut impl Write) -> Result<()> {
    let versions = ordering.all_versions_descending();
    let rows: Vec<VersionRow> = versions
        .iter()
        .enumerate()
        .map(|(i, version)| VersionRow {
            version: version.label().clone(),
            ordinal: version.ordinal(),
            step: versions
                .get(i + 1)
                .and_then(|older| ordering.step_between(version, older))
                .map(|step| StepSize {
                    exact: step.exact_len(),
                    rename: step.rename_len(),
                }),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    for row in &rows {
        match &row.step {
            Some(step) => writeln!(
                out,
                "{:<10} exact={:<6} rename={}",
                row.version, step.exact, step.rename
            )?,
            None => writeln!(out, "{:<10} (oldest)", row.version)?,
        }
    }
    Ok(())
}

/// `backport check`
///
/// # Errors
/// Write failures.
pub fn check(ordering: &VersionOrdering, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "ok: {} versions, {} -> {}",
        ordering.len(),
        ordering.newest(),
        ordering.oldest()
    )?;
    Ok(())
}

/// Compose the converter for a `--from`/`--to` request
///
/// # Errors
/// Unparseable labels, or any [`ComposeError`](backport_chain::ComposeError).
pub fn compose(ordering: &VersionOrdering, from: &str, to: &str) -> Result<Converter> {
    let from: VersionLabel = from
        .parse()
        .with_context(|| format!("parsing --from {from}"))?;
    let to: VersionLabel = to.parse().with_context(|| format!("parsing --to {to}"))?;

    let converter = ConverterComposer::new(ordering).compose_labels(&from, &to)?;
    tracing::info!(%from, %to, hops = converter.hops(), "converter ready");
    Ok(converter)
}

#[derive(Debug, Serialize)]
struct Conversion<'a> {
    input: &'a str,
    output: &'a str,
}

/// `backport convert` over explicit identifiers
///
/// # Errors
/// Write failures.
pub fn convert_ids<S: AsRef<str>>(
    converter: &Converter,
    ids: &[S],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    for id in ids {
        write_conversion(converter, id.as_ref(), json, out)?;
    }
    Ok(())
}

/// `backport convert` over input lines; blank lines are skipped
///
/// # Errors
/// Read or write failures.
pub fn convert_lines(
    converter: &Converter,
    input: impl BufRead,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("reading identifiers")?;
        let id = line.trim_end_matches('\r');
        if id.is_empty() {
            continue;
        }
        write_conversion(converter, id, json, out)?;
    }
    Ok(())
}

fn write_conversion(converter: &Converter, input: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let output = converter.apply(input);
    if json {
        serde_json::to_writer(&mut *out, &Conversion {
            input,
            output: &output,
        })?;
        writeln!(out)?;
    } else {
        writeln!(out, "{output}")?;
    }
    Ok(())
}
