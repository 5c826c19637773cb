//! ice-props: resolve Ice properties the way a runtime sees them at startup.
//!
//! The arguments after `--` are treated as a program's command line. They go
//! through the same bootstrap a runtime performs: the `--Ice.Config` directive
//! is consumed and its file loaded, then every `--<prefix>.key[=value]` option
//! is committed. The resolved properties are printed to stdout.
//!
//! # Usage
//!
//! ```text
//! ice-props [OPTIONS] [-- ARGS...]
//!
//! Options:
//!   --prefix <PREFIX>  Option prefix to pull from ARGS, repeatable [default: Ice]
//!   --filter <PREFIX>  Only print properties whose key starts with PREFIX
//!   --json             Print a JSON document instead of --key=value lines
//! ```
//!
//! # Examples
//!
//! ```text
//! $ ice-props --filter Ice.Trace -- --Ice.Config=server.cfg --Ice.Trace.Network=3 run
//! --Ice.Trace.Network=3
//! --Ice.Trace.Protocol=1
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=ice_properties=debug`).

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ice_properties::{Environment, ProcessEnvironment, PropertyStore};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Resolve and print Ice properties from command-line arguments and
/// configuration files.
#[derive(Debug, Parser)]
#[command(name = "ice-props", version)]
struct Cli {
    /// Option prefix to pull out of the arguments.
    ///
    /// May be repeated or given as a comma-separated list. Each prefix
    /// selects tokens of the form `--<prefix>.key[=value]`.
    #[arg(
        long = "prefix",
        value_name = "PREFIX",
        default_value = "Ice",
        value_delimiter = ',',
        env = "ICE_PROPS_PREFIX"
    )]
    prefixes: Vec<String>,

    /// Only print properties whose key starts with this text.
    #[arg(long, value_name = "PREFIX", default_value = "", env = "ICE_PROPS_FILTER")]
    filter: String,

    /// Print a JSON document with the properties and the leftover arguments.
    #[arg(long)]
    json: bool,

    /// The command line to resolve, given after `--`.
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,
}

/// The resolved view printed by the tool.
#[derive(Debug, Serialize, PartialEq)]
struct Report {
    /// Matching properties, sorted by key.
    properties: BTreeMap<String, String>,
    /// Arguments no prefix claimed, in their original order.
    remaining_args: Vec<String>,
}

/// Runs the startup sequence for `cli` against `environment`.
///
/// # Errors
///
/// Returns an error if the configuration file named by `--Ice.Config`
/// cannot be read.
fn resolve(cli: &Cli, environment: Arc<dyn Environment>) -> anyhow::Result<Report> {
    let (store, mut remaining) =
        PropertyStore::from_args_with_environment(cli.args.iter().cloned(), environment)
            .context("failed to load configuration file")?;

    for prefix in &cli.prefixes {
        remaining = store.parse_command_line_options(prefix, remaining);
        debug!(%prefix, left = remaining.len(), "parsed prefixed options");
    }

    let properties = store
        .get_properties(&cli.filter)
        .into_iter()
        .collect::<BTreeMap<_, _>>();

    Ok(Report {
        properties,
        remaining_args: remaining,
    })
}

/// Renders the properties as `--key=value` lines, one per property.
fn render_text(report: &Report) -> String {
    report
        .properties
        .iter()
        .map(|(key, value)| format!("--{key}={value}\n"))
        .collect()
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let report = resolve(&cli, Arc::new(ProcessEnvironment))?;
    info!(
        properties = report.properties.len(),
        remaining = ?report.remaining_args,
        "resolved properties"
    );

    if cli.json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
