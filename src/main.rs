//! `tctx` - make and inspect W3C trace context headers.
//!
//! ```text
//! tctx make [--sampled|--unsampled]
//! tctx parse <traceparent>
//! tctx child <traceparent> [--sampled|--unsampled]
//! tctx tracestate <tracestate> [--set key=value]...
//! ```
//!
//! Every subcommand prints one JSON document on stdout. Rejected input exits
//! with status 1 and a message on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use tctx::config::{load_config, TctxConfig};
use tctx::observability::init_logging;
use tctx::traceparent::{self, Traceparent};
use tctx::tracestate;

#[derive(Parser)]
#[command(name = "tctx")]
#[command(about = "Make and inspect W3C trace context headers", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new trace
    Make(SampledArgs),
    /// Validate and decode a traceparent
    Parse { value: String },
    /// Derive the traceparent for an outbound call
    Child {
        value: String,
        #[command(flatten)]
        sampled: SampledArgs,
    },
    /// Validate a tracestate, optionally setting entries
    Tracestate {
        value: String,
        /// Entry to set, most recent last
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

#[derive(Args)]
struct SampledArgs {
    #[arg(long, conflicts_with = "unsampled")]
    sampled: bool,
    #[arg(long)]
    unsampled: bool,
}

impl SampledArgs {
    fn choice(&self) -> Option<bool> {
        match (self.sampled, self.unsampled) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct TraceparentReport {
    traceparent: String,
    version: String,
    trace_id: String,
    parent_id: String,
    flags: String,
    sampled: bool,
    random: bool,
}

impl From<&Traceparent> for TraceparentReport {
    fn from(id: &Traceparent) -> Self {
        Self {
            traceparent: id.to_string(),
            version: format!("{:02x}", id.version()),
            trace_id: id.trace_id().to_hex(),
            parent_id: id.parent_id().to_hex(),
            flags: id.flags().to_string(),
            sampled: traceparent::is_sampled(id),
            random: traceparent::is_randomed(id),
        }
    }
}

#[derive(Serialize)]
struct TracestateReport {
    tracestate: String,
    size: usize,
    entries: Vec<(String, String)>,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TctxConfig::default(),
    };
    init_logging(&config.logging)?;

    tracing::debug!(sampled = config.traceparent.sampled, "tctx starting");

    match cli.command {
        Commands::Make(args) => {
            let id = traceparent::make(args.choice().unwrap_or(config.traceparent.sampled));
            print_json(&TraceparentReport::from(&id))?;
        }
        Commands::Parse { value } => {
            let Some(id) = traceparent::parse(&value) else {
                return Ok(reject("traceparent", &value));
            };
            print_json(&TraceparentReport::from(&id))?;
        }
        Commands::Child { value, sampled } => {
            let Some(parent) = traceparent::parse(&value) else {
                return Ok(reject("traceparent", &value));
            };
            print_json(&TraceparentReport::from(&parent.child(sampled.choice())))?;
        }
        Commands::Tracestate { value, set } => {
            let mut state = tracestate::parse(&value);
            for entry in &set {
                let Some((key, val)) = entry.split_once('=') else {
                    return Ok(reject("--set entry", entry));
                };
                if let Err(e) = state.set(key, val) {
                    eprintln!("Error: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
            print_json(&TracestateReport {
                tracestate: state.to_string(),
                size: state.len(),
                entries: state
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            })?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn reject(what: &str, value: &str) -> ExitCode {
    eprintln!("Error: invalid {}: {:?}", what, value);
    ExitCode::FAILURE
}

fn print_json<T: Serialize>(report: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
