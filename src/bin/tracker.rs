//! Tracker CLI - Command-line interface for the fitness tracker
//!
//! Commands:
//! - report: Compute workout reports for a batch of sensor packages
//! - codes: List the recognised workout codes

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fitness_tracker::pipeline::{BatchEntry, BatchReport};
use fitness_tracker::{
    default_packages, BatchPolicy, BatchProcessor, Package, PackageReader, TrackerError,
    WorkoutKind, TRACKER_VERSION,
};

/// Tracker - workout summaries from raw sensor packages
#[derive(Parser)]
#[command(name = "tracker")]
#[command(version = TRACKER_VERSION)]
#[command(about = "Compute distance, mean speed and calories for tracked workouts", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute reports for a batch of packages
    Report {
        /// Input file path (use - for stdin); defaults to piped stdin or the demo batch
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Report failing packages and continue instead of aborting the batch
        #[arg(long, env = "TRACKER_KEEP_GOING")]
        keep_going: bool,
    },

    /// List recognised workout codes
    Codes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One report line per package
    Text,
    /// Newline-delimited JSON (one report per line)
    Ndjson,
    /// Pretty-printed JSON array of reports
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TrackerCliError> {
    match cli.command {
        Commands::Report {
            input,
            output,
            input_format,
            output_format,
            keep_going,
        } => cmd_report(
            input.as_deref(),
            &output,
            input_format,
            output_format,
            keep_going,
        ),

        Commands::Codes { json } => cmd_codes(json),
    }
}

fn cmd_report(
    input: Option<&Path>,
    output: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    keep_going: bool,
) -> Result<(), TrackerCliError> {
    let packages = load_packages(input, &input_format)?;
    if packages.is_empty() {
        return Err(TrackerCliError::NoPackages);
    }

    let policy = if keep_going {
        BatchPolicy::Continue
    } else {
        BatchPolicy::Abort
    };
    info!(packages = packages.len(), ?policy, "processing batch");

    let processor = BatchProcessor::with_policy(policy);
    match processor.process(&packages) {
        Ok(report) => write_output(output, &format_output(&processor, &report, &output_format)?),
        Err(e) => {
            // Emit what finished before the failing package, then report the abort
            if let TrackerError::BatchAborted { completed, .. } = &e {
                if !completed.entries.is_empty() {
                    write_output(output, &format_output(&processor, completed, &output_format)?)?;
                }
            }
            Err(e.into())
        }
    }
}

fn write_output(output: &Path, output_data: &str) -> Result<(), TrackerCliError> {
    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }
    Ok(())
}

fn load_packages(
    input: Option<&Path>,
    input_format: &InputFormat,
) -> Result<Vec<Package>, TrackerCliError> {
    let input_data = match input {
        Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(path)?,
        Some(_) => read_stdin()?,
        None if !atty::is(atty::Stream::Stdin) => read_stdin()?,
        None => {
            debug!("stdin is a TTY, using the demo batch");
            return Ok(default_packages());
        }
    };

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };
    Ok(packages)
}

fn read_stdin() -> Result<String, TrackerCliError> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn cmd_codes(json: bool) -> Result<(), TrackerCliError> {
    let codes: Vec<CodeInfo> = WorkoutKind::ALL
        .iter()
        .map(|kind| CodeInfo {
            code: kind.code(),
            name: kind.name(),
            fields: kind.field_names(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        println!("Workout Codes");
        println!("=============");
        for code in &codes {
            println!("  {}  {:<14} [{}]", code.code, code.name, code.fields.join(", "));
        }
    }

    Ok(())
}

// Helper functions

fn format_output(
    processor: &BatchProcessor,
    report: &BatchReport,
    format: &OutputFormat,
) -> Result<String, TrackerCliError> {
    match format {
        OutputFormat::Text => Ok(report
            .lines()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()),
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for entry in &report.entries {
                lines.push(serde_json::to_string(&entry_json(processor, entry))?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = report
                .entries
                .iter()
                .map(|entry| entry_json(processor, entry))
                .collect();
            Ok(serde_json::to_string_pretty(&entries)? + "\n")
        }
    }
}

fn entry_json(processor: &BatchProcessor, entry: &BatchEntry) -> serde_json::Value {
    match entry {
        BatchEntry::Report { info, .. } => serde_json::json!(processor.encoder().encode(info)),
        BatchEntry::Failed { .. } => serde_json::json!(entry),
    }
}

// Error types

#[derive(Debug)]
enum TrackerCliError {
    Io(io::Error),
    Tracker(TrackerError),
    Json(serde_json::Error),
    NoPackages,
}

impl From<io::Error> for TrackerCliError {
    fn from(e: io::Error) -> Self {
        TrackerCliError::Io(e)
    }
}

impl From<TrackerError> for TrackerCliError {
    fn from(e: TrackerError) -> Self {
        TrackerCliError::Tracker(e)
    }
}

impl From<serde_json::Error> for TrackerCliError {
    fn from(e: serde_json::Error) -> Self {
        TrackerCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<TrackerCliError> for CliError {
    fn from(e: TrackerCliError) -> Self {
        match e {
            TrackerCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            TrackerCliError::Tracker(e @ TrackerError::BatchAborted { .. }) => CliError {
                code: "BATCH_ABORTED".to_string(),
                message: e.to_string(),
                hint: Some("Fix the package or rerun with --keep-going".to_string()),
            },
            TrackerCliError::Tracker(e @ (TrackerError::ParseError(_) | TrackerError::JsonError(_))) => {
                CliError {
                    code: "PARSE_ERROR".to_string(),
                    message: e.to_string(),
                    hint: Some(
                        "Each package needs \"workout_type\" and \"data\" fields".to_string(),
                    ),
                }
            }
            TrackerCliError::Tracker(e) => CliError {
                code: "TRACKER_ERROR".to_string(),
                message: e.descriptor(),
                hint: Some("Run 'tracker codes' for valid workout codes".to_string()),
            },
            TrackerCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            TrackerCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct CodeInfo {
    code: &'static str,
    name: &'static str,
    fields: &'static [&'static str],
}
