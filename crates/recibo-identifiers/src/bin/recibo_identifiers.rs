//! recibo-identifiers - validate, format, and extract CPF/CNPJ numbers

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use recibo_identifiers::{
    extract_identifiers, format, validate, IdentifierKind, IdentifiersConfig, OutputFormat,
    TaxIdentifier,
};

/// Validate and format Brazilian CPF / CNPJ numbers.
#[derive(Debug, Parser)]
#[command(name = "recibo-identifiers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to <config dir>/recibo/identifiers.toml).
    #[arg(long, global = true, env = "RECIBO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether each input is a valid CPF or CNPJ.
    Validate {
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print each valid input with standard punctuation.
    Format {
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Find identifiers in text (reads stdin when TEXT is omitted).
    Extract { text: Option<String> },
}

#[derive(Debug, Serialize)]
struct ValidateLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: recibo_identifiers::ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct FormatLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: recibo_identifiers::FormattedResult,
}

fn init_logging(config: &IdentifiersConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_validate(inputs: &[String], output: OutputFormat) -> Result<bool, serde_json::Error> {
    let lines: Vec<ValidateLine> = inputs
        .iter()
        .map(|input| ValidateLine {
            input,
            result: validate(input),
            reason: input.parse::<TaxIdentifier>().err().map(|e| e.to_string()),
        })
        .collect();
    let all_valid = lines.iter().all(|l| l.result.is_valid);

    match output {
        OutputFormat::Json => print_json(&lines)?,
        OutputFormat::Text => {
            for line in &lines {
                if line.result.is_valid {
                    println!("{}\tvalid {}", line.input, line.result.kind.label());
                } else {
                    let reason = line.reason.as_deref().unwrap_or("invalid identifier");
                    println!("{}\tinvalid ({})", line.input, reason);
                }
            }
        }
    }

    Ok(all_valid)
}

fn run_format(inputs: &[String], output: OutputFormat) -> Result<bool, serde_json::Error> {
    let lines: Vec<FormatLine> = inputs
        .iter()
        .map(|input| FormatLine {
            input,
            result: format(input),
        })
        .collect();
    let all_valid = lines.iter().all(|l| l.result.is_valid);

    match output {
        OutputFormat::Json => print_json(&lines)?,
        OutputFormat::Text => {
            for line in &lines {
                if line.result.is_valid {
                    println!("{}", line.result.display_value);
                } else {
                    eprintln!("invalid identifier: {}", line.input);
                }
            }
        }
    }

    Ok(all_valid)
}

fn run_extract(text: Option<String>, output: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let found = extract_identifiers(&text);
    info!(count = found.len(), "extraction finished");

    match output {
        OutputFormat::Json => print_json(&found)?,
        OutputFormat::Text => {
            for id in &found {
                let label = match id.kind {
                    IdentifierKind::None => "?",
                    kind => kind.label(),
                };
                println!("{}..{}\t{}\t{}", id.start_index, id.end_index, label, id.display_value);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match IdentifiersConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    debug!(?config, "loaded configuration");

    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let outcome: Result<bool, Box<dyn std::error::Error>> = match cli.command {
        Commands::Validate { inputs } => run_validate(&inputs, output).map_err(Into::into),
        Commands::Format { inputs } => run_format(&inputs, output).map_err(Into::into),
        Commands::Extract { text } => run_extract(text, output).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
