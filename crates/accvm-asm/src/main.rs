use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use accvm_asm::assemble_file;

#[derive(Parser, Debug)]
#[command(author, version, about = "Assembler for the accumulator machine", long_about = None)]
struct Cli {
    /// Source files; each one produces an object file with extension `.o`
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,
    /// Diagnostics format on stderr
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut failed = false;

    for input in &cli.inputs {
        tracing::debug!(file = %input.display(), "assembling");
        // I/O problems are fatal for the whole run
        let report = assemble_file(input)?;
        match cli.format {
            OutputFormat::Text => {
                for d in &report.diagnostics {
                    eprintln!("{d}");
                }
            }
            OutputFormat::Json => eprintln!("{}", serde_json::to_string(&report)?),
        }
        failed |= !report.ok();
    }

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
