use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use accvm::dump::{write_memory, write_registers};
use accvm::{exec::IntExecutor, isa::acc32::Acc32Decoder, Cpu, CpuConfig, RunFlags, WordMemory};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Show the registers after every instruction
    Trace,
    /// Dump memory as loaded, without executing
    Before,
    /// Dump memory after execution halts
    After,
}

impl Mode {
    fn flags(self) -> RunFlags {
        match self {
            Mode::Trace => RunFlags::TRACE,
            Mode::Before => RunFlags::DUMP_BEFORE,
            Mode::After => RunFlags::DUMP_AFTER,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Parser, Debug)]
#[command(author, version, about = "Run an object file on the accumulator machine")]
struct Opts {
    #[arg(value_enum)]
    mode: Mode,
    #[arg(value_name = "OBJFILE")]
    input: PathBuf,
    /// Pad memory with zero words up to this many words
    #[arg(long, value_name = "N")]
    memory_words: Option<usize>,
    /// Stop with an error after this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,
    /// Trace output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();
    let bytes = std::fs::read(&opts.input)
        .with_context(|| format!("failed to open file '{}'", opts.input.display()))?;
    let mut mem = WordMemory::from_object(&bytes)?;
    if let Some(n) = opts.memory_words {
        mem.grow_to(n);
    }
    tracing::info!(words = mem.words.len(), file = %opts.input.display(), "loaded");

    let flags = opts.mode.flags();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if flags.contains(RunFlags::DUMP_BEFORE) {
        write_memory(&mut out, &mem.words)?;
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut cpu = Cpu::new(CpuConfig { max_steps: opts.max_steps });
    cpu.reset(0);
    let dec = Acc32Decoder::new();
    let exec = IntExecutor;

    let trace = flags.contains(RunFlags::TRACE);
    let mut io_err = None;
    let result = cpu.run(&mut mem, &dec, &exec, |cpu| {
        if !trace || io_err.is_some() {
            return;
        }
        let r = match opts.format {
            OutputFormat::Text => write_registers(&mut out, cpu),
            OutputFormat::Json => serde_json::to_writer(&mut out, cpu)
                .map_err(io::Error::from)
                .and_then(|_| writeln!(out)),
        };
        if let Err(e) = r {
            io_err = Some(e);
        }
    });
    if let Some(e) = io_err {
        return Err(e.into());
    }

    match result {
        Ok(steps) => {
            tracing::info!(steps, "halted");
            if flags.contains(RunFlags::DUMP_AFTER) {
                write_memory(&mut out, &mem.words)?;
            }
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(trap) => {
            out.flush()?;
            eprintln!("error: {trap}");
            Ok(ExitCode::FAILURE)
        }
    }
}
