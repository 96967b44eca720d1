use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use jparse::{
    parser::config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE},
    BufferReader, Config, Cursor, FileReader, LoadError, MmapReader, Parser, Value,
};

#[derive(Debug, ClapParser)]
#[command(
    name = "jparse",
    version,
    about = "Check that a JSON document parses and summarize its root"
)]
struct Args {
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Byte source used to read the file
    #[arg(short, long, value_enum, default_value_t = Source::Mmap)]
    source: Source,

    /// Maximum nesting depth (0 means unlimited)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u16,

    /// Maximum input size in bytes (0 means unlimited)
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    /// Read the whole file into memory first
    Buffer,
    /// Buffered sequential reads
    File,
    /// Memory-map the file
    Mmap,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::new(args.max_depth, args.max_size);
    info!(path = %args.input.display(), source = ?args.source, "checking document");

    let value = match args.source {
        Source::Buffer => {
            let bytes = std::fs::read(&args.input)
                .with_context(|| format!("failed to read input file {}", args.input.display()))?;
            parse_with(&mut BufferReader::new(&bytes), config)?
        }
        Source::File => {
            let mut reader = FileReader::open(&args.input)
                .with_context(|| format!("failed to open input file {}", args.input.display()))?;
            let value = parse_with(&mut reader, config);
            if let Some(e) = reader.take_io_error() {
                return Err(LoadError::from(e))
                    .with_context(|| format!("failed to read input file {}", args.input.display()));
            }
            value?
        }
        Source::Mmap => {
            let mut reader = MmapReader::open(&args.input);
            if let Some(e) = reader.take_error() {
                return Err(LoadError::from(e))
                    .with_context(|| format!("failed to map input file {}", args.input.display()));
            }
            parse_with(&mut reader, config)?
        }
    };

    println!("ok: {}", summarize(&value));
    Ok(())
}

fn parse_with<C: Cursor + ?Sized>(cursor: &mut C, config: Config) -> Result<Value> {
    let mut parser = Parser::with_config(cursor, config);
    match parser.parse() {
        Ok(value) => Ok(value),
        Err(e) => Err(e).with_context(|| format!("{} error", parser.error_code())),
    }
}

fn summarize(value: &Value) -> String {
    match value {
        Value::Object(o) => format!("object with {} keys", o.len()),
        Value::Array(a) => format!("array with {} elements", a.len()),
        other => other.kind().to_string(),
    }
}
