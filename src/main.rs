//! wordtrie CLI - batch prefix-tree queries from the command line
//!
//! Reads a query count followed by `(code, string)` pairs and prints
//! `true`/`false` for every search (`2`) and prefix query (`3`).

use anyhow::Context;
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use wordtrie::{DriverConfig, QueryDriver};

#[derive(Parser)]
#[command(name = "wordtrie")]
#[command(about = "Run insert / search / starts-with queries against a prefix tree")]
#[command(version)]
struct Cli {
    /// Query file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Do not lower-case query strings before use
    #[arg(long)]
    no_fold_case: bool,

    /// Skip queries containing symbols outside a-z instead of failing
    #[arg(long)]
    skip_invalid: bool,

    /// Print a JSON run summary to stderr
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for wordtrie::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => wordtrie::OutputFormat::Text,
            OutputFormat::Json => wordtrie::OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DriverConfig {
        format: cli.format.into(),
        fold_case: !cli.no_fold_case,
        skip_invalid: cli.skip_invalid,
    };
    let mut driver = QueryDriver::new(config);

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let summary = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            driver
                .run(BufReader::new(file), output)
                .with_context(|| format!("Failed to run queries from {}", path.display()))?
        }
        _ => driver
            .run(io::stdin().lock(), output)
            .context("Failed to run queries from stdin")?,
    };

    if cli.summary {
        eprintln!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}
