//! Command-line runner for the lexer.
//!
//! Reads PHP-like source from a file or from the command line, scans it
//! and prints one line per token.

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use phplex::{format_error, Lexer, Token};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEBUG_SAMPLE: &str = "# This is also a comment\n456";

/// Splits PHP-like source into classified tokens.
#[derive(Parser, Debug)]
#[command(name = "phplex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Splits PHP-like source into classified tokens", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["filename", "code", "debug"])))]
struct Cli {
    /// Read the source from a file
    #[arg(short, long)]
    filename: Option<PathBuf>,

    /// Use the given source code
    #[arg(short, long)]
    code: Option<String>,

    /// Scan a small built-in sample
    #[arg(short, long)]
    debug: bool,

    /// Report every extraction attempt
    #[arg(long, env = "PHPLEX_TRACE")]
    trace: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.trace)?;

    let (source, origin) = load_source(&cli)?;
    debug!(origin = %origin, chars = source.chars().count(), "source loaded");

    let start = Instant::now();
    let mut lexer = Lexer::new(&source);
    lexer.set_trace(cli.trace);

    match lexer.scan() {
        Ok(tokens) => {
            info!("Tokenized in {:?}", start.elapsed());
            print_tokens(&tokens);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &origin));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(trace: bool) -> Result<()> {
    let filter = if trace {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

fn load_source(cli: &Cli) -> Result<(String, String)> {
    if let Some(path) = &cli.filename {
        let source = read_to_string(path)
            .with_context(|| format!("Can't open the file {}", path.display()))?;
        return Ok((source, path.display().to_string()));
    }

    if let Some(code) = &cli.code {
        return Ok((code.clone(), String::from("<code>")));
    }

    Ok((String::from(DEBUG_SAMPLE), String::from("<debug>")))
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        token.debug();
    }
}
