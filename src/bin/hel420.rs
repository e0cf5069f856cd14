// src/bin/hel420.rs
//! HEL-420 hash generator — SHA-256 with custom mixing

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use hel420::config::{self, Config};
use hel420::consts::ALGORITHM_NAME;
use hel420::core::digest_from_hex;
use hel420::{to_json, Digest32, HashReport, Hel420, Hel420Hasher, OutputFormat};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "file"])))]
struct Args {
    /// Input string to hash
    #[arg(short, long)]
    input: Option<String>,

    /// Hash the raw contents of a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Mixing rounds (overrides config)
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print only the digest in text mode
    #[arg(long)]
    no_header: bool,

    /// Config file (default: $HEL420_CONFIG or ./hel420.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Expected hex digest; exit with status 1 on mismatch
    #[arg(long, value_parser = digest_from_hex)]
    verify: Option<Digest32>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let conf: Config = match &args.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load().context("Failed to load config")?.clone(),
    };
    debug!(?conf, "effective config");

    let rounds = args.rounds.unwrap_or(conf.mixer.rounds);
    let format = args.format.unwrap_or(conf.output.format);
    let header = conf.output.header && !args.no_header;
    let pipeline = Hel420::new().with_rounds(rounds);

    let report = if let Some(text) = &args.input {
        HashReport::generate(&pipeline, text.as_bytes())
    } else if let Some(path) = &args.file {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut hasher = Hel420Hasher::new();
        let len = std::io::copy(&mut BufReader::new(file), &mut hasher)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        info!(path = %path.display(), bytes = len, "hashed file");
        let len = usize::try_from(len)
            .with_context(|| format!("{} is too large to report", path.display()))?;
        HashReport::from_base(&pipeline, hasher.finalize_base(), len)
    } else {
        bail!("either --input or --file is required");
    };

    match format {
        OutputFormat::Json => println!("{}", to_json(&report)?),
        _ => {
            if header {
                println!("{ALGORITHM_NAME} hash:");
            }
            println!("{}", report.hash);
        }
    }

    if let Some(expected) = &args.verify {
        if hex::encode(expected) != report.hash {
            eprintln!("MISMATCH: expected {}", hex::encode(expected));
            return Ok(ExitCode::FAILURE);
        }
        eprintln!("OK");
    }

    Ok(ExitCode::SUCCESS)
}
