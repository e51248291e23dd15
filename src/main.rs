use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    config::{Config, FailurePolicy},
    geocoder::{OpenAddresses, DEFAULT_BASE_URL},
};

mod batch;
mod config;
mod error;
mod geocoder;
mod model;
mod reader;
mod stats;
mod utils;
mod writer;

/// Field delimiter for both the input and the output file.
pub const DELIMITER: u8 = b';';

/// Geocode postal addresses from a semicolon separated file
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Input file, header must be `postcode;city;street;housenumber`
    #[arg(default_value = "input.csv")]
    input: PathBuf,

    /// Output file, overwritten if it exists
    #[arg(default_value = "out.csv")]
    output: PathBuf,

    /// Base URL of the address lookup service
    #[arg(long, env = "BATCHGEOCODE_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Record failed lookups without coordinates instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// More log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(self) -> Config {
        Config {
            input: self.input,
            output: self.output,
            base_url: self.url,
            policy: if self.keep_going {
                FailurePolicy::Skip
            } else {
                FailurePolicy::Abort
            },
        }
    }
}

fn main() -> Result<()> {
    // optional, only used for BATCHGEOCODE_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = cli.config();
    let geocoder = OpenAddresses::new(&config.base_url);
    batch::run(&config, &geocoder)
        .with_context(|| format!("Failed to geocode {}", config.input.display()))?;

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let directives = log_directives(verbose, quiet, env::var(EnvFilter::DEFAULT_ENV).ok());
    fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_target(false)
        .init();
}

/// `RUST_LOG` when set, otherwise the level picked by the verbosity flags.
fn log_directives(verbose: u8, quiet: bool, rust_log: Option<String>) -> String {
    if let Some(x) = rust_log.filter(|x| !x.trim().is_empty()) {
        return x;
    }
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };
    level.as_str().to_lowercase()
}
