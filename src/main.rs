//! Binary entrypoint for jws-config.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use jws_config::config::{CONFIG_FILE_NAME, Configuration};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "jws-config", about = "Wallpaper rotation config tool")]
struct Cli {
    /// Path to the config file (defaults to ~/.jws)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the parsed config
    Show,
    /// Validate the config and report problems
    Check,
    /// Rewrite the config file in canonical form
    Normalize,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("jws_config={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.config {
        return Ok(path.clone());
    }
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(CONFIG_FILE_NAME))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let path = config_path(&cli)?;
    let cfg = Configuration::from_file(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    match cli.command {
        Command::Show => {
            print!("{}", cfg.summary());
        }
        Command::Check => {
            let report = cfg.check_consistency();
            for problem in report.problems() {
                println!("problem: {problem}");
            }
            for warning in report.warnings() {
                println!("warning: {warning}");
            }
            if !report.is_valid() {
                bail!("config {} is not consistent", path.display());
            }
            println!("{} is consistent", path.display());
        }
        Command::Normalize => {
            cfg.write_to_file(&path)
                .with_context(|| format!("rewriting config at {}", path.display()))?;
            info!(path = %path.display(), "config rewritten in canonical form");
        }
    }
    Ok(())
}
