//! impvol - Command Line Implied Volatility Solver
//!
//! This is the operational entry point for the implied volatility library.
//!
//! # Commands
//!
//! - `impvol solve --price <p>` - Recover the volatility implied by a market price
//! - `impvol price --volatility <σ>` - Price an option and report its vega
//! - `impvol demo` - Run the worked example under both discount conventions
//! - `impvol check` - Print the resolved configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate resolves configuration, installs the
//! tracing subscriber and delegates to `pricer_models`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs, LogLevel};
pub use error::{CliError, Result};

/// Implied volatility solver CLI
#[derive(Parser)]
#[command(name = "impvol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Discount convention (standard, discounted-spot)
    #[arg(long, global = true)]
    convention: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Market and contract inputs shared by `solve` and `price`
#[derive(Args, Debug, Clone, Copy)]
pub struct MarketArgs {
    /// Underlying spot price
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Continuously-compounded risk-free rate
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub rate: f64,

    /// Time to expiry in years
    #[arg(long, default_value_t = 1.0)]
    pub expiry: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the implied volatility from a market price
    Solve {
        #[command(flatten)]
        market: MarketArgs,

        /// Observed option price
        #[arg(short, long, default_value_t = 5.0, allow_negative_numbers = true)]
        price: f64,

        /// Initial volatility guess
        #[arg(short, long, default_value_t = 0.2)]
        guess: f64,

        /// Option type (call, put); defaults to the configured type
        #[arg(short = 't', long)]
        option_type: Option<String>,
    },

    /// Price an option at a given volatility
    Price {
        #[command(flatten)]
        market: MarketArgs,

        /// Annualised volatility
        #[arg(long, default_value_t = 0.2)]
        volatility: f64,

        /// Option type (call, put); defaults to the configured type
        #[arg(short = 't', long)]
        option_type: Option<String>,
    },

    /// Run the worked example under both discount conventions
    Demo,

    /// Check the resolved configuration
    Check,
}

fn init_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        convention: cli.convention.clone(),
        verbose: cli.verbose,
    })?;

    init_tracing(config.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Solve {
            market,
            price,
            guess,
            option_type,
        } => commands::solve::run(&config, &market, price, guess, option_type.as_deref()),
        Commands::Price {
            market,
            volatility,
            option_type,
        } => commands::price::run(&config, &market, volatility, option_type.as_deref()),
        Commands::Demo => commands::demo::run(),
        Commands::Check => commands::check::run(&config),
    }
}
