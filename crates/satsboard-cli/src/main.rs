//! Satsboard CLI
//!
//! Bitcoin supply figures for a block height supplied on the command line.

mod config;
mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use satsboard_core::{duration_phrase_from_block_count, format_number, NumberFormat, SupplySchedule};
use satsboard_economics::{DashboardSnapshot, SpotPrice};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CliConfig, LoggingConfig};

#[derive(Parser)]
#[command(name = "satsboard")]
#[command(version)]
#[command(about = "Bitcoin supply, halving and dashboard statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "~/.satsboard/satsboard.toml")]
    config: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Every dashboard statistic at a block height
    Snapshot {
        /// Block height
        #[arg(long)]
        height: u64,

        /// Spot price of one coin in the display currency
        #[arg(short, long)]
        price: Option<f64>,

        /// Population for the per-person share
        #[arg(long)]
        population: Option<u64>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Coins mined before a block height
    Supply {
        #[arg(long)]
        height: u64,
    },

    /// Block reward at a block height
    Reward {
        #[arg(long)]
        height: u64,
    },

    /// Halving epoch and the next halving
    Halving {
        #[arg(long)]
        height: u64,
    },

    /// Approximate wall-clock time for a number of blocks
    Duration {
        #[arg(long)]
        blocks: u64,
    },

    /// Format a number for display
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(short, long, value_enum, default_value_t = FormatStyle::Commas)]
        style: FormatStyle,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatStyle {
    /// 1,234,567.5
    Commas,
    /// 1.23 million
    Words,
}

impl From<FormatStyle> for NumberFormat {
    fn from(style: FormatStyle) -> Self {
        match style {
            FormatStyle::Commas => NumberFormat::FullNumberWithCommas,
            FormatStyle::Words => NumberFormat::NumberAndWord,
        }
    }
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { logging.level.as_str() };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so stdout stays clean for piped output
    if logging.is_json() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn expand_path(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(rest) = path_str.strip_prefix('~') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches('/'));
            }
        }
    }
    path.to_path_buf()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = expand_path(&cli.config);
    let config = CliConfig::load(&config_path)?;
    init_logging(&config.logging, cli.verbose);
    tracing::debug!("Config: {:?}", config_path);

    let schedule = SupplySchedule::bitcoin();

    match cli.command {
        Commands::Snapshot {
            height,
            price,
            population,
            json,
        } => {
            let price = price.map(SpotPrice::new).transpose()?;
            let population = population.unwrap_or(config.population.world);

            let snapshot = DashboardSnapshot::compute(&schedule, height, price, population)?;

            if json || config.display.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                println!(
                    "{}",
                    render::render_snapshot(&snapshot, &config.display.currency_symbol)
                );
            }
        }

        Commands::Supply { height } => {
            let supply = schedule.mined_supply_at_height(height);
            println!("{} ({} sats)", supply, supply.to_sat());
        }

        Commands::Reward { height } => {
            let reward = schedule.block_reward_at_height(height);
            println!("{} ({} sats)", reward, reward.to_sat());
        }

        Commands::Halving { height } => {
            println!("{}", render::render_halving(&schedule, height));
        }

        Commands::Duration { blocks } => {
            println!("{}", duration_phrase_from_block_count(blocks));
        }

        Commands::Format { value, style } => {
            println!("{}", format_number(value, style.into()));
        }
    }

    Ok(())
}
