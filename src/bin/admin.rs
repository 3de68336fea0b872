//! CLI administration tool for counter-shortener.
//!
//! Inspects suffix encoding and the mapping store without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the suffix a counter value maps to
//! cargo run --bin admin -- encode 501
//!
//! # Show the counter value behind a suffix
//! cargo run --bin admin -- decode 0000085
//!
//! # Check the Redis store
//! cargo run --bin admin -- store check
//!
//! # Look up or write a mapping
//! cargo run --bin admin -- store get 0000085
//! cargo run --bin admin -- store set 0000085 google.com
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/`REDIS_PASSWORD`/`REDIS_DB` for `store` commands
//! - `REDIS_KEY_PREFIX`, `STORE_TIMEOUT_SECONDS`, `SUFFIX_WIDTH` as for the server

use counter_shortener::config::{Config, mask_connection_string, validate_suffix_width};
use counter_shortener::domain::encoder::{decode, encode, max_value};
use counter_shortener::domain::repositories::UrlStore;
use counter_shortener::infrastructure::store::RedisUrlStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing counter-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Encode a counter value as a suffix
    Encode {
        num: u64,

        /// Suffix width, 1 to 10 (defaults to SUFFIX_WIDTH or 7)
        #[arg(short, long)]
        width: Option<u32>,
    },

    /// Decode a suffix back to its counter value
    Decode { suffix: String },

    /// Mapping store operations (Redis)
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check that Redis answers PING
    Check,

    /// Show the URL stored under a suffix
    Get { suffix: String },

    /// Store a mapping, asking before overwriting an existing one
    Set {
        suffix: String,
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Encode { num, width } => handle_encode(num, width.unwrap_or(config.suffix_width))?,
        Commands::Decode { suffix } => handle_decode(&suffix),
        Commands::Store { action } => handle_store_action(action, &config).await?,
    }

    Ok(())
}

fn handle_encode(num: u64, width: u32) -> Result<()> {
    validate_suffix_width(width)?;
    let suffix = encode(num, width as usize);

    println!("  {} {}", "Suffix:".bright_white().bold(), suffix.bright_yellow());

    if num > max_value(width) {
        println!(
            "  {}",
            format!(
                "⚠️  {} exceeds the {}-symbol range (max {}), suffix is {} symbols long",
                num,
                width,
                max_value(width),
                suffix.len()
            )
            .yellow()
        );
    }

    Ok(())
}

fn handle_decode(suffix: &str) {
    match decode(suffix) {
        Some(value) => println!(
            "  {} {}",
            "Counter:".bright_white().bold(),
            value.to_string().bright_yellow()
        ),
        None => println!(
            "{}",
            format!("❌ '{}' is not a valid base62 suffix", suffix).red()
        ),
    }
}

/// Dispatches store commands against the configured Redis instance.
async fn handle_store_action(action: StoreAction, config: &Config) -> Result<()> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set for store commands")?;

    println!(
        "{} {}",
        "Connecting to".bright_black(),
        mask_connection_string(redis_url).cyan()
    );

    let store = RedisUrlStore::connect(redis_url, config.store_timeout(), &config.redis_key_prefix)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect: {}", e))?;

    match action {
        StoreAction::Check => check_store(&store).await,
        StoreAction::Get { suffix } => get_mapping(&store, &suffix).await?,
        StoreAction::Set { suffix, url, yes } => set_mapping(&store, &suffix, &url, yes).await?,
    }

    Ok(())
}

async fn check_store(store: &RedisUrlStore) {
    if store.health_check().await {
        println!("{}", "✅ Redis store reachable".green().bold());
    } else {
        println!("{}", "❌ Redis store did not answer PING".red().bold());
    }
}

async fn get_mapping(store: &RedisUrlStore, suffix: &str) -> Result<()> {
    let value = store
        .load(suffix)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", suffix, e))?;

    match value {
        Some(url) => println!("  {} → {}", suffix.bright_yellow(), url.cyan()),
        None => println!("{}", format!("  No mapping for '{}'", suffix).yellow()),
    }

    Ok(())
}

/// Writes a mapping by hand.
///
/// Suffixes are normally minted by the server's counter. Writing one
/// manually can collide with a suffix the counter will hand out later.
async fn set_mapping(store: &RedisUrlStore, suffix: &str, url: &str, skip_confirm: bool) -> Result<()> {
    let existing = store
        .load(suffix)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", suffix, e))?;

    if !skip_confirm {
        let prompt = match &existing {
            Some(current) => format!("Overwrite {} → {} with {}?", suffix, current, url),
            None => format!("Store {} → {}?", suffix, url),
        };

        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(existing.is_none())
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    store
        .save(suffix, url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", suffix, e))?;

    println!("{}", "✅ Mapping stored".green().bold());
    Ok(())
}
