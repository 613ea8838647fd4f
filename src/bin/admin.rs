//! CLI administration tool for url-shortener-api.
//!
//! Runs the service operations directly against the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Print the health report
//! cargo run --bin admin -- health
//!
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Show the digest used for deduplication (HASH_ALGORITHM unless overridden)
//! cargo run --bin admin -- hash https://example.com
//! cargo run --bin admin -- hash https://example.com --algorithm md5
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `url_shortener_api::config`. `hash` needs no
//! database configuration.

use url_shortener_api::config;
use url_shortener_api::domain::entities::{ComponentStatus, HealthReport};
use url_shortener_api::server;
use url_shortener_api::utils::hasher::HashAlgorithm;
use url_shortener_api::utils::url_validator::validate_long_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing url-shortener-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the application and database health report
    Health,

    /// Create or look up the short code for a long URL
    Shorten {
        /// Long URL to shorten
        url: Option<String>,
    },

    /// Print the digest of an input string
    Hash {
        input: String,

        /// Digest algorithm (md5, sha1, sha224, sha256, sha384, sha512).
        /// Defaults to the service's `HASH_ALGORITHM`.
        #[arg(short, long, env = "HASH_ALGORITHM", default_value = "sha256")]
        algorithm: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Health => handle_health().await?,
        Commands::Shorten { url } => handle_shorten(url).await?,
        Commands::Hash { input, algorithm } => handle_hash(&input, &algorithm),
    }

    Ok(())
}

async fn handle_health() -> Result<()> {
    let config = config::load_from_env()?;
    let pool = server::connect_pool(&config).await?;
    let state = server::build_state(Arc::new(pool), &config);

    println!("{}", "🩺 Health Report".bright_blue().bold());
    println!();

    let report = state.health_service.get_health().await;
    print_report(&report, 1);
    println!();

    Ok(())
}

fn print_report(report: &HealthReport, depth: usize) {
    let status = match report.status {
        ComponentStatus::Up => report.status.to_string().green().bold(),
        ComponentStatus::Down => report.status.to_string().red().bold(),
    };
    let version = if report.component_version.is_empty() {
        "-".to_string()
    } else {
        report.component_version.clone()
    };

    println!(
        "{}{} {} {}",
        "  ".repeat(depth),
        report.component_name.cyan(),
        version.bright_black(),
        status
    );

    for child in &report.children {
        print_report(child, depth + 1);
    }
}

/// Shortens a URL with interactive prompting.
///
/// # Flow
///
/// 1. Prompt for the URL (or use provided)
/// 2. Validate it the same way the API does
/// 3. Create or reuse the short code
async fn handle_shorten(url: Option<String>) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Long URL")
            .validate_with(|input: &String| -> Result<(), String> {
                validate_long_url(input).map_err(|e| e.to_string())
            })
            .interact_text()?,
    };

    validate_long_url(&long_url).with_context(|| format!("Cannot shorten '{long_url}'"))?;

    let config = config::load_from_env()?;
    let pool = server::connect_pool(&config).await?;
    let state = server::build_state(Arc::new(pool), &config);

    let code = state
        .url_service
        .create_short_url(&long_url)
        .await
        .context("Failed to shorten URL")?;

    println!("  Long URL:   {}", long_url.cyan());
    println!("  Short code: {}", code.bright_yellow().bold());
    println!();

    Ok(())
}

fn handle_hash(input: &str, algorithm: &str) {
    let resolved = HashAlgorithm::resolve(algorithm);
    if HashAlgorithm::from_name(algorithm).is_none() {
        println!(
            "{}",
            format!(
                "⚠️  '{}' is not supported, using {}",
                algorithm,
                resolved.name()
            )
            .yellow()
        );
    }

    println!(
        "  {}: {}",
        resolved.name().bright_white(),
        resolved.digest_hex(input).bright_green()
    );
}
