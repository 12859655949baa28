//! CLI administration tool for urlshort.
//!
//! Works directly against the database, without going through the HTTP
//! server.
//!
//! # Usage
//!
//! ```bash
//! # Check the database connection
//! cargo run --bin admin -- db check
//!
//! # Create the links table
//! cargo run --bin admin -- db init
//!
//! # List stored links
//! cargo run --bin admin -- links list --limit 20
//!
//! # Count stored links
//! cargo run --bin admin -- links count
//!
//! # Shorten a URL
//! cargo run --bin admin -- links add example.com/some/page
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `BASE_URL`, `CODE_LENGTH`, `CODE_MAX_ATTEMPTS` (used by `links add`)

use urlshort::application::services::{LinkService, LinkSettings};
use urlshort::config::{self, Config, mask_connection_string};
use urlshort::domain::repositories::LinkRepository;
use urlshort::domain::store::LinkStore;
use urlshort::infrastructure::persistence::{self, PgLinkRepository};
use urlshort::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing urlshort.
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
    /// Manage stored links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List stored links ordered by identifier
    List {
        /// Maximum number of links to print
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },

    /// Count stored links
    Count,

    /// Shorten a URL
    Add {
        /// The URL to shorten
        url: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the links table if missing
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_* components) must be set")?;

    let pool = persistence::connect(&database_url, &config.pool_settings())
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: PgPool, config: &Config) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    match action {
        LinkAction::List { limit } => list_links(repo, limit).await?,
        LinkAction::Count => count_links(repo).await?,
        LinkAction::Add { url } => add_link(repo, url, config).await?,
    }

    Ok(())
}

/// Prints stored links as an aligned table.
async fn list_links(repo: Arc<PgLinkRepository>, limit: usize) -> Result<()> {
    let mut links = repo
        .fetch_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch links: {}", e))?;

    if links.is_empty() {
        println!("{}", "No links stored yet".yellow());
        return Ok(());
    }

    links.sort_by(|a, b| a.id.cmp(&b.id));

    println!("{}", "Stored links".bright_blue().bold());
    println!();
    println!("  {:<10} {}", "ID".bright_white().bold(), "URL".bright_white().bold());

    for link in links.iter().take(limit) {
        println!("  {:<10} {}", link.id.cyan(), link.url);
    }

    if links.len() > limit {
        println!();
        println!(
            "{}",
            format!("… and {} more", links.len() - limit).bright_black()
        );
    }

    Ok(())
}

/// Prints the number of stored links.
async fn count_links(repo: Arc<PgLinkRepository>) -> Result<()> {
    let links = repo
        .fetch_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch links: {}", e))?;

    println!("{} {}", "Links:".bright_white().bold(), links.len().to_string().cyan());
    Ok(())
}

/// Shortens a URL through the same service the HTTP server uses.
async fn add_link(repo: Arc<PgLinkRepository>, url: String, config: &Config) -> Result<()> {
    let store = Arc::new(LinkStore::new(repo));
    store
        .load_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load links: {}", e))?;

    let service = LinkService::new(store, CodeGenerator::new(), LinkSettings::from(config));

    match service.shorten(&url).await {
        Ok(link) => {
            println!("{}", "✅ Link created".green().bold());
            println!("  URL:   {}", link.url);
            println!("  Short: {}", service.short_url(&link.id).bright_yellow().bold());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Err(anyhow::anyhow!("Failed to shorten {}", url))
        }
    }
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking database connection... ");
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database query failed")?;
            println!("{}", "✅ OK".green().bold());
        }
        DbAction::Init => {
            print!("Applying migrations... ");
            persistence::run_migrations(pool)
                .await
                .context("Failed to apply migrations")?;
            println!("{}", "✅ Done".green().bold());
        }
    }

    Ok(())
}
