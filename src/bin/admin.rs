//! CLI administration tool for recipe-api.
//!
//! Provides commands for managing accounts, waiting on the database during
//! deployment, and viewing row counts without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a superuser account
//! cargo run --bin admin -- user create-superuser
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Block until the database accepts connections (for entrypoint scripts)
//! cargo run --bin admin -- db wait
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View row counts
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use recipe_api::application::services::UserService;
use recipe_api::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing recipe-api.
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
    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a superuser account
    CreateSuperuser {
        /// Email address (prompted if not provided)
        #[arg(short, long)]
        email: Option<String>,

        /// Display name (prompted if not provided)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Wait until the database accepts connections
    Wait {
        /// Give up after this many seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    // `db wait` must not require an up-front connection.
    if let Commands::Db {
        action: DbAction::Wait { timeout },
    } = &cli.command
    {
        return wait_for_db(&database_url, *timeout).await;
    }

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))));

    match action {
        UserAction::CreateSuperuser { email, name, yes } => {
            create_superuser(service, email, name, yes).await?;
        }
        UserAction::List => {
            list_users(pool).await?;
        }
    }

    Ok(())
}

/// Creates a superuser account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email and name (or use provided)
/// 2. Prompt for password with confirmation (never echoed)
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash the password and store the account with staff+superuser flags
async fn create_superuser(
    service: UserService<PgUserRepository>,
    email: Option<String>,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create superuser".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Name")
            .allow_empty(true)
            .interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    println!();
    println!("  Email: {}", email.cyan());
    println!("  Name:  {}", name.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this superuser?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .create_superuser(&email, &password, &name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create superuser: {}", e))?;

    println!();
    println!(
        "{} {}",
        "Superuser created:".green().bold(),
        user.email.bright_yellow()
    );

    Ok(())
}

/// Lists all accounts with status indicators.
///
/// # Output Format
///
/// ```text
/// Accounts
///
///   ID  Email                          Created              Flags
///   ─────────────────────────────────────────────────────────────
///   1   admin@example.com              2026-01-15 10:30     superuser
///   2   user@example.com               2026-01-16 14:20
/// ```
async fn list_users(pool: &PgPool) -> Result<()> {
    use recipe_api::domain::repositories::UserRepository;

    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    println!("{}", "Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold(),
        "Flags".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for user in &users {
        let mut flags = Vec::new();
        if user.is_superuser {
            flags.push("superuser");
        } else if user.is_staff {
            flags.push("staff");
        }
        if !user.is_active {
            flags.push("inactive");
        }

        println!(
            "  {:<4} {:<30} {:<20} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            flags.join(",").yellow()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());

    Ok(())
}

/// Displays row counts per table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let recipes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
        .fetch_one(pool)
        .await?;

    let tags: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
        .fetch_one(pool)
        .await?;

    let ingredients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
        .fetch_one(pool)
        .await?;

    println!("  Users:       {}", users.to_string().bright_green().bold());
    println!("  Recipes:     {}", recipes.to_string().bright_green().bold());
    println!("  Tags:        {}", tags.to_string().bright_green().bold());
    println!(
        "  Ingredients: {}",
        ingredients.to_string().bright_green().bold()
    );

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Wait { .. } => unreachable!("handled before connecting"),
    }

    Ok(())
}

/// Polls the database until it accepts connections or the timeout elapses.
///
/// Intended for container entrypoints: `admin db wait && admin user ...`.
async fn wait_for_db(database_url: &str, timeout_secs: u64) -> Result<()> {
    println!("{}", "Waiting for database...".bright_blue());

    let deadline = std::time::Instant::now() + Duration::from_secs(timeout_secs);

    loop {
        match PgPool::connect(database_url).await {
            Ok(pool) => {
                if sqlx::query("SELECT 1").fetch_one(&pool).await.is_ok() {
                    println!("{}", "Database available".green().bold());
                    return Ok(());
                }
            }
            Err(e) => {
                println!("  {} {}", "unavailable:".yellow(), e);
            }
        }

        if std::time::Instant::now() >= deadline {
            anyhow::bail!("Database unavailable after {} seconds", timeout_secs);
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}
