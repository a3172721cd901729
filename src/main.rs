use anyhow::Result;
use clap::{Parser, Subcommand};
use fridgekit::config::Config;
use fridgekit_shared::{SqliteStore, State};
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions};

/// fridgekit - kitchen inventory, shopping lists and recipes
#[derive(Parser)]
#[command(name = "fridgekit")]
#[command(about = "Maintenance commands for the fridgekit store", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Delete expired inventory items once
    Purge {
        /// Purge even when auto-delete is switched off in settings
        #[arg(long)]
        force: bool,
    },
    /// Run the expiry purge on the configured schedule until Ctrl-C
    Watch,
    /// Print every stored collection as JSON
    Export,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fridgekit::observability::init_observability(
        &config.observability.log_level,
        fridgekit::observability::is_production(),
    )?;

    match cli.command {
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Purge { force } => purge_command(config, force).await,
        Commands::Watch => watch_command(config).await,
        Commands::Export => export_command(config).await,
    }
}

async fn connect(config: &Config) -> Result<State<SqliteStore>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;

    Ok(State::new(SqliteStore::new(pool)))
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;

    fridgekit_db::migrate(&db_pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn purge_command(config: Config, force: bool) -> Result<()> {
    let state = connect(&config).await?;
    let inventory = fridgekit_inventory::Command::new(state);

    let removed = if force {
        inventory.purge_expired().await?
    } else {
        inventory.purge_expired_if_enabled().await?
    };

    tracing::info!(removed, "Purge completed");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn watch_command(config: Config) -> Result<()> {
    if !config.scheduler.enabled {
        tracing::warn!("Scheduler is disabled in configuration, nothing to watch");

        return Ok(());
    }

    let state = connect(&config).await?;
    let mut sched =
        fridgekit::scheduler::purge_scheduler(state, &config.scheduler.purge_cron).await?;
    sched.start().await?;
    tracing::info!(cron = %config.scheduler.purge_cron, "Purge scheduler started");

    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down purge scheduler");
    sched.shutdown().await?;

    Ok(())
}

async fn export_command(config: Config) -> Result<()> {
    let state = connect(&config).await?;
    let snapshot = fridgekit::export::snapshot(&state.store).await?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
