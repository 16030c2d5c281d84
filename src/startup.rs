use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::AppError};

/// Installs the global `tracing` subscriber.
///
/// Uses `RUST_LOG` when set and falls back to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Connects to the database and creates any missing tables.
///
/// Establishes a connection pool using the given connection string, then runs the
/// migrations, which only create tables and indexes that do not exist yet.
///
/// # Arguments
/// - `database_url` - Connection string, already normalized
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects to the configured database, if any.
///
/// A missing `DATABASE_URL` or a failed connection is logged and the bot continues
/// without persistence.
pub async fn connect_if_configured(config: &Config) -> Option<DatabaseConnection> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::error!("DATABASE_URL is not set; running without a database");
        return None;
    };

    match connect_to_database(url).await {
        Ok(db) => {
            tracing::info!("Connected to the database and verified tables");
            Some(db)
        }
        Err(e) => {
            tracing::error!("Failed to connect to the database: {}", e);
            None
        }
    }
}
