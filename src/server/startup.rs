use sea_orm::DatabaseConnection;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{config::Config, error::AppError, service::account::AccountService};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter of `info,sqlx=warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the URL and pool size from configuration,
/// then runs all pending SeaORM migrations so the schema is up-to-date. This
/// function must complete successfully before the application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the super admin from `SEED_ADMIN_EMAIL`/`SEED_ADMIN_PASSWORD` if none exists.
pub async fn seed_super_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(seed) = &config.seed_admin else {
        return Ok(());
    };

    match AccountService::new(db, config.bcrypt_cost)
        .ensure_super_admin(&seed.email, &seed.password)
        .await?
    {
        Some(user) => tracing::info!("Created super admin {} ({})", user.id, user.email),
        None => tracing::debug!("Super admin already present, skipping seed"),
    }

    Ok(())
}
