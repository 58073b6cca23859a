use crate::config::Config;
use derive_more::Display;
use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use std::error::Error;

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

embed_migrations!();

#[derive(Debug, Display)]
pub enum DbError {
    #[display(fmt = "failed to connect to the database: {}", _0)]
    Connect(r2d2::Error),
    #[display(fmt = "failed to run migrations: {}", _0)]
    Migrate(diesel_migrations::RunMigrationsError),
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DbError::Connect(e) => Some(e),
            DbError::Migrate(e) => Some(e),
        }
    }
}

/// Builds the connection pool. Fails if no connection can be opened.
pub fn init_pool(config: &Config) -> Result<Pool, DbError> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());

    r2d2::Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
        .map_err(DbError::Connect)
}

/// Brings the schema up to date before any request is served.
pub fn run_migrations(pool: &Pool) -> Result<(), DbError> {
    let conn = pool.get().map_err(DbError::Connect)?;

    embedded_migrations::run(&conn).map_err(DbError::Migrate)?;

    info!("Database schema is up to date");

    Ok(())
}
