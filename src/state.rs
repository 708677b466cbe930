use std::sync::Arc;

use sqlx::sqlite::SqlitePool;

use super::{config::Config, database::init_pool, error::AppError};

/// Shared per-process state, passed explicitly to every handler. The
/// pool is the only handle to the store; there is no ambient global.
pub struct AppState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl AppState {
    pub async fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load();
        let pool = init_pool(&config.database_url).await?;

        Ok(Arc::new(Self { config, pool }))
    }
}
