//! One-shot ingestion pass: reads the source JSON dump, normalizes it,
//! and replaces the stored collection. `RUST_LOG=info` shows the report.

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use recipes_api::{config::Config, database::init_pool, ingest};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.recipes_path.clone());

    let pool = init_pool(&config.database_url)
        .await
        .expect("Database misconfigured!");

    match ingest::run(&pool, &path).await {
        Ok(report) => {
            info!(
                "Ingestion complete: {} recipes stored, {} skipped",
                report.stored, report.skipped
            );
        }
        Err(e) => {
            error!("Ingestion failed: {e}");
            std::process::exit(1);
        }
    }
}
