//! Imports the internship catalog from CSV into the `internships` table,
//! replacing whatever was there.
//!
//! Usage: `load-data [path/to/catalog.csv]` (defaults to `CATALOG_CSV`, then
//! `pm_internship_recommendation.csv`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use internship_api::db::{create_pool, ensure_schema};
use internship_api::sources::csv_file::read_csv;
use internship_api::sources::replace_catalog;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let csv_path: PathBuf = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CATALOG_CSV").ok())
        .unwrap_or_else(|| "pm_internship_recommendation.csv".to_string())
        .into();
    let database_url = std::env::var("DATABASE_URL")
        .context("Required environment variable 'DATABASE_URL' is not set")?;

    info!("Reading catalog from {}", csv_path.display());
    let rows = read_csv(&csv_path)?;

    let pool = create_pool(&database_url).await?;
    ensure_schema(&pool).await?;

    let inserted = replace_catalog(&pool, &rows).await?;
    info!("Loaded {inserted} internships into 'internships'");

    Ok(())
}
