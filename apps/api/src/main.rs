use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use internship_api::config::Config;
use internship_api::db::{create_pool, ensure_schema};
use internship_api::recommend::weights::RecommenderConfig;
use internship_api::recommend::{EngineParams, Recommender};
use internship_api::routes::{build_cors_layer, build_router};
use internship_api::sources::{CatalogSource, CsvCatalog, PgCatalog};
use internship_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting internship recommendation API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Load the catalog once; it stays read-only for the process lifetime
    let source: Box<dyn CatalogSource> = match &config.catalog_csv {
        Some(path) => Box::new(CsvCatalog::new(path.clone())),
        None => Box::new(PgCatalog::new(db.clone())),
    };
    let catalog = source
        .load()
        .await
        .with_context(|| format!("failed to load catalog from {}", source.describe()))?;
    info!("Loaded {} internships from {}", catalog.len(), source.describe());

    // Fit the recommender; any configuration error is fatal before serving
    let recommender_config = RecommenderConfig::from_path(&config.recommender_config_path)?;
    let recommender = Recommender::build(catalog, recommender_config, EngineParams::default())?;

    let cors = build_cors_layer(&config.cors_allowed_origins)?;

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        recommender: Arc::new(recommender),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
