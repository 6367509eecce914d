use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::recommend::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Used for feedback logging only; recommendations never touch the database.
    pub db: PgPool,
    pub config: Config,
    /// Fitted once at startup and read-only afterwards.
    pub recommender: Arc<Recommender>,
}
