use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackRow {
    pub id: i64,
    pub user_id: String,
    pub internship_id: i64,
    pub event_type: String,
    pub created_at: DateTime<Utc>,
}
