// User feedback on recommendations. Recorded for later analysis; scoring never reads it.

pub mod handlers;

use sqlx::PgPool;

use crate::models::feedback::FeedbackRow;

/// Appends one feedback event.
pub async fn record_feedback(
    pool: &PgPool,
    user_id: &str,
    internship_id: i64,
    event_type: &str,
) -> Result<FeedbackRow, sqlx::Error> {
    sqlx::query_as::<_, FeedbackRow>(
        r#"
        INSERT INTO user_feedback (user_id, internship_id, event_type)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, internship_id, event_type, created_at
        "#,
    )
    .bind(user_id)
    .bind(internship_id)
    .bind(event_type)
    .fetch_one(pool)
    .await
}
