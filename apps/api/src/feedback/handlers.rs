use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::feedback::record_feedback;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub internship_id: i64,
    pub event_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub status: String,
}

/// POST /api/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let user_id = req.user_id.trim();
    let event_type = req.event_type.trim();
    if user_id.is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    if event_type.is_empty() {
        return Err(AppError::Validation("event_type cannot be empty".to_string()));
    }
    if !state.recommender.contains_internship(req.internship_id) {
        return Err(AppError::NotFound(format!(
            "Internship {} not found",
            req.internship_id
        )));
    }

    let row = record_feedback(&state.db, user_id, req.internship_id, event_type).await?;
    info!(
        "Feedback {} logged: user={} internship={} event={}",
        row.id, row.user_id, row.internship_id, row.event_type
    );

    Ok(Json(FeedbackResponse {
        status: "feedback logged".to_string(),
    }))
}
