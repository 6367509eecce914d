//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;
use crate::recommend::scoring::CandidateProfile;
use crate::recommend::strategy::RecommendationType;
use crate::recommend::RecommendationResult;
use crate::state::AppState;

pub const MAX_TOP_K: usize = 50;

fn default_top_k() -> usize {
    5
}

/// Non-string values count as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    })
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub skills: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub sector: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub education: Option<String>,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendation_type: RecommendationType,
    pub suggestion_prompt: String,
    pub results: Vec<RecommendationResult>,
}

/// POST /api/recommend
///
/// Scores the whole catalog against the candidate profile and returns up to
/// `top_k` internships with reasons.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    if request.top_k == 0 || request.top_k > MAX_TOP_K {
        return Err(AppError::Validation(format!(
            "top_k must be between 1 and {MAX_TOP_K}"
        )));
    }

    let candidate = CandidateProfile {
        skills: request.skills,
        sector: request.sector,
        education: request.education,
        location: request.location,
        top_k: request.top_k,
    };

    let recommendation = state.recommender.recommend(&candidate);

    Ok(Json(RecommendResponse {
        recommendation_type: recommendation.recommendation_type,
        suggestion_prompt: recommendation.suggestion_prompt,
        results: recommendation.results,
    }))
}
