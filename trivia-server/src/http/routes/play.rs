//! Quiz play endpoint - next random question

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{Question, QuizRequest};

/// `question` is omitted once the quiz has run out of questions.
#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// POST /play - draw a question not yet asked in this quiz
async fn next_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<PlayResponse>, ApiError> {
    let filter = req.category_filter()?;
    let question = state
        .store
        .random_question(filter, &req.previous_questions)
        .await?;

    if question.is_none() {
        tracing::debug!(?filter, asked = req.previous_questions.len(), "quiz exhausted");
    }

    Ok(Json(PlayResponse {
        success: true,
        question,
    }))
}

/// Play routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/play", post(next_question))
}
