//! Question search endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::Question;

/// Search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

/// POST /search - case-insensitive substring match on question text
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let questions = state.store.search_questions(&req.search_term).await?;
    tracing::debug!(term = %req.search_term, hits = questions.len(), "search");

    if questions.is_empty() {
        return Err(ApiError::not_found("search results", req.search_term));
    }

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

/// Search routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search", post(search_questions))
}
