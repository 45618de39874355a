//! Question endpoints - listing, deletion and creation

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use super::categories::{category_map, CategoryMap};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{NewQuestion, NewQuestionRequest, Pagination, Question};

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<i64>,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: i64,
}

/// GET /questions - one page of all questions, ordered by category then id
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let questions = page.paginate(state.store.questions().await?);
    if questions.is_empty() {
        return Err(ApiError::not_found("questions page", page.page));
    }

    let categories = category_map(state.store.categories().await?);
    let total_questions = state.store.count_questions().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: None,
        categories,
    }))
}

/// DELETE /questions/{id} - remove a question, return the refreshed first page
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<DeleteResponse>, ApiError> {
    if state.store.question(id).await?.is_none() {
        return Err(ApiError::not_found("question", id));
    }

    // A concurrent delete between lookup and here surfaces as NotFound.
    state.store.delete_question(id).await?;
    tracing::info!(id, "question deleted");

    let questions = Pagination::default().paginate(state.store.questions().await?);
    let total_questions = state.store.count_questions().await?;

    Ok(Json(DeleteResponse {
        success: true,
        deleted: id,
        questions,
        total_questions,
    }))
}

/// POST /questions/add - validate and insert a new question
async fn add_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<NewQuestionRequest>,
) -> Result<Json<CreateResponse>, ApiError> {
    let new = NewQuestion::new(req)?;
    let question = state.store.insert_question(&new).await?;
    tracing::info!(id = question.id, category = question.category, "question created");

    Ok(Json(CreateResponse {
        success: true,
        created: question.id,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/add", post(add_question))
}
