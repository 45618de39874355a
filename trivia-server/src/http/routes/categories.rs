//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{Category, Question};

/// Categories keyed by id, serialized as `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

/// GET /categories - all categories, unpaginated
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category_map(state.store.categories().await?);

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
    PageQuery(page): PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    if state.store.category(id).await?.is_none() {
        return Err(ApiError::not_found("category", id));
    }

    let all = state.store.questions_in_category(id).await?;
    let total_questions = all.len();
    let questions = page.paginate(all);
    if questions.is_empty() {
        return Err(ApiError::not_found("questions page", page.page));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: id,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}
