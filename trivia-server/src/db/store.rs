//! Store trait and typed store errors

use async_trait::async_trait;

use crate::models::{Category, CategoryFilter, NewQuestion, Question};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure, classified so handlers can branch on kind
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),
}

impl StoreError {
    pub fn question_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "question",
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource: "row",
                id: String::new(),
            },
            sqlx::Error::Database(ref db) if db.constraint().is_some() => {
                Self::Constraint(db.message().to_owned())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Unavailable(e.to_string()),
            other => Self::Query(other.to_string()),
        }
    }
}

/// Access to the question and category tables.
///
/// Every listing is returned fully ordered; pagination happens above the
/// store.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    async fn category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// All questions ordered by (category, id).
    async fn questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions of one category ordered by id.
    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>>;

    async fn question(&self, id: i64) -> StoreResult<Option<Question>>;

    async fn count_questions(&self) -> StoreResult<i64>;

    /// Insert and return the stored record with its new id.
    async fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question>;

    /// Delete by id; `NotFound` if no row was removed.
    async fn delete_question(&self, id: i64) -> StoreResult<()>;

    /// Case-insensitive substring match on question text, ordered by id.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// One question drawn uniformly at random from the filter, skipping
    /// `exclude`. `None` once every candidate has been asked.
    async fn random_question(
        &self,
        filter: CategoryFilter,
        exclude: &[i64],
    ) -> StoreResult<Option<Question>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_failures_are_unavailable() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn not_found_display() {
        assert_eq!(
            StoreError::question_not_found(9).to_string(),
            "not found: question '9'"
        );
    }
}
