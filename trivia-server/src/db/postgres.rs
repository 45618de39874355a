//! PostgreSQL store
//!
//! Each operation is a single statement. Columns are cast to BIGINT on the
//! way out so tables created elsewhere with INTEGER ids decode the same.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{StoreError, StoreResult, TriviaStore};
use crate::models::{Category, CategoryFilter, NewQuestion, Question};

const QUESTION_COLUMNS: &str = "id::BIGINT AS id, question, answer, \
     category::BIGINT AS category, difficulty::BIGINT AS difficulty";

const CATEGORY_COLUMNS: &str = "id::BIGINT AS id, type";

/// Store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Escape LIKE wildcards so the term matches literally.
fn like_escape(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY id");
        Ok(sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        Ok(sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY category, id");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        );
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question> {
        let sql = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) RETURNING {QUESTION_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(&new.question)
            .bind(&new.answer)
            .bind(new.category)
            .bind(new.difficulty)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::question_not_found(id));
        }
        Ok(())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE question ILIKE '%' || $1 || '%' ESCAPE '\\' ORDER BY id"
        );
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(like_escape(term))
            .fetch_all(&self.pool)
            .await?)
    }

    async fn random_question(
        &self,
        filter: CategoryFilter,
        exclude: &[i64],
    ) -> StoreResult<Option<Question>> {
        let sql = format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE ($1::BIGINT IS NULL OR category = $1) AND NOT (id = ANY($2)) \
             ORDER BY RANDOM() LIMIT 1"
        );
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(filter.category_id())
            .bind(exclude)
            .fetch_optional(&self.pool)
            .await?)
    }
}
