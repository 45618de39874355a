//! Schema bootstrap for the trivia tables

use sqlx::PgPool;

/// Create the `categories` and `questions` tables if they are missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category BIGINT NOT NULL REFERENCES categories(id),
            difficulty BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category, id)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}
