use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create recipes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recipes (
            recipe_id UUID PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL,
            request JSONB NOT NULL,
            status VARCHAR(20) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create index for status queries
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_status ON recipes(status)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at DESC)")
        .execute(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}
