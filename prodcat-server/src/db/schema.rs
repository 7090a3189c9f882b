//! Schema bootstrap for the products table
//!
//! Run once at startup, before the server accepts requests. A failure
//! here is fatal: the process must not serve against a missing table.

use sqlx::PgPool;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL,
    name TEXT NOT NULL,
    price NUMERIC(10,2) NOT NULL DEFAULT 0.00,
    CONSTRAINT products_pkey PRIMARY KEY (id)
)
"#;

/// Ensure the products table exists.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring products schema...");

    sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;

    Ok(())
}
