//! Product repository
//!
//! CRUD over the `products` table. `price` is stored as NUMERIC(10,2)
//! and read back through a FLOAT8 cast so it stays a plain JSON number
//! on the wire.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::{ListWindow, ProductDraft};

/// Product record from database
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single product by id.
    pub async fn get(&self, id: i32) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Product",
            id,
        })
    }

    /// List products ordered by id, bounded by the window.
    ///
    /// An empty table is an empty vec, never an error.
    pub async fn list(&self, window: ListWindow) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::FLOAT8 AS price FROM products \
             ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Insert a new product, returning the row with its assigned id.
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES ($1, $2) \
             RETURNING id, name, price::FLOAT8 AS price",
        )
        .bind(draft.name())
        .bind(draft.price())
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Update name and price for an existing product. The id never changes.
    ///
    /// Zero rows affected means the product does not exist.
    pub async fn update(&self, id: i32, draft: &ProductDraft) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, price = $2 WHERE id = $3 \
             RETURNING id, name, price::FLOAT8 AS price",
        )
        .bind(draft.name())
        .bind(draft.price())
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Product",
            id,
        })
    }

    /// Delete a product by id.
    ///
    /// Zero rows affected means the product does not exist; a repeated
    /// delete is a clean NotFound, never a storage error.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Product",
                id,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, ensure_schema};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p prodcat-server -- --ignored

    async fn fresh_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        ensure_schema(&pool).await.expect("schema bootstrap failed");
        sqlx::query("DELETE FROM products")
            .execute(&pool)
            .await
            .expect("clear failed");
        sqlx::query("ALTER SEQUENCE products_id_seq RESTART WITH 1")
            .execute(&pool)
            .await
            .expect("sequence reset failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let pool = fresh_pool().await;
        let repo = ProductRepo::new(&pool);

        let draft = ProductDraft::new("test product", 11.72).unwrap();
        let created = repo.create(&draft).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "test product");
        assert_eq!(created.price, 11.72);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn empty_table_lists_empty() {
        let pool = fresh_pool().await;
        let repo = ProductRepo::new(&pool);

        let products = repo.list(ListWindow::default()).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_keeps_id() {
        let pool = fresh_pool().await;
        let repo = ProductRepo::new(&pool);

        let created = repo
            .create(&ProductDraft::new("before", 1.00).unwrap())
            .await
            .unwrap();

        let updated = repo
            .update(created.id, &ProductDraft::new("after", 11.22).unwrap())
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "after");
        assert_eq!(updated.price, 11.22);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_rows_are_not_found() {
        let pool = fresh_pool().await;
        let repo = ProductRepo::new(&pool);

        assert!(matches!(
            repo.get(11).await,
            Err(DbError::NotFound { id: 11, .. })
        ));
        assert!(matches!(
            repo.update(11, &ProductDraft::new("x", 1.0).unwrap()).await,
            Err(DbError::NotFound { id: 11, .. })
        ));
        assert!(matches!(
            repo.delete(11).await,
            Err(DbError::NotFound { id: 11, .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_respects_window() {
        let pool = fresh_pool().await;
        let repo = ProductRepo::new(&pool);

        for i in 0..15 {
            repo.create(&ProductDraft::new(&format!("Product {}", i), (i + 1) as f64 * 10.0).unwrap())
                .await
                .unwrap();
        }

        let first_page = repo.list(ListWindow::default()).await.unwrap();
        assert_eq!(first_page.len(), 10);
        assert_eq!(first_page[0].id, 1);

        let second_page = repo.list(ListWindow::new(10, 10)).await.unwrap();
        assert_eq!(second_page.len(), 5);
        assert_eq!(second_page[0].id, 11);
    }
}
