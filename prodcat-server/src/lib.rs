//! prodcat-server: HTTP CRUD API for the product catalog
//!
//! Exposes list/get/create/update/delete over a single `products` table.
//! Layers: `http` (axum routes and error mapping), `db` (pool, schema,
//! repositories), `models` (validated domain types).

pub mod db;
pub mod http;
pub mod models;
