//! Repository implementations for database access
//!
//! Each operation is one parameterized statement; row mapping happens
//! here so handlers never see sqlx rows.

pub mod products;

pub use products::{DbError, Product, ProductRepo};
