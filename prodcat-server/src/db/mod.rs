//! Database layer - connection pool, schema bootstrap, and repositories
//!
//! # Design Principles
//!
//! - Connection pool with a small bound - no Arc<Mutex<Connection>>
//! - Every operation is a single parameterized statement
//! - Zero rows affected on update/delete is a NotFound, not a silent no-op

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;
pub use schema::ensure_schema;
