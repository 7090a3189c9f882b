pub mod config;
pub mod error;

pub use config::DbConfig;
pub use error::{ConfigError, Result};
