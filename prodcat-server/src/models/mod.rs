//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod listing;
pub mod product;
pub mod validation;

pub use listing::ListWindow;
pub use product::ProductDraft;
pub use validation::ValidationError;
