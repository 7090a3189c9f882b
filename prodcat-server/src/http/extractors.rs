//! Custom Axum extractors
//!
//! Typed parsing at the boundary: bad path ids and malformed JSON bodies
//! become 400 responses here instead of propagating ad hoc.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a numeric product id from the path.
///
/// Non-numeric or negative ids are rejected with 400. Zero is let
/// through: ids start at 1, so it resolves to a 404 like any other
/// absent row.
pub struct ProductId(pub i32);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "product id" }))?;

        let id = raw
            .parse::<i32>()
            .ok()
            .filter(|id| *id >= 0)
            .ok_or(ApiError::Validation(ValidationError::InvalidFormat {
                field: "product id",
                reason: "must be a non-negative integer",
            }))?;

        Ok(Self(id))
    }
}

/// JSON body extractor whose rejection is the API's own 400 shape.
///
/// Axum's stock `Json` rejection replies with a plain-text body; the
/// contract wants `{"error": "Invalid request payload"}`.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::Payload {
                message: "Invalid request payload",
            })?;

        Ok(Self(value))
    }
}
