//! Request extractors that run the boundary checks before a handler body.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use models::identifier::parse_uuid_v4;
use models::Validate;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::JsonApiError;

pub const UUID_V4_EXPECTED: &str = "Validation failed (uuid v4 is expected)";

/// `:id` path segment, accepted only as a hyphenated UUID v4.
#[derive(Debug, Clone, Copy)]
pub struct UuidV4(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for UuidV4
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
        parse_uuid_v4(&raw)
            .map(UuidV4)
            .ok_or_else(|| JsonApiError::bad_request(UUID_V4_EXPECTED))
    }
}

/// JSON body deserialized with the payload's whitelist, then checked with
/// [`Validate`]. Nothing reaches the handler unless both pass.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}
