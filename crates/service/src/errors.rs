use std::fmt::Display;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(kind: &str, id: impl Display) -> Self {
        Self::NotFound(format!("{kind} with id {id} not found"))
    }

    pub fn empty_collection(collection: &str) -> Self {
        Self::NotFound(format!("No {collection} found"))
    }

    pub fn id_mismatch(path_id: Uuid, body_id: &str) -> Self {
        Self::Validation(format!("id mismatch: body id {body_id} does not match path id {path_id}"))
    }
}
