use thiserror::Error;

use crate::validation::Violations;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(Violations),
}

impl ModelError {
    pub fn violations(&self) -> &Violations {
        match self {
            Self::Validation(v) => v,
        }
    }
}
