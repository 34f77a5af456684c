//! Form definitions backing the gallery routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid search query: {0}")]
    InvalidQuery(TypeConstraintError),

    #[error("invalid page: {0}")]
    InvalidPage(TypeConstraintError),
}
