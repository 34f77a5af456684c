//! Service layer orchestrating the image client for the HTTP routes.

use thiserror::Error;

use crate::client::errors::ClientError;
use crate::forms::FormError;

pub mod api;
pub mod gallery;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Form error: {0}")]
    Form(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] ClientError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
