//! Errores del dominio nutricional.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("{0}")]
    ValidationError(String),
}
