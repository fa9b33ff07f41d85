//! Errores de la sesión interactiva (simples por ahora).

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::store::StoreError;

/// Errores que un comando puede producir. Ninguno es fatal: la sesión los
/// reporta al operador y vuelve a leer la siguiente línea.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Usage(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("{0}")]
    Prerequisite(String),
    #[error("{0}")]
    Collaborator(String),
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        SessionError::Collaborator(e.to_string())
    }
}

impl From<CatalogError> for SessionError {
    fn from(e: CatalogError) -> Self {
        SessionError::Collaborator(e.to_string())
    }
}
