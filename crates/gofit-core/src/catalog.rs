//! Interfaz del catálogo de alimentos (FoodData Central).
//!
//! El trait vive en core para que el dispatcher no dependa del cliente
//! HTTP; la implementación real está en `gofit-fdc`.

use async_trait::async_trait;
use gofit_domain::{FoodDetail, FoodSummary};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CatalogError {
    #[error("http error: {0}")]
    Http(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("food {0} not found")]
    NotFound(u32),
    #[error("config error: {0}")]
    Config(String),
}

/// Búsqueda por nombre y consulta de nutrientes (por 100 g).
#[async_trait]
pub trait FoodCatalog: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<FoodSummary>, CatalogError>;
    async fn lookup_details(&self, fdc_id: u32) -> Result<FoodDetail, CatalogError>;
}
