//! Valores nutricionales de alimentos tal como los entrega el catálogo
//! (FoodData Central). Los nutrientes de `FoodDetail` están expresados
//! por 100 g de alimento.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resultado resumido de una búsqueda por nombre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSummary {
    pub fdc_id: u32,
    pub description: String,
}

impl fmt::Display for FoodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (fdcId: {})", self.description, self.fdc_id)
    }
}

/// Detalle nutricional de un alimento, por 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetail {
    pub fdc_id: u32,
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbohydrates: f64,
    pub lipids: f64,
}
