//! Comidas: tipo, descripción y macros acumulados.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::food::FoodDetail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Opciones en el orden que se presentan al operador (1-indexado).
    pub const ALL: [MealType; 4] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Una comida con sus macros acumulados. Los macros crecen a medida que se
/// añaden alimentos (`add_food`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub meal_type: MealType,
    pub description: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbohydrates: f64,
    pub lipids: f64,
}

impl Meal {
    pub fn new(meal_type: MealType, description: impl Into<String>) -> Self {
        Meal { id: Uuid::new_v4(),
               meal_type,
               description: description.into(),
               calories: 0.0,
               proteins: 0.0,
               carbohydrates: 0.0,
               lipids: 0.0 }
    }

    /// Acumula los nutrientes de `grams` gramos del alimento. Los valores
    /// del detalle vienen por 100 g.
    pub fn add_food(&mut self, detail: &FoodDetail, grams: f64) {
        let factor = grams / 100.0;
        self.calories += detail.calories * factor;
        self.proteins += detail.proteins * factor;
        self.carbohydrates += detail.carbohydrates * factor;
        self.lipids += detail.lipids * factor;
    }

    pub fn macros(&self) -> (f64, f64, f64, f64) {
        (self.calories, self.proteins, self.carbohydrates, self.lipids)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.meal_type)
    }
}
