//! Menú diario: un día de comidas para un usuario.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::meal::Meal;
use crate::user::User;

/// Un menú diario. Lleva al usuario propietario embebido (para listados y
/// reportes) y las comidas anidadas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMenu {
    pub id: Uuid,
    pub user: User,
    pub date: NaiveDate,
    pub meals: Vec<Meal>,
}

impl DailyMenu {
    pub fn new(user: User, date: NaiveDate) -> Self {
        DailyMenu { id: Uuid::new_v4(), user, date, meals: Vec::new() }
    }

    /// Totales (calorías, proteínas, glúcidos, lípidos) del día.
    pub fn macro_summary(&self) -> (f64, f64, f64, f64) {
        let mut totals = (0.0, 0.0, 0.0, 0.0);
        for meal in &self.meals {
            let (cal, prot, carb, lipid) = meal.macros();
            totals.0 += cal;
            totals.1 += prot;
            totals.2 += carb;
            totals.3 += lipid;
        }
        totals
    }

    /// Etiqueta corta para listados de selección.
    pub fn label(&self) -> String {
        format!("{} {} - {}", self.user.first_name, self.user.last_name, self.date.format("%d/%m/%Y"))
    }
}
