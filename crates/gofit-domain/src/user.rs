//! Usuario del tracker: perfil, mediciones y necesidades nutricionales.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::DomainError;
use crate::goal::Goal;
use crate::measurement::{bmi, body_fat, Measurement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Opciones en el orden que se presentan al operador (1-indexado).
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub goal: Goal,
    pub measurements: Vec<Measurement>,
    pub calorie_needs: f64,
    pub protein_needs: f64,
    pub carbohydrate_needs: f64,
    pub lipid_needs: f64,
}

impl User {
    pub fn new(first_name: impl Into<String>,
               last_name: impl Into<String>,
               age: u32,
               gender: Gender,
               goal: Goal)
               -> Self {
        User { id: Uuid::new_v4(),
               first_name: first_name.into(),
               last_name: last_name.into(),
               age,
               gender,
               goal,
               measurements: Vec::new(),
               calorie_needs: 0.0,
               protein_needs: 0.0,
               carbohydrate_needs: 0.0,
               lipid_needs: 0.0 }
    }

    /// Etiqueta corta para listados de selección.
    pub fn label(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Recalcula las necesidades nutricionales a partir de la última
    /// medición. BMR por Mifflin-St Jeor, factor de actividad sedentario
    /// (1.5) y ajuste de ±300 kcal según objetivo. Sin mediciones no hay
    /// nada que calcular.
    pub fn update_nutrition_goals(&mut self) {
        let latest = match self.measurements.last() {
            Some(m) => m.clone(),
            None => return,
        };

        let bmr = match self.gender {
            Gender::Male => 10.0 * latest.weight + 6.25 * latest.height - 5.0 * self.age as f64 + 5.0,
            Gender::Female => 10.0 * latest.weight + 6.25 * latest.height - 5.0 * self.age as f64 - 161.0,
        };

        let activity_factor = 1.5;
        let mut tdee = bmr * activity_factor;
        match self.goal {
            Goal::WeightLoss => tdee -= 300.0,
            Goal::MuscleGain => tdee += 300.0,
            Goal::Maintenance => {}
        }

        self.calorie_needs = tdee.round();

        // Proteínas 1.8 g/kg, lípidos 1 g/kg, glúcidos con el resto de las
        // calorías (4 kcal/g).
        let proteins = 1.8 * latest.weight;
        let fats = 1.0 * latest.weight;
        let protein_cals = proteins * 4.0;
        let fat_cals = fats * 9.0;
        let carbs = (self.calorie_needs - protein_cals - fat_cals) / 4.0;

        self.protein_needs = (proteins * 100.0).round() / 100.0;
        self.lipid_needs = (fats * 100.0).round() / 100.0;
        self.carbohydrate_needs = (carbs * 100.0).round() / 100.0;
    }

    /// Actualiza el perfil y registra una nueva medición con IMC y grasa
    /// corporal calculados.
    pub fn update_profile(&mut self,
                          weight: f64,
                          height: f64,
                          age: u32,
                          goal: Goal,
                          gender: Gender,
                          waist: f64,
                          neck: f64,
                          hip: f64)
                          -> Result<(), DomainError> {
        if weight <= 0.0 || height <= 0.0 || age == 0 {
            return Err(DomainError::ValidationError("weight, height and age must be greater than 0".into()));
        }

        self.age = age;
        self.goal = goal;
        self.gender = gender;

        let bmi_value = bmi(weight, height)?;
        let fat = body_fat(gender, height, waist, neck, hip)?;

        self.measurements.push(Measurement { date: Utc::now(),
                                             weight,
                                             height,
                                             bmi: bmi_value,
                                             body_fat: fat });
        Ok(())
    }
}
