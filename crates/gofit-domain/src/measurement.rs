//! Mediciones corporales y fórmulas asociadas (IMC y % de grasa corporal,
//! fórmula US Navy). Funciones puras, sin IO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::user::Gender;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub date: DateTime<Utc>,
    /// Peso en kg.
    pub weight: f64,
    /// Altura en cm.
    pub height: f64,
    pub body_fat: f64,
    pub bmi: f64,
}

/// IMC = peso / altura², con altura en metros. Redondeado a 2 decimales.
pub fn bmi(weight: f64, height: f64) -> Result<f64, DomainError> {
    if height <= 0.0 {
        return Err(DomainError::ValidationError("height must be greater than 0".into()));
    }
    let height_m = height / 100.0;
    let value = weight / (height_m * height_m);
    Ok((value * 100.0).round() / 100.0)
}

/// Estimación del % de grasa corporal (US Navy). Las circunferencias van en
/// cm; la fórmula depende del género y la cadera sólo aplica a mujeres.
pub fn body_fat(gender: Gender, height: f64, waist: f64, neck: f64, hip: f64) -> Result<f64, DomainError> {
    if height <= 0.0 {
        return Err(DomainError::ValidationError("height must be greater than 0".into()));
    }
    if waist <= 0.0 || neck <= 0.0 {
        return Err(DomainError::ValidationError("waist and neck measurements must be positive".into()));
    }

    let value = match gender {
        Gender::Male => {
            let diff = waist - neck;
            if diff <= 0.0 {
                return Err(DomainError::ValidationError(
                    "waist circumference must be greater than neck circumference for males".into(),
                ));
            }
            (495.0 / (1.0324 - 0.19077 * diff.log10() + 0.15456 * height.log10())) - 450.0
        }
        Gender::Female => {
            if hip <= 0.0 {
                return Err(DomainError::ValidationError("hip circumference must be positive for females".into()));
            }
            let sum = waist + hip - neck;
            if sum <= 0.0 {
                return Err(DomainError::ValidationError(
                    "the sum of waist + hip - neck circumference must be positive for females".into(),
                ));
            }
            (495.0 / (1.29579 - 0.35004 * sum.log10() + 0.22100 * height.log10())) - 450.0
        }
    };

    Ok(value.round())
}
