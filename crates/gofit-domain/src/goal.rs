//! Objetivo nutricional del usuario.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// Opciones en el orden que se presentan al operador (1-indexado).
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::Maintenance, Goal::MuscleGain];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight loss",
            Goal::Maintenance => "Maintenance",
            Goal::MuscleGain => "Muscle gain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
