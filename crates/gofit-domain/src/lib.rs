//! gofit-domain: entidades del tracker y fórmulas nutricionales puras.
pub mod error;
pub mod food;
pub mod goal;
pub mod meal;
pub mod measurement;
pub mod menu;
pub mod user;

pub use error::DomainError;
pub use food::{FoodDetail, FoodSummary};
pub use goal::Goal;
pub use meal::{Meal, MealType};
pub use measurement::{bmi, body_fat, Measurement};
pub use menu::DailyMenu;
pub use user::{Gender, User};
