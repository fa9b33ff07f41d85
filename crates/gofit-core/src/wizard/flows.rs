//! Los cinco diálogos del tracker, como cadenas lineales de pasos.
//!
//! Cada flujo termina en un `WizardEffect`: un valor plano que describe el
//! único efecto visible del wizard. El efecto lo ejecuta el actor de sesión,
//! no el wizard; así los flujos se prueban alimentando strings e
//! inspeccionando el efecto resultante.

use chrono::NaiveDate;
use gofit_domain::{DailyMenu, FoodDetail, Gender, Goal, Meal, MealType, User};

use super::{Outcome, Step};

/// Efecto terminal de un wizard completado.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEffect {
    CreateUser {
        first_name: String,
        last_name: String,
        age: u32,
        gender: Gender,
        goal: Goal,
    },
    CreateMeal {
        meal_type: MealType,
        description: String,
    },
    AttachFood {
        meal: Meal,
        food: FoodDetail,
        grams: f64,
    },
    CreateMenu {
        user: User,
        date: NaiveDate,
    },
    AttachMeal {
        menu: DailyMenu,
        meal: Meal,
    },
}

fn labels<T: std::fmt::Display>(items: &[T]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

/// Nuevo usuario: nombre → apellido → edad → género → objetivo.
pub fn new_user() -> Step {
    Step::text("Enter the user's first name:", |first_name| {
        Outcome::Next(Step::text("Enter the user's last name:", move |last_name| {
            Outcome::Next(Step::positive_int("Enter the user's age:", move |age| {
                Outcome::Next(Step::choice("Choose a gender:", labels(&Gender::ALL), move |g| {
                    let gender = Gender::ALL[g];
                    Outcome::Next(Step::choice("Choose a goal:", labels(&Goal::ALL), move |o| {
                        Outcome::Finish(WizardEffect::CreateUser { first_name,
                                                                   last_name,
                                                                   age,
                                                                   gender,
                                                                   goal: Goal::ALL[o] })
                    }))
                }))
            }))
        }))
    })
}

/// Nueva comida: tipo → descripción.
pub fn new_meal() -> Step {
    Step::choice("What type of meal would you like to add?", labels(&MealType::ALL), |t| {
        let meal_type = MealType::ALL[t];
        Outcome::Next(Step::text("Enter a description for this meal (e.g. \"Tuesday lunch\"):", move |description| {
            Outcome::Finish(WizardEffect::CreateMeal { meal_type, description })
        }))
    })
}

/// Añadir un alimento a una comida existente: comida → cantidad. El detalle
/// del alimento ya fue consultado por el dispatcher.
pub fn attach_food(food: FoodDetail, meals: Vec<Meal>) -> Step {
    Step::choice("Choose the meal to add this food to:", labels(&meals), move |i| {
        let mut meals = meals;
        let meal = meals.swap_remove(i);
        Outcome::Next(Step::quantity("Enter the quantity in grams:", move |grams| {
            Outcome::Finish(WizardEffect::AttachFood { meal, food, grams })
        }))
    })
}

/// Nuevo menú diario: usuario → fecha.
pub fn new_menu(users: Vec<User>) -> Step {
    let options = users.iter().map(User::label).collect();
    Step::choice("Choose the user for this menu:", options, move |i| {
        let mut users = users;
        let user = users.swap_remove(i);
        Outcome::Next(Step::date("Enter the date (DD/MM/YYYY):", move |date| {
            Outcome::Finish(WizardEffect::CreateMenu { user, date })
        }))
    })
}

/// Añadir una comida existente a un menú: menú → comida.
pub fn attach_meal(menus: Vec<DailyMenu>, meals: Vec<Meal>) -> Step {
    let options = menus.iter().map(DailyMenu::label).collect();
    Step::choice("Choose the menu to add this meal to:", options, move |i| {
        let mut menus = menus;
        let menu = menus.swap_remove(i);
        Outcome::Next(Step::choice("Choose an existing meal:", labels(&meals), move |j| {
            let mut meals = meals;
            let meal = meals.swap_remove(j);
            Outcome::Finish(WizardEffect::AttachMeal { menu, meal })
        }))
    })
}
