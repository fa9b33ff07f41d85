//! Colaboradores de almacenamiento: traits consumidos por el dispatcher y
//! los efectos de wizard, más una implementación en memoria.
//!
//! `EntitySink` es la capacidad genérica de guardado que consume el worker
//! de persistencia; las demás operaciones son llamadas síncronas atómicas.

use async_trait::async_trait;
use chrono::NaiveDate;
use gofit_domain::{DailyMenu, Gender, Goal, Meal, MealType, User};
use std::sync::Mutex;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("this menu already has a {0} meal")]
    DuplicateMealType(MealType),
    #[error("{0}")]
    Rejected(String),
}

/// Entidad opaca para la cola de persistencia.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    User(User),
    Meal(Meal),
    Menu(DailyMenu),
}

impl Entity {
    /// Etiqueta corta para mensajes del worker.
    pub fn label(&self) -> String {
        match self {
            Entity::User(u) => format!("user {}", u.label()),
            Entity::Meal(m) => format!("meal '{}'", m.description),
            Entity::Menu(m) => format!("menu {}", m.label()),
        }
    }
}

pub trait UserStore: Send + Sync {
    fn list_users(&self) -> Result<Vec<User>, StoreError>;
    fn create_user(&self,
                   first_name: &str,
                   last_name: &str,
                   age: u32,
                   gender: Gender,
                   goal: Goal)
                   -> Result<User, StoreError>;
}

pub trait MealStore: Send + Sync {
    fn list_meals(&self) -> Result<Vec<Meal>, StoreError>;
    fn create_meal(&self, meal_type: MealType, description: &str) -> Result<Meal, StoreError>;
    /// Reemplaza los macros acumulados de una comida ya existente.
    fn save_meal(&self, meal: &Meal) -> Result<(), StoreError>;
}

pub trait MenuStore: Send + Sync {
    fn list_menus(&self) -> Result<Vec<DailyMenu>, StoreError>;
    fn create_menu(&self, user_id: Uuid, date: NaiveDate) -> Result<DailyMenu, StoreError>;
    /// Copia la comida fuente (tipo + descripción) dentro del menú. Falla
    /// si el menú ya tiene una comida de ese tipo, salvo colaciones.
    fn attach_meal(&self, menu_id: Uuid, meal_type: MealType, description: &str) -> Result<Meal, StoreError>;
}

/// Capacidad de guardado duradero; único consumidor: el worker.
#[async_trait]
pub trait EntitySink: Send + Sync {
    async fn save(&self, entity: Entity) -> Result<(), StoreError>;
}

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    meals: Vec<Meal>,
    menus: Vec<DailyMenu>,
    saved: Vec<Entity>,
}

/// Almacenamiento en memoria, compartido entre actores vía `Arc`.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entidades que el worker ya persistió (orden de guardado).
    pub fn saved(&self) -> Vec<Entity> {
        self.inner.lock().unwrap().saved.clone()
    }
}

impl UserStore for InMemoryStore {
    fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.inner.lock().unwrap().users.clone())
    }

    fn create_user(&self,
                   first_name: &str,
                   last_name: &str,
                   age: u32,
                   gender: Gender,
                   goal: Goal)
                   -> Result<User, StoreError> {
        let user = User::new(first_name, last_name, age, gender, goal);
        self.inner.lock().unwrap().users.push(user.clone());
        Ok(user)
    }
}

impl MealStore for InMemoryStore {
    fn list_meals(&self) -> Result<Vec<Meal>, StoreError> {
        Ok(self.inner.lock().unwrap().meals.clone())
    }

    fn create_meal(&self, meal_type: MealType, description: &str) -> Result<Meal, StoreError> {
        let meal = Meal::new(meal_type, description);
        self.inner.lock().unwrap().meals.push(meal.clone());
        Ok(meal)
    }

    fn save_meal(&self, meal: &Meal) -> Result<(), StoreError> {
        let mut state = self.inner.lock().unwrap();
        match state.meals.iter_mut().find(|m| m.id == meal.id) {
            Some(slot) => {
                *slot = meal.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("meal {}", meal.id))),
        }
    }
}

impl MenuStore for InMemoryStore {
    fn list_menus(&self) -> Result<Vec<DailyMenu>, StoreError> {
        Ok(self.inner.lock().unwrap().menus.clone())
    }

    fn create_menu(&self, user_id: Uuid, date: NaiveDate) -> Result<DailyMenu, StoreError> {
        let mut state = self.inner.lock().unwrap();
        let user = state.users
                        .iter()
                        .find(|u| u.id == user_id)
                        .cloned()
                        .ok_or_else(|| StoreError::NotFound(format!("user {user_id}")))?;
        let menu = DailyMenu::new(user, date);
        state.menus.push(menu.clone());
        Ok(menu)
    }

    fn attach_meal(&self, menu_id: Uuid, meal_type: MealType, description: &str) -> Result<Meal, StoreError> {
        let mut state = self.inner.lock().unwrap();
        let source = state.meals
                          .iter()
                          .find(|m| m.meal_type == meal_type && m.description == description)
                          .cloned()
                          .ok_or_else(|| StoreError::NotFound(format!("meal '{description}'")))?;
        let menu = state.menus
                        .iter_mut()
                        .find(|m| m.id == menu_id)
                        .ok_or_else(|| StoreError::NotFound(format!("menu {menu_id}")))?;

        if meal_type != MealType::Snack && menu.meals.iter().any(|m| m.meal_type == meal_type) {
            return Err(StoreError::DuplicateMealType(meal_type));
        }

        // Comida nueva con los valores nutricionales de la fuente.
        let mut attached = Meal::new(meal_type, description);
        attached.calories = source.calories;
        attached.proteins = source.proteins;
        attached.carbohydrates = source.carbohydrates;
        attached.lipids = source.lipids;
        menu.meals.push(attached.clone());
        Ok(attached)
    }
}

#[async_trait]
impl EntitySink for InMemoryStore {
    async fn save(&self, entity: Entity) -> Result<(), StoreError> {
        self.inner.lock().unwrap().saved.push(entity);
        Ok(())
    }
}
