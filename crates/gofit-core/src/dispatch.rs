//! Dispatcher de comandos: mapea una acción a su handler cuando no hay
//! wizard activo.
//!
//! Un handler o bien ejecuta una llamada inmediata a un colaborador, o bien
//! construye el primer paso de un wizard que el actor de sesión registrará.
//! Los handlers que arrancan un wizard validan antes sus prerrequisitos
//! (colecciones no vacías) y fallan con un mensaje de guía en vez de abrir
//! un diálogo imposible de responder.

use std::fmt;
use std::sync::Arc;

use crate::catalog::FoodCatalog;
use crate::command::Command;
use crate::errors::SessionError;
use crate::queue::SaveQueue;
use crate::report::ReportGenerator;
use crate::store::{MealStore, MenuStore, UserStore};
use crate::wizard::{flows, Step};

/// Colaboradores compartidos de la sesión.
#[derive(Clone)]
pub struct SessionCtx {
    pub users: Arc<dyn UserStore>,
    pub meals: Arc<dyn MealStore>,
    pub menus: Arc<dyn MenuStore>,
    pub catalog: Arc<dyn FoodCatalog>,
    pub reports: Arc<dyn ReportGenerator>,
    pub queue: SaveQueue,
}

/// Resultado de despachar un comando.
pub enum DispatchOutcome {
    /// Acción inmediata completada (o nada que hacer).
    Handled,
    /// Primer paso de un wizard a registrar por el actor de sesión.
    Start(Step),
    /// Política de terminación: sólo `gofit exit` (o fin de entrada) para
    /// la sesión.
    Exit,
}

// A mano: `Step` guarda closures, así que la variante `Start` se describe
// por su prompt.
impl fmt::Debug for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Handled => f.write_str("Handled"),
            DispatchOutcome::Start(step) => f.debug_tuple("Start").field(&step.prompt()).finish(),
            DispatchOutcome::Exit => f.write_str("Exit"),
        }
    }
}

pub async fn dispatch(cmd: Command, ctx: &SessionCtx) -> Result<DispatchOutcome, SessionError> {
    match cmd.action.as_str() {
        "search" => {
            let query = cmd.args
                           .first()
                           .ok_or_else(|| SessionError::Usage("Usage: gofit search <food name>".into()))?;
            let results = ctx.catalog.search(query).await?;
            if results.is_empty() {
                println!("No results found.");
            } else {
                println!("Results found:");
                for summary in &results {
                    println!("- {summary}");
                }
            }
            Ok(DispatchOutcome::Handled)
        }

        "detail" => {
            let fdc_id = parse_fdc_id(&cmd.args, "Usage: gofit detail <fdcId>")?;
            let detail = ctx.catalog.lookup_details(fdc_id).await?;
            println!("Nutritional details:");
            println!("Name: {}", detail.name);
            println!("Calories: {:.2} kcal", detail.calories);
            println!("Proteins: {:.2} g", detail.proteins);
            println!("Carbohydrates: {:.2} g", detail.carbohydrates);
            println!("Lipids: {:.2} g", detail.lipids);
            println!("Quantity: {:.2} g", 100.0);
            Ok(DispatchOutcome::Handled)
        }

        "newmeal" => Ok(DispatchOutcome::Start(flows::new_meal())),

        "addfood" => {
            let fdc_id = parse_fdc_id(&cmd.args, "Usage: gofit addfood <fdcId>")?;
            let food = ctx.catalog.lookup_details(fdc_id).await?;
            let meals = ctx.meals.list_meals()?;
            if meals.is_empty() {
                return Err(SessionError::Prerequisite(
                    "No meal has been created yet. Create one first with 'gofit newmeal'.".into(),
                ));
            }
            println!("\nSelected food: {}", food.name);
            Ok(DispatchOutcome::Start(flows::attach_food(food, meals)))
        }

        "addmeal" => {
            let menus = ctx.menus.list_menus()?;
            if menus.is_empty() {
                return Err(SessionError::Prerequisite(
                    "No daily menu recorded. Create one first with 'gofit addmenu'.".into(),
                ));
            }
            let meals = ctx.meals.list_meals()?;
            if meals.is_empty() {
                return Err(SessionError::Prerequisite(
                    "No meal has been created yet. Create one first with 'gofit newmeal'.".into(),
                ));
            }
            Ok(DispatchOutcome::Start(flows::attach_meal(menus, meals)))
        }

        "adduser" => Ok(DispatchOutcome::Start(flows::new_user())),

        "addmenu" => {
            let users = ctx.users.list_users()?;
            if users.is_empty() {
                return Err(SessionError::Prerequisite(
                    "No user recorded. Create one first with 'gofit adduser'.".into(),
                ));
            }
            Ok(DispatchOutcome::Start(flows::new_menu(users)))
        }

        "report" => {
            println!("Generating the nutritional report...");
            let menus = ctx.menus.list_menus()?;
            if menus.is_empty() {
                println!("No daily menu recorded.");
            } else {
                println!("\nNutritional report:");
                print!("{}", ctx.reports.render(&menus));
            }
            Ok(DispatchOutcome::Handled)
        }

        "exit" => Ok(DispatchOutcome::Exit),

        other => Err(SessionError::UnknownCommand(other.to_string())),
    }
}

fn parse_fdc_id(args: &[String], usage: &str) -> Result<u32, SessionError> {
    let raw = args.first().ok_or_else(|| SessionError::Usage(usage.into()))?;
    raw.parse::<u32>()
       .map_err(|_| SessionError::Usage(format!("invalid fdcId: {raw}")))
}
