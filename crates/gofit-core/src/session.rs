//! Actor de sesión: dueño único del wizard activo.
//!
//! Recibe las líneas del lector de stdin por canal y decide su destino:
//! con wizard activo la línea es la respuesta al paso en curso; sin wizard,
//! pasa por el parser y el dispatcher. Registrar y limpiar el wizard ocurre
//! sólo aquí (disciplina de escritor único: los demás actores sólo envían
//! mensajes).

use tokio::sync::mpsc;

use crate::command::parse_line;
use crate::dispatch::{dispatch, DispatchOutcome, SessionCtx};
use crate::errors::SessionError;
use crate::store::Entity;
use crate::wizard::{FeedOutcome, WizardEffect, WizardEngine};

/// Mensajes del lector de líneas hacia la sesión.
#[derive(Debug)]
pub enum SessionEvent {
    Line(String),
    /// Fin de la entrada: termina la sesión.
    Eof,
}

/// Bucle principal. Retorna al agotarse la entrada o con `gofit exit`.
pub async fn run_session(mut events: mpsc::Receiver<SessionEvent>, ctx: SessionCtx) {
    let mut wizard = WizardEngine::default();

    while let Some(event) = events.recv().await {
        let line = match event {
            SessionEvent::Eof => break,
            SessionEvent::Line(l) => l,
        };
        let line = line.trim();
        // Línea vacía: sin efecto observable, ni para el wizard ni para el
        // parser.
        if line.is_empty() {
            continue;
        }

        if wizard.is_active() {
            match wizard.feed(line) {
                FeedOutcome::Rejected(message) => println!("{message}"),
                FeedOutcome::Prompt(prompt) => println!("\n{prompt}"),
                FeedOutcome::Completed(effect) => match execute_effect(effect, &ctx).await {
                    Ok(confirmation) => println!("{confirmation}"),
                    Err(e) => println!("{e}"),
                },
                FeedOutcome::Idle => {}
            }
            continue;
        }

        match parse_line(line) {
            Err(e) => println!("{e}"),
            Ok(cmd) => match dispatch(cmd, &ctx).await {
                Ok(DispatchOutcome::Handled) => {}
                Ok(DispatchOutcome::Start(step)) => {
                    let prompt = wizard.start(step);
                    println!("\n{prompt}");
                }
                Ok(DispatchOutcome::Exit) => break,
                Err(e) => println!("{e}"),
            },
        }
    }
}

/// Ejecuta el efecto terminal de un wizard y devuelve la confirmación para
/// el operador. Las creaciones llaman al store y encolan la entidad
/// aceptada para el guardado en segundo plano; las asociaciones son
/// llamadas directas al store.
pub async fn execute_effect(effect: WizardEffect, ctx: &SessionCtx) -> Result<String, SessionError> {
    match effect {
        WizardEffect::CreateUser { first_name, last_name, age, gender, goal } => {
            let user = ctx.users.create_user(&first_name, &last_name, age, gender, goal)?;
            ctx.queue.enqueue(Entity::User(user.clone())).await?;
            Ok(format!("\n✅ User {} {} created successfully!", user.first_name, user.last_name))
        }

        WizardEffect::CreateMeal { meal_type, description } => {
            let meal = ctx.meals.create_meal(meal_type, &description)?;
            ctx.queue.enqueue(Entity::Meal(meal.clone())).await?;
            Ok(format!("✔ Meal '{}' ({}) added successfully!", meal.description, meal.meal_type))
        }

        WizardEffect::AttachFood { mut meal, food, grams } => {
            meal.add_food(&food, grams);
            ctx.meals.save_meal(&meal)?;
            Ok(format!("\n✅ {:.0}g of {} added to meal '{}'", grams, food.name, meal.description))
        }

        WizardEffect::CreateMenu { user, date } => {
            let menu = ctx.menus.create_menu(user.id, date)?;
            ctx.queue.enqueue(Entity::Menu(menu.clone())).await?;
            Ok(format!("\n✅ Daily menu created for {} on {}",
                       menu.user.label(),
                       menu.date.format(crate::constants::DATE_FORMAT)))
        }

        WizardEffect::AttachMeal { menu, meal } => {
            let attached = ctx.menus.attach_meal(menu.id, meal.meal_type, &meal.description)?;
            Ok(format!("\n✅ Meal '{}' ({}) added to the menu of {}",
                       attached.description,
                       attached.meal_type,
                       menu.label()))
        }
    }
}
