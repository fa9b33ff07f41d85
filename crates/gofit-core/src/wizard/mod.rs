//! Motor de wizards: diálogos lineales de varios pasos.
//!
//! Un `Step` es dato, no estado global: lleva su prompt, un `parse`
//! repetible (validación) y un `next` que se consume una sola vez y produce
//! o bien el paso siguiente o bien el efecto terminal del wizard. Ambas
//! mitades comparten un tipo de valor fijado en el constructor y borrado
//! después; avanzar consume el paso, y una entrada inválida lo devuelve
//! intacto. El `WizardEngine` posee el único paso activo del sistema;
//! mientras exista, cada línea entrante se enruta aquí y nunca al parser de
//! comandos.

pub mod flows;

use chrono::NaiveDate;
use thiserror::Error;

use crate::constants::DATE_FORMAT;

pub use flows::WizardEffect;

/// Entrada inválida de un paso. Se reporta y el mismo paso queda re-armado;
/// no hay límite de reintentos.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Resultado de completar un paso con éxito.
pub enum Outcome {
    /// El diálogo continúa con otro paso.
    Next(Step),
    /// El diálogo terminó; el dueño del engine ejecuta el efecto.
    Finish(WizardEffect),
}

/// Paso con su tipo de valor aún visible: `parse` y `next` están acoplados
/// por `T`, así que no existe paso con mitades incompatibles.
struct Typed<T> {
    prompt: String,
    parse: Box<dyn Fn(&str) -> Result<T, ValidationError> + Send>,
    next: Box<dyn FnOnce(T) -> Outcome + Send>,
}

/// Borrado de tipo de un `Typed<T>`.
trait Advance: Send {
    fn prompt(&self) -> &str;

    /// Consume el paso con una línea. Entrada inválida: devuelve el paso
    /// sin tocar (misma identidad, `next` intacto) junto al error.
    fn advance(self: Box<Self>, line: &str) -> Result<Outcome, (Box<dyn Advance>, ValidationError)>;
}

impl<T: Send + 'static> Advance for Typed<T> {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn advance(self: Box<Self>, line: &str) -> Result<Outcome, (Box<dyn Advance>, ValidationError)> {
        match (self.parse)(line) {
            Ok(value) => Ok((self.next)(value)),
            Err(e) => {
                let step: Box<dyn Advance> = self;
                Err((step, e))
            }
        }
    }
}

/// Un paso de wizard: prompt + validación + continuación.
pub struct Step {
    inner: Box<dyn Advance>,
}

impl Step {
    pub fn prompt(&self) -> &str {
        self.inner.prompt()
    }

    fn typed<T: Send + 'static>(prompt: impl Into<String>,
                                parse: impl Fn(&str) -> Result<T, ValidationError> + Send + 'static,
                                next: impl FnOnce(T) -> Outcome + Send + 'static)
                                -> Step {
        Step { inner: Box::new(Typed { prompt: prompt.into(),
                                       parse: Box::new(parse),
                                       next: Box::new(next) }) }
    }

    /// Texto libre no vacío (ya recortado por la sesión).
    pub fn text(prompt: impl Into<String>, next: impl FnOnce(String) -> Outcome + Send + 'static) -> Step {
        Step::typed(prompt,
                    |line| {
                        let value = line.trim();
                        if value.is_empty() {
                            return Err(ValidationError("Input cannot be empty.".into()));
                        }
                        Ok(value.to_string())
                    },
                    next)
    }

    /// Entero estrictamente positivo (edad, etc.).
    pub fn positive_int(prompt: impl Into<String>, next: impl FnOnce(u32) -> Outcome + Send + 'static) -> Step {
        Step::typed(prompt,
                    |line| match line.trim().parse::<i64>() {
                        Ok(n) if n > 0 && n <= u32::MAX as i64 => Ok(n as u32),
                        _ => Err(ValidationError("Enter a positive whole number.".into())),
                    },
                    next)
    }

    /// Cantidad en gramos, estrictamente positiva.
    pub fn quantity(prompt: impl Into<String>, next: impl FnOnce(f64) -> Outcome + Send + 'static) -> Step {
        Step::typed(prompt,
                    |line| match line.trim().parse::<f64>() {
                        Ok(q) if q > 0.0 => Ok(q),
                        _ => Err(ValidationError("Quantity must be a positive number.".into())),
                    },
                    next)
    }

    /// Fecha en formato `DD/MM/YYYY`.
    pub fn date(prompt: impl Into<String>, next: impl FnOnce(NaiveDate) -> Outcome + Send + 'static) -> Step {
        Step::typed(prompt,
                    |line| {
                        NaiveDate::parse_from_str(line.trim(), DATE_FORMAT)
                            .map_err(|_| ValidationError("Invalid date format. Use DD/MM/YYYY.".into()))
                    },
                    next)
    }

    /// Elección numérica sobre una lista 1-indexada. El prompt incluye las
    /// opciones numeradas; el error re-enuncia el rango válido. `next`
    /// recibe el índice 0-based.
    pub fn choice(header: impl Into<String>,
                  options: Vec<String>,
                  next: impl FnOnce(usize) -> Outcome + Send + 'static)
                  -> Step {
        let mut prompt = header.into();
        for (i, option) in options.iter().enumerate() {
            prompt.push_str(&format!("\n{}. {}", i + 1, option));
        }
        let len = options.len();
        Step::typed(prompt,
                    move |line| match line.trim().parse::<usize>() {
                        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
                        _ => Err(ValidationError(format!("Invalid choice. Enter a number between 1 and {len}."))),
                    },
                    next)
    }
}

/// Resultado de alimentar una línea al engine.
#[derive(Debug)]
pub enum FeedOutcome {
    /// No hay wizard activo; la línea no era para el engine.
    Idle,
    /// Entrada inválida: mismo paso re-armado, mensaje para el operador.
    Rejected(String),
    /// Paso superado: prompt del paso siguiente.
    Prompt(String),
    /// Wizard completo: efecto terminal a ejecutar en este mismo turno.
    Completed(WizardEffect),
}

/// Dueño exclusivo del único wizard activo del sistema.
#[derive(Default)]
pub struct WizardEngine {
    active: Option<Step>,
}

impl WizardEngine {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Registra un nuevo wizard y devuelve el prompt de su primer paso.
    /// Invariante: sólo se llama sin wizard activo (el dispatcher no corre
    /// mientras haya uno).
    pub fn start(&mut self, step: Step) -> String {
        debug_assert!(self.active.is_none(), "a wizard is already active");
        let prompt = step.prompt().to_string();
        self.active = Some(step);
        prompt
    }

    /// Avanza el wizard activo con una línea del operador.
    pub fn feed(&mut self, line: &str) -> FeedOutcome {
        let step = match self.active.take() {
            None => return FeedOutcome::Idle,
            Some(s) => s,
        };

        match step.inner.advance(line) {
            Err((inner, e)) => {
                self.active = Some(Step { inner });
                FeedOutcome::Rejected(e.to_string())
            }
            Ok(Outcome::Next(next_step)) => {
                let prompt = next_step.prompt().to_string();
                self.active = Some(next_step);
                FeedOutcome::Prompt(prompt)
            }
            Ok(Outcome::Finish(effect)) => FeedOutcome::Completed(effect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_without_active_wizard_is_idle() {
        let mut engine = WizardEngine::default();
        assert!(matches!(engine.feed("anything"), FeedOutcome::Idle));
    }

    #[test]
    fn invalid_input_rearms_same_step() {
        let mut engine = WizardEngine::default();
        let step = Step::positive_int("Age:", |n| {
            Outcome::Finish(WizardEffect::CreateMeal { meal_type: gofit_domain::MealType::Snack,
                                                       description: n.to_string() })
        });
        let prompt = engine.start(step);
        assert_eq!(prompt, "Age:");

        assert!(matches!(engine.feed("abc"), FeedOutcome::Rejected(_)));
        assert!(engine.is_active());
        assert!(matches!(engine.feed("-5"), FeedOutcome::Rejected(_)));
        assert!(engine.is_active());
        assert!(matches!(engine.feed("30"), FeedOutcome::Completed(_)));
        assert!(!engine.is_active());
    }

    #[test]
    fn rejected_step_keeps_its_prompt_and_continuation() {
        let mut engine = WizardEngine::default();
        let step = Step::quantity("Grams:", |q| {
            Outcome::Finish(WizardEffect::CreateMeal { meal_type: gofit_domain::MealType::Snack,
                                                       description: format!("{q}") })
        });
        engine.start(step);

        // Varios rechazos seguidos: el paso re-armado sigue siendo capaz de
        // completar el wizard con su continuación original.
        for bad in ["", "x", "-1", "0"] {
            assert!(matches!(engine.feed(bad), FeedOutcome::Rejected(_)));
        }
        match engine.feed("42.5") {
            FeedOutcome::Completed(WizardEffect::CreateMeal { description, .. }) => {
                assert_eq!(description, "42.5");
            }
            other => panic!("expected completed wizard, got {other:?}"),
        }
    }

    #[test]
    fn choice_prompt_lists_numbered_options() {
        let step = Step::choice("Pick one:", vec!["a".into(), "b".into()], |_| {
            Outcome::Finish(WizardEffect::CreateMeal { meal_type: gofit_domain::MealType::Snack,
                                                       description: String::new() })
        });
        assert_eq!(step.prompt(), "Pick one:\n1. a\n2. b");
    }

    #[test]
    fn choice_restates_range_on_out_of_bounds() {
        let mut engine = WizardEngine::default();
        let step = Step::choice("Pick one:", vec!["a".into(), "b".into(), "c".into()], |_| {
            Outcome::Finish(WizardEffect::CreateMeal { meal_type: gofit_domain::MealType::Snack,
                                                       description: String::new() })
        });
        engine.start(step);
        match engine.feed("4") {
            FeedOutcome::Rejected(msg) => assert!(msg.contains("between 1 and 3")),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(matches!(engine.feed("0"), FeedOutcome::Rejected(_)));
        assert!(matches!(engine.feed("2"), FeedOutcome::Completed(_)));
    }
}
