//! Constantes del motor de sesión.

use std::time::Duration;

/// Prefijo obligatorio de toda línea de comando fuera de un wizard.
pub const COMMAND_PREFIX: &str = "gofit";

/// Capacidad de la cola de persistencia (backpressure al llenarse).
pub const SAVE_QUEUE_CAPACITY: usize = 100;

/// Plazo máximo de un guardado individual antes de abandonarlo.
pub const SAVE_DEADLINE: Duration = Duration::from_secs(5);

/// Formato de fecha que teclea el operador (DD/MM/YYYY).
pub const DATE_FORMAT: &str = "%d/%m/%Y";
