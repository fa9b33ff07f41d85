//! gofit-core: motor de sesión interactiva (línea → wizard/dispatcher) y
//! cola de persistencia asíncrona.

pub mod catalog;
pub mod command;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod queue;
pub mod report;
pub mod session;
pub mod store;
pub mod wizard;

pub use catalog::{CatalogError, FoodCatalog};
pub use command::{parse_line, Command, ParseError};
pub use dispatch::{dispatch, DispatchOutcome, SessionCtx};
pub use errors::SessionError;
pub use queue::{spawn_worker, SaveQueue, SaveTask};
pub use report::{ReportGenerator, TableReport};
pub use session::{run_session, SessionEvent};
pub use store::{Entity, EntitySink, InMemoryStore, MealStore, MenuStore, StoreError, UserStore};
pub use wizard::{flows, FeedOutcome, Outcome, Step, ValidationError, WizardEffect, WizardEngine};
