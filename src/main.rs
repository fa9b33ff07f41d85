//! Punto de entrada: cablea los tres actores de la sesión.
//!
//! - Un hilo lector de stdin (el único que bloquea en entrada) que envía
//!   cada línea como mensaje a la sesión.
//! - El actor de sesión (parser + wizard + dispatcher), dueño único del
//!   wizard activo.
//! - El worker de persistencia, consumidor único de la cola acotada.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use gofit_core::catalog::FoodCatalog;
use gofit_core::constants::SAVE_QUEUE_CAPACITY;
use gofit_core::store::{EntitySink, InMemoryStore, MealStore, MenuStore, UserStore};
use gofit_core::{run_session, spawn_worker, SaveQueue, SessionCtx, SessionEvent, TableReport};
use gofit_fdc::FdcClient;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let store = Arc::new(InMemoryStore::new());
    let catalog: Arc<dyn FoodCatalog> = match FdcClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("[gofit] catalog config error: {e}");
            std::process::exit(2);
        }
    };

    let (queue, save_rx) = SaveQueue::bounded(SAVE_QUEUE_CAPACITY);
    let sink: Arc<dyn EntitySink> = store.clone();
    let _worker = spawn_worker(save_rx, sink);

    let (line_tx, line_rx) = mpsc::channel::<SessionEvent>(1);
    std::thread::spawn(move || read_lines(line_tx));

    let users: Arc<dyn UserStore> = store.clone();
    let meals: Arc<dyn MealStore> = store.clone();
    let menus: Arc<dyn MenuStore> = store.clone();
    let ctx = SessionCtx { users,
                           meals,
                           menus,
                           catalog,
                           reports: Arc::new(TableReport),
                           queue };

    run_session(line_rx, ctx).await;
}

/// Bucle bloqueante de lectura de stdin. Termina al agotarse la entrada o
/// cuando la sesión deja de escuchar.
fn read_lines(tx: mpsc::Sender<SessionEvent>) {
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut buffer = String::new();
        match stdin.lock().read_line(&mut buffer) {
            Ok(0) => {
                let _ = tx.blocking_send(SessionEvent::Eof);
                break;
            }
            Ok(_) => {
                if tx.blocking_send(SessionEvent::Line(buffer)).is_err() {
                    break;
                }
            }
            Err(e) => {
                eprintln!("Error while reading input: {e}");
            }
        }
    }
}
