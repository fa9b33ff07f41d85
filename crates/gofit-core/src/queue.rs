//! Cola de persistencia acotada y worker de guardado.
//!
//! Productores: los efectos de creación de wizards. Consumidor único: el
//! worker lanzado con `spawn_worker`. Con la cola llena, `enqueue` suspende
//! al productor hasta que se libere un slot (backpressure, nunca descarta).

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::constants::SAVE_DEADLINE;
use crate::store::{Entity, EntitySink, StoreError};

/// Una entidad pendiente de guardado, con su momento lógico de creación.
#[derive(Debug, Clone)]
pub struct SaveTask {
    pub entity: Entity,
    pub created_at: DateTime<Utc>,
}

/// Extremo productor de la cola. Clonable; un clon por handler.
#[derive(Clone)]
pub struct SaveQueue {
    tx: mpsc::Sender<SaveTask>,
}

impl SaveQueue {
    /// Crea la cola con la capacidad dada y devuelve el extremo consumidor
    /// para `spawn_worker`.
    pub fn bounded(capacity: usize) -> (SaveQueue, mpsc::Receiver<SaveTask>) {
        let (tx, rx) = mpsc::channel(capacity);
        (SaveQueue { tx }, rx)
    }

    /// Encola una entidad. Espera si la cola está llena; sólo falla si el
    /// worker ya no existe.
    pub async fn enqueue(&self, entity: Entity) -> Result<(), StoreError> {
        let task = SaveTask { entity, created_at: Utc::now() };
        self.tx
            .send(task)
            .await
            .map_err(|_| StoreError::Rejected("persistence worker stopped".into()))
    }
}

/// Lanza el worker: drena la cola en FIFO y entrega cada entidad al sink.
/// Cada guardado corre bajo un plazo de `SAVE_DEADLINE`; si vence, el
/// guardado en curso se abandona y se reporta como timeout. Los fallos se
/// reportan y la tarea se descarta: sin reintentos ni dead-letter.
pub fn spawn_worker(mut rx: mpsc::Receiver<SaveTask>, sink: Arc<dyn EntitySink>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(task) = rx.recv().await {
            let label = task.entity.label();
            match timeout(SAVE_DEADLINE, sink.save(task.entity)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => eprintln!("Error while saving {label}: {e}"),
                Err(_) => eprintln!("Error while saving {label}: timeout"),
            }
        }
    })
}
