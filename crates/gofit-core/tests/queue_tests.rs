//! Tests de la cola de persistencia: backpressure, orden FIFO y plazo de
//! guardado del worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gofit_core::constants::SAVE_QUEUE_CAPACITY;
use gofit_core::{spawn_worker, Entity, EntitySink, InMemoryStore, SaveQueue, StoreError};
use gofit_domain::{Gender, Goal, Meal, MealType, User};
use tokio::sync::mpsc;
use tokio::time::timeout;

fn user_entity(name: &str) -> Entity {
    Entity::User(User::new(name, "Doe", 30, Gender::Female, Goal::Maintenance))
}

fn meal_entity(description: &str) -> Entity {
    Entity::Meal(Meal::new(MealType::Lunch, description))
}

#[tokio::test(start_paused = true)]
async fn enqueue_blocks_when_full_until_a_slot_frees() {
    let (queue, mut rx) = SaveQueue::bounded(SAVE_QUEUE_CAPACITY);
    for i in 0..SAVE_QUEUE_CAPACITY {
        queue.enqueue(meal_entity(&format!("meal {i}"))).await.unwrap();
    }

    // Cola llena: el encolado siguiente queda suspendido, no descartado.
    let blocked = timeout(Duration::from_millis(50), queue.enqueue(user_entity("Cleo"))).await;
    assert!(blocked.is_err());

    rx.recv().await.unwrap();
    timeout(Duration::from_millis(50), queue.enqueue(user_entity("Cleo"))).await
                                                                          .expect("slot freed")
                                                                          .unwrap();
}

#[tokio::test]
async fn enqueue_fails_once_the_worker_is_gone() {
    let (queue, rx) = SaveQueue::bounded(4);
    drop(rx);
    let err = queue.enqueue(user_entity("Alice")).await.unwrap_err();
    assert!(matches!(err, StoreError::Rejected(_)));
}

#[tokio::test]
async fn worker_drains_in_fifo_order() {
    let store = Arc::new(InMemoryStore::new());
    let (queue, rx) = SaveQueue::bounded(8);
    let sink: Arc<dyn EntitySink> = store.clone();
    let worker = spawn_worker(rx, sink);

    queue.enqueue(user_entity("Alice")).await.unwrap();
    queue.enqueue(meal_entity("Pasta")).await.unwrap();
    queue.enqueue(meal_entity("Stew")).await.unwrap();

    // Sin productor la cola se agota y el worker termina solo.
    drop(queue);
    worker.await.unwrap();

    let labels: Vec<String> = store.saved().iter().map(Entity::label).collect();
    assert_eq!(labels, vec!["user Alice Doe", "meal 'Pasta'", "meal 'Stew'"]);
}

/// Sink que nunca resuelve el primer guardado y registra los siguientes.
struct StallFirstSink {
    stalled: AtomicBool,
    tx: mpsc::UnboundedSender<Entity>,
}

#[async_trait]
impl EntitySink for StallFirstSink {
    async fn save(&self, entity: Entity) -> Result<(), StoreError> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        let _ = self.tx.send(entity);
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn a_stalled_save_is_abandoned_after_the_deadline() {
    let (saved_tx, mut saved_rx) = mpsc::unbounded_channel();
    let sink = Arc::new(StallFirstSink { stalled: AtomicBool::new(false), tx: saved_tx });
    let (queue, rx) = SaveQueue::bounded(8);
    let worker = spawn_worker(rx, sink);

    queue.enqueue(meal_entity("Stuck")).await.unwrap();
    queue.enqueue(meal_entity("Next")).await.unwrap();

    // El primer guardado vence el plazo y se descarta; el worker sigue con
    // la siguiente tarea.
    let entity = saved_rx.recv().await.unwrap();
    assert_eq!(entity.label(), "meal 'Next'");

    drop(queue);
    worker.await.unwrap();
}

/// Sink que falla el primer guardado y acepta el resto.
struct FailFirstSink {
    failed: AtomicBool,
    tx: mpsc::UnboundedSender<Entity>,
}

#[async_trait]
impl EntitySink for FailFirstSink {
    async fn save(&self, entity: Entity) -> Result<(), StoreError> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            return Err(StoreError::Rejected("disk on fire".into()));
        }
        let _ = self.tx.send(entity);
        Ok(())
    }
}

#[tokio::test]
async fn a_failed_save_does_not_stop_the_worker() {
    let (saved_tx, mut saved_rx) = mpsc::unbounded_channel();
    let sink = Arc::new(FailFirstSink { failed: AtomicBool::new(false), tx: saved_tx });
    let (queue, rx) = SaveQueue::bounded(8);
    let worker = spawn_worker(rx, sink);

    queue.enqueue(meal_entity("Doomed")).await.unwrap();
    queue.enqueue(meal_entity("Fine")).await.unwrap();

    let entity = saved_rx.recv().await.unwrap();
    assert_eq!(entity.label(), "meal 'Fine'");

    drop(queue);
    worker.await.unwrap();
}
