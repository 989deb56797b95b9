//! Pass-through relay for save/fetch progress notifications.
//!
//! Payloads are whatever the native module emits; nothing here inspects,
//! coalesces or rewrites them. Each subscriber owns an unbounded queue, so a
//! slow handler never loses events.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Event name the native module emits progress under
pub const PROGRESS_UPDATE_EVENT: &str = "onProgressUpdate";

/// A progress notification exactly as emitted by native code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEvent {
    pub name: String,
    pub payload: serde_json::Value,
}

impl ProgressEvent {
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            name: PROGRESS_UPDATE_EVENT.to_string(),
            payload,
        }
    }
}

type Listeners = Arc<Mutex<Vec<(Uuid, mpsc::UnboundedSender<ProgressEvent>)>>>;

/// Native-side handle used to publish progress events
#[derive(Debug, Clone, Default)]
pub struct ProgressEmitter {
    listeners: Listeners,
}

impl ProgressEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an event to every listener; returns how many received it
    pub fn emit(&self, event: ProgressEvent) -> usize {
        let Ok(mut listeners) = self.listeners.lock() else {
            log::error!("Progress listener list poisoned, dropping event");
            return 0;
        };
        listeners.retain(|(_, tx)| tx.send(event.clone()).is_ok());
        listeners.len()
    }

    fn add_listener(&self, id: Uuid) -> mpsc::UnboundedReceiver<ProgressEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, tx));
        }
        rx
    }

    fn remove_listener(&self, id: Uuid) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(listener, _)| *listener != id);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .map(|listeners| listeners.iter().filter(|(_, tx)| !tx.is_closed()).count())
            .unwrap_or(0)
    }
}

/// Subscribe point for progress events.
///
/// On platforms without a native event source the relay is dormant:
/// subscribing still succeeds, the handler just never runs.
#[derive(Debug, Clone)]
pub struct ProgressRelay {
    emitter: ProgressEmitter,
    live: bool,
    runtime: Option<Handle>,
}

impl ProgressRelay {
    /// Handlers run on the Tokio runtime current at construction, if any
    pub fn new(source: Option<ProgressEmitter>) -> Self {
        let live = source.is_some();
        Self {
            emitter: source.unwrap_or_default(),
            live,
            runtime: Handle::try_current().ok(),
        }
    }

    /// Whether a native event source backs this relay
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn listener_count(&self) -> usize {
        self.emitter.listener_count()
    }

    /// Raw receiver for callers that drive their own loop; dropping it
    /// unregisters the listener on the next emit
    pub fn subscribe_stream(&self) -> mpsc::UnboundedReceiver<ProgressEvent> {
        self.emitter.add_listener(Uuid::new_v4())
    }

    /// Register a handler invoked once per emitted event, in order.
    ///
    /// The handler runs on a Tokio task when a runtime is available and on a
    /// dedicated thread otherwise. It is removed when the returned
    /// [`Subscription`] is removed or dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(ProgressEvent) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        let mut receiver = self.emitter.add_listener(id);
        let active = Arc::new(AtomicBool::new(true));
        log::debug!("Adding progress listener {}", id);

        let runtime = self
            .runtime
            .clone()
            .or_else(|| Handle::try_current().ok());

        let task = match runtime {
            Some(runtime) => {
                let active = active.clone();
                Some(runtime.spawn(async move {
                    while let Some(event) = receiver.recv().await {
                        if !active.load(Ordering::SeqCst) {
                            break;
                        }
                        handler(event);
                    }
                }))
            }
            None => {
                let active = active.clone();
                std::thread::spawn(move || {
                    while let Some(event) = receiver.blocking_recv() {
                        if !active.load(Ordering::SeqCst) {
                            break;
                        }
                        handler(event);
                    }
                });
                None
            }
        };

        Subscription {
            id,
            emitter: self.emitter.clone(),
            active,
            task,
        }
    }
}

/// Handle for a registered progress handler
#[derive(Debug)]
pub struct Subscription {
    id: Uuid,
    emitter: ProgressEmitter,
    active: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Stop delivering events to the handler
    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        log::debug!("Removing progress listener {}", self.id);
        self.active.store(false, Ordering::SeqCst);
        // Dropping the sender ends the forwarding loop on either executor
        self.emitter.remove_listener(self.id);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
