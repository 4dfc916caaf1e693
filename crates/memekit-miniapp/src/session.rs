//! Session state machine for the embedding lifecycle.
//!
//! A session is classified exactly once at mount and then driven by up to
//! three racing triggers: the initial host check, a single bounded fallback
//! wait for a host that has not attached yet, and asynchronous host events
//! (a host-ready notification, a recognized cross-frame message). Every
//! trigger produces a partial [`StateUpdate`]; one reducer merges them into
//! the observable [`SessionSnapshot`] with last-write-wins semantics per
//! field, so the design tolerates any arrival order.
//!
//! The ready signal to the host is guarded by a one-shot flag and fires at
//! most once per session no matter which trigger adopts the host API first.

use std::sync::Arc;
use std::time::Duration;

use memekit_bridge::config::EmbeddingConfig;
use memekit_bridge::context::HostContext;
use memekit_bridge::frame::InboundFrameMessage;
use memekit_bridge::session::SessionSnapshot;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::environment::{HostEnvironment, detect_embedding};
use crate::host::HostApi;

/// Buffer capacity of the session event channel.
const EVENT_BUFFER: usize = 16;

/// Asynchronous triggers that can mutate a running session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The host announced that its API finished attaching.
    HostReady,
    /// A recognized cross-frame message arrived from the parent frame.
    Frame(InboundFrameMessage),
}

/// A partial state change produced by a single trigger.
///
/// Fields left as `None` keep their previous value; set fields overwrite it.
#[derive(Debug, Clone, Default)]
pub struct StateUpdate {
    pub embedded: Option<bool>,
    pub ready: Option<bool>,
    pub context: Option<HostContext>,
}

impl StateUpdate {
    /// Merges this update into `snapshot`, field by field.
    pub fn apply(self, snapshot: &mut SessionSnapshot) {
        if let Some(embedded) = self.embedded {
            snapshot.embedded = embedded;
        }
        if let Some(ready) = self.ready {
            snapshot.ready = ready;
        }
        if let Some(context) = self.context {
            snapshot.context = Some(context);
        }
    }
}

/// Handle to a running embedding session.
///
/// Spawning classifies the environment and starts the driver task; dropping
/// the handle aborts the driver, which also cancels a pending fallback wait,
/// so no state mutation can happen after teardown.
pub struct Session {
    snapshot_rx: watch::Receiver<SessionSnapshot>,
    events_tx: Sender<SessionEvent>,
    driver: JoinHandle<()>,
}

impl Session {
    /// Classifies `environment` and starts driving the session state.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(environment: Arc<dyn HostEnvironment>, config: EmbeddingConfig) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::default());
        let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
        let driver = tokio::spawn(drive(environment, config, events_rx, snapshot_tx));
        Self {
            snapshot_rx,
            events_tx,
            driver,
        }
    }

    /// Returns the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Returns a watcher that observes every session state change.
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Returns a sender for injecting host events into the session.
    pub fn events(&self) -> Sender<SessionEvent> {
        self.events_tx.clone()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

/// Adopts an attached host API: reads its context, signals readiness back to
/// the host (at most once per session), and marks the session ready.
fn adopt_host(host: &Arc<dyn HostApi>, ready_signal_sent: &mut bool) -> StateUpdate {
    if !*ready_signal_sent {
        *ready_signal_sent = true;
        if let Err(error) = host.ready() {
            log::warn!("Host refused the ready signal: {error}");
        }
    }

    StateUpdate {
        embedded: None,
        ready: Some(true),
        context: Some(host.context()),
    }
}

async fn drive(
    environment: Arc<dyn HostEnvironment>,
    config: EmbeddingConfig,
    mut events: Receiver<SessionEvent>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
) {
    let mut state = SessionSnapshot::default();
    let mut ready_signal_sent = false;
    let mut fallback_armed = false;

    let initial = if detect_embedding(environment.as_ref(), &config) {
        match environment.host_api() {
            Some(host) => {
                let mut update = adopt_host(&host, &mut ready_signal_sent);
                update.embedded = Some(true);
                update
            }
            None => {
                // wait once for a late-attaching host, without polling
                fallback_armed = true;
                StateUpdate {
                    embedded: Some(true),
                    ..StateUpdate::default()
                }
            }
        }
    } else {
        StateUpdate {
            embedded: Some(false),
            ready: Some(true),
            context: None,
        }
    };
    initial.apply(&mut state);
    snapshot_tx.send_replace(state.clone());

    let fallback = tokio::time::sleep(Duration::from_millis(config.host_ready_fallback_ms));
    tokio::pin!(fallback);

    loop {
        let update = tokio::select! {
            () = &mut fallback, if fallback_armed => {
                fallback_armed = false;
                match environment.host_api() {
                    Some(host) => adopt_host(&host, &mut ready_signal_sent),
                    // the presentation layer must not block forever on a
                    // host that never attaches
                    None => StateUpdate {
                        ready: Some(true),
                        ..StateUpdate::default()
                    },
                }
            }
            event = events.recv() => match event {
                Some(SessionEvent::HostReady) => match environment.host_api() {
                    Some(host) => adopt_host(&host, &mut ready_signal_sent),
                    None => StateUpdate::default(),
                },
                Some(SessionEvent::Frame(InboundFrameMessage::FarcasterFrame { context })) => {
                    // a host frame identified itself: this overrides any
                    // prior determination, including "not embedded"
                    StateUpdate {
                        embedded: Some(true),
                        ready: Some(true),
                        context: Some(context),
                    }
                }
                None => break,
            },
        };

        let previous = state.clone();
        update.apply(&mut state);
        if state != previous {
            snapshot_tx.send_replace(state.clone());
        }
    }
}
