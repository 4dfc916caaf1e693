//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, the embedding
//! session, and the message dispatch loop that listens to frontend bridge
//! requests.

use std::{sync::Arc, thread};

use memekit_bridge::config::Config;
use memekit_bridge::{MessageFromBackend, MessageToBackend};
use memekit_miniapp::actions::ActionBridge;
use memekit_miniapp::environment::HostEnvironment;
use memekit_miniapp::session::Session;
use memekit_pinning::{PinningClient, PinningCredentials};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(
    config: Config,
    credentials: Option<PinningCredentials>,
    environment: Arc<dyn HostEnvironment>,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) {
    let request_client = reqwest::Client::new();
    let pinning_client = PinningClient::new(request_client, config.pinning.clone(), credentials);
    let session = Session::spawn(environment.clone(), config.embedding.clone());
    let actions = ActionBridge::new(environment, config.share.clone());

    // push every session transition to the frontend as it happens
    let mut snapshot_rx = session.watch();
    let session_tx = tx.clone();
    tokio::spawn(async move {
        loop {
            let snapshot = snapshot_rx.borrow_and_update().clone();
            let update = MessageFromBackend::SessionStateUpdate(snapshot);
            if session_tx.send(update).await.is_err() {
                break;
            }
            if snapshot_rx.changed().await.is_err() {
                break;
            }
        }
    });

    let state = Arc::new(RwLock::new(State {
        config,
        pinning_client,
        session,
        actions,
    }));

    let context = Arc::new(AppContext { state, tx });
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime with an explicit configuration and credentials.
///
/// Production callers go through [`run`], which loads both from the
/// environment; this entry point exists for harnesses that need full control
/// over the injected capabilities.
pub fn run_with(
    config: Config,
    credentials: Option<PinningCredentials>,
    environment: Arc<dyn HostEnvironment>,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(config, credentials, environment, rx, tx).await });
    });
}

/// Load the configuration and spawn the backend runtime.
pub fn run(
    environment: Arc<dyn HostEnvironment>,
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async {
            let config = crate::config::load_config()
                .await
                .expect("failed to load config");
            let credentials = crate::config::credentials_from_env();
            setup_backend(config, credentials, environment, rx, tx).await;
        });
    });
}
