use std::sync::Arc;

use memekit_bridge::{MessageFromBackend, MessageToBackend};
use memekit_miniapp::environment::StandaloneEnvironment;

fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let mut channels = memekit_bridge::BridgeChannels::default();
    memekit_backend::run(
        Arc::new(StandaloneEnvironment),
        channels.backend_rx,
        channels.backend_tx,
    );

    channels
        .frontend_tx
        .blocking_send(MessageToBackend::ConfigurationRequest)
        .expect("failed to request config");
    channels
        .frontend_tx
        .blocking_send(MessageToBackend::SessionStateRequest)
        .expect("failed to request session state");

    // observe backend pushes until the session settles
    while let Some(message) = channels.frontend_rx.blocking_recv() {
        match message {
            MessageFromBackend::SessionStateUpdate(snapshot) => {
                log::info!(
                    "Session state: embedded={}, ready={}, context={}",
                    snapshot.embedded,
                    snapshot.ready,
                    if snapshot.context.is_some() {
                        "present"
                    } else {
                        "absent"
                    },
                );
                if snapshot.ready {
                    break;
                }
            }
            MessageFromBackend::ConfigurationResponse(config) => {
                log::info!("Loaded configuration: {config:?}");
            }
            other => log::debug!("Got a message from backend: {other:?}"),
        }
    }
}
