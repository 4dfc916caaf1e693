//! End-to-end bridge flow against a scripted environment: session updates,
//! host event injection, share fallbacks, and configuration round trips.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use memekit_bridge::config::Config;
use memekit_bridge::context::{HostContext, HostUser};
use memekit_bridge::frame::{InboundFrameMessage, OutboundFrameMessage};
use memekit_bridge::session::SessionSnapshot;
use memekit_bridge::token::TokenShareRequest;
use memekit_bridge::{BridgeChannels, MessageFromBackend, MessageToBackend};
use memekit_miniapp::environment::HostEnvironment;
use memekit_miniapp::host::{HostActionError, HostApi};
use tokio::sync::mpsc::Receiver;
use tokio::time::timeout;

/// A page loaded from a host feed inside a parent frame, with no injected
/// host API; fallbacks go through the recorded parent channel.
#[derive(Default)]
struct NestedFrameEnvironment {
    posted: Mutex<Vec<OutboundFrameMessage>>,
}

impl NestedFrameEnvironment {
    fn posted(&self) -> Vec<OutboundFrameMessage> {
        self.posted.lock().unwrap().clone()
    }
}

impl HostEnvironment for NestedFrameEnvironment {
    fn referrer(&self) -> String {
        "https://warpcast.com/~/feed".to_string()
    }

    fn user_agent(&self) -> String {
        String::new()
    }

    fn query_string(&self) -> String {
        String::new()
    }

    fn is_nested(&self) -> bool {
        true
    }

    fn host_api(&self) -> Option<Arc<dyn HostApi>> {
        None
    }

    fn open_external(&self, _url: &str) -> Result<(), HostActionError> {
        Ok(())
    }

    fn post_to_parent(&self, message: &OutboundFrameMessage) -> Result<(), HostActionError> {
        self.posted.lock().unwrap().push(message.clone());
        Ok(())
    }
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.embedding.host_ready_fallback_ms = 50;
    config
}

fn viewer_context() -> HostContext {
    HostContext {
        user: Some(HostUser {
            id: 42,
            handle: "memelord".to_string(),
            display_name: "Meme Lord".to_string(),
            avatar_url: "https://example.com/pfp.png".to_string(),
        }),
        ..HostContext::default()
    }
}

/// Consumes backend messages until a session update matching `predicate`
/// arrives.
async fn wait_for_session_update(
    rx: &mut Receiver<MessageFromBackend>,
    predicate: impl Fn(&SessionSnapshot) -> bool,
) -> SessionSnapshot {
    timeout(Duration::from_secs(2), async {
        loop {
            match rx.recv().await.expect("backend closed the bridge") {
                MessageFromBackend::SessionStateUpdate(snapshot) if predicate(&snapshot) => {
                    return snapshot;
                }
                _ => {}
            }
        }
    })
    .await
    .expect("no matching session update arrived")
}

#[tokio::test]
async fn frame_messages_and_shares_flow_over_the_bridge() {
    let mut channels = BridgeChannels::new(16);
    let environment = Arc::new(NestedFrameEnvironment::default());
    memekit_backend::run_with(
        test_config(),
        None,
        environment.clone(),
        channels.backend_rx,
        channels.backend_tx,
    );

    // nested frame, no host: the session settles as embedded without context
    let snapshot =
        wait_for_session_update(&mut channels.frontend_rx, |snapshot| snapshot.ready).await;
    assert!(snapshot.embedded);
    assert!(snapshot.context.is_none());

    // an injected frame message supplies the context after the fact
    channels
        .frontend_tx
        .send(MessageToBackend::FrameMessageReceived(
            InboundFrameMessage::FarcasterFrame {
                context: viewer_context(),
            },
        ))
        .await
        .unwrap();
    let snapshot = wait_for_session_update(&mut channels.frontend_rx, |snapshot| {
        snapshot.context.is_some()
    })
    .await;
    assert_eq!(snapshot.context, Some(viewer_context()));

    // a token announcement degrades to a parent-frame cast message
    channels
        .frontend_tx
        .send(MessageToBackend::ShareTokenCreationRequest(
            TokenShareRequest {
                name: "Doge2".to_string(),
                symbol: "DOGE2".to_string(),
                address: "0xabc".to_string(),
            },
        ))
        .await
        .unwrap();
    timeout(Duration::from_secs(2), async {
        while environment.posted().is_empty() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("the share never reached the parent frame");

    let posted = environment.posted();
    assert_eq!(posted.len(), 1);
    let OutboundFrameMessage::ShareCast { text, embeds } = &posted[0] else {
        panic!("expected a share_cast message, got {posted:?}");
    };
    assert!(text.contains("Doge2") && text.contains("DOGE2"));
    assert_eq!(embeds.as_ref().unwrap().len(), 1);
    assert!(embeds.as_ref().unwrap()[0].contains("0xabc"));
}

#[tokio::test]
async fn configuration_and_session_state_requests_are_answered() {
    let mut channels = BridgeChannels::new(16);
    let environment = Arc::new(NestedFrameEnvironment::default());
    memekit_backend::run_with(
        test_config(),
        None,
        environment,
        channels.backend_rx,
        channels.backend_tx,
    );

    channels
        .frontend_tx
        .send(MessageToBackend::ConfigurationRequest)
        .await
        .unwrap();
    let config = timeout(Duration::from_secs(2), async {
        loop {
            match channels
                .frontend_rx
                .recv()
                .await
                .expect("backend closed the bridge")
            {
                MessageFromBackend::ConfigurationResponse(config) => return config,
                _ => {}
            }
        }
    })
    .await
    .expect("no configuration response arrived");
    assert_eq!(config.embedding.host_ready_fallback_ms, 50);

    // an explicit state request is answered even after the pushed updates
    wait_for_session_update(&mut channels.frontend_rx, |snapshot| snapshot.ready).await;
    channels
        .frontend_tx
        .send(MessageToBackend::SessionStateRequest)
        .await
        .unwrap();
    let snapshot =
        wait_for_session_update(&mut channels.frontend_rx, |snapshot| snapshot.ready).await;
    assert!(snapshot.embedded);
}
