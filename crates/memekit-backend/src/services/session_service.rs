use memekit_bridge::MessageFromBackend;
use memekit_bridge::frame::InboundFrameMessage;
use memekit_miniapp::session::SessionEvent;

/// Handles an incoming session state request (see
/// [`memekit_bridge::MessageToBackend::SessionStateRequest`]).
pub async fn handle_session_state_request(context: super::AppContextHandle) {
    let snapshot = {
        let state = context.state.read().await;
        state.session.snapshot()
    };
    context
        .send(MessageFromBackend::SessionStateUpdate(snapshot))
        .await;
}

/// Forwards the host's ready announcement into the session driver.
pub async fn handle_host_ready_notification(context: super::AppContextHandle) {
    let events = {
        let state = context.state.read().await;
        state.session.events()
    };
    if events.send(SessionEvent::HostReady).await.is_err() {
        log::error!("Session driver is gone; dropping a host ready notification");
    }
}

/// Forwards a recognized cross-frame message into the session driver.
pub async fn handle_frame_message(context: super::AppContextHandle, message: InboundFrameMessage) {
    let events = {
        let state = context.state.read().await;
        state.session.events()
    };
    if events.send(SessionEvent::Frame(message)).await.is_err() {
        log::error!("Session driver is gone; dropping a cross-frame message");
    }
}
