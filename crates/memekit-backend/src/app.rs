//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use std::sync::Arc;

use memekit_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::SessionStateRequest => {
                services::session_service::handle_session_state_request(self.clone()).await;
            }
            MessageToBackend::HostReadyNotification => {
                services::session_service::handle_host_ready_notification(self.clone()).await;
            }
            MessageToBackend::FrameMessageReceived(message) => {
                services::session_service::handle_frame_message(self.clone(), message).await;
            }
            MessageToBackend::OpenUrlRequest(url) => {
                services::share_service::handle_open_url_request(self.clone(), url).await;
            }
            MessageToBackend::CloseRequest => {
                services::share_service::handle_close_request(self.clone()).await;
            }
            MessageToBackend::ShareTextRequest(text) => {
                services::share_service::handle_share_text_request(self.clone(), text).await;
            }
            MessageToBackend::ShareCastRequest { text, embeds } => {
                services::share_service::handle_share_cast_request(self.clone(), text, embeds)
                    .await;
            }
            MessageToBackend::ShareTokenCreationRequest(request) => {
                services::share_service::handle_share_token_creation_request(self.clone(), request)
                    .await;
            }
            MessageToBackend::PinTokenMetadataRequest(metadata) => {
                services::pinning_service::handle_pin_token_metadata_request(
                    self.clone(),
                    metadata,
                )
                .await;
            }
            MessageToBackend::PinUserProfileRequest(profile) => {
                services::pinning_service::handle_pin_user_profile_request(self.clone(), profile)
                    .await;
            }
            MessageToBackend::FetchPinnedDataRequest(content_id) => {
                services::pinning_service::handle_fetch_pinned_data_request(
                    self.clone(),
                    content_id,
                )
                .await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        if self.tx.send(message).await.is_err() {
            log::warn!("Frontend bridge closed; dropping a backend message");
        }
    }

    /// Send a notification message to the frontend bridge.
    pub async fn send_notification(
        &self,
        notification_type: memekit_bridge::notification::NotificationType,
        content: impl Into<String>,
    ) {
        self.send(MessageFromBackend::NotificationMessage(
            memekit_bridge::notification::NotificationMessage::new(notification_type, content),
        ))
        .await;
    }
}
