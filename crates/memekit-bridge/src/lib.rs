//! Communication bridge between the presentation frontend and the session
//! backend.
//!
//! This crate defines the types and protocols used to connect a presentation
//! frontend with an asynchronous backend responsible for embedding detection,
//! host action routing, metadata pinning, and more.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., share a cast, pin token metadata,
//!   request the current session state).
//! - The backend pushes events (e.g., session state updates, notifications,
//!   pinning results).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod context;
pub mod frame;
pub mod metadata;
pub mod notification;
pub mod session;
pub mod token;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to push
/// asynchronous progress/events (e.g., session state transitions, pinning
/// results, notifications).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// Current state of the embedding session. Pushed on every transition and
    /// in response to [`MessageToBackend::SessionStateRequest`].
    SessionStateUpdate(session::SessionSnapshot),
    /// A pinning request finished and the content is addressable.
    PinningCompleted {
        /// Content identifier (IPFS hash) of the pinned document.
        content_id: String,
    },
    /// A previously pinned document fetched back from a gateway.
    PinnedDataResponse {
        /// Content identifier the document was fetched by.
        content_id: String,
        /// The retrieved JSON document.
        document: serde_json::Value,
    },
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request for the current embedding session state.
    SessionStateRequest,
    /// The embedding host announced that its API finished attaching.
    HostReadyNotification,
    /// A cross-frame message arrived from the parent frame.
    FrameMessageReceived(frame::InboundFrameMessage),
    /// Request to open a URL outside of the application.
    OpenUrlRequest(String),
    /// Request to close the embedded presentation.
    CloseRequest,
    /// Request to share a plain text snippet through the host.
    ShareTextRequest(String),
    /// Request to share a cast with optional link embeds.
    ShareCastRequest {
        text: String,
        embeds: Option<Vec<String>>,
    },
    /// Request to announce a freshly deployed token as a cast.
    ShareTokenCreationRequest(token::TokenShareRequest),
    /// Request to pin token metadata to the pinning service.
    PinTokenMetadataRequest(metadata::TokenMetadata),
    /// Request to pin a user profile to the pinning service.
    PinUserProfileRequest(metadata::UserProfile),
    /// Request to fetch a pinned document by its content identifier.
    FetchPinnedDataRequest(String),
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
