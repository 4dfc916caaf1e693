//! Cross-frame message envelopes.
//!
//! When the application runs nested inside a parent frame without an injected
//! host API, it talks to the parent through JSON messages. The envelopes here
//! are the full wire contract: inbound payloads that do not parse into
//! [`InboundFrameMessage`] are rejected at the boundary and never reach the
//! session state machine.

use serde::{Deserialize, Serialize};

use crate::context::HostContext;

/// Messages the parent frame may deliver to the embedded application.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundFrameMessage {
    /// The parent identifies itself as an embedding host frame and hands over
    /// its context payload. May arrive at any point of the session, including
    /// after the session was classified as not embedded.
    FarcasterFrame {
        /// Context supplied by the host frame.
        context: HostContext,
    },
}

/// Messages the embedded application may post to its parent frame.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundFrameMessage {
    /// Ask the parent to dismiss the embedded presentation.
    CloseMiniapp,
    /// Ask the parent to share a plain text snippet.
    ShareText {
        /// Text to share.
        text: String,
    },
    /// Ask the parent to share a cast with optional link embeds.
    ShareCast {
        /// Text body of the cast.
        text: String,
        /// Ordered embed URLs; omitted from the wire when absent.
        #[serde(skip_serializing_if = "Option::is_none")]
        embeds: Option<Vec<String>>,
    },
}
