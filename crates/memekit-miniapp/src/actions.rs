//! Action routing between the injected host API and graceful fallbacks.

use std::sync::Arc;

use memekit_bridge::config::ShareConfig;
use memekit_bridge::frame::OutboundFrameMessage;
use memekit_bridge::token::TokenShareRequest;

use crate::environment::HostEnvironment;

/// Routes logical user actions to the host API when one is attached, or to a
/// degraded fallback when it is not.
///
/// The host API is re-queried on every call, so a host attaching after mount
/// is picked up without re-classification. Every operation is fire and
/// forget: transport failures are logged and swallowed, and no completion
/// status is reported to the caller.
#[derive(Clone)]
pub struct ActionBridge {
    environment: Arc<dyn HostEnvironment>,
    share: ShareConfig,
}

impl ActionBridge {
    pub fn new(environment: Arc<dyn HostEnvironment>, share: ShareConfig) -> Self {
        Self { environment, share }
    }

    /// Opens `url` through the host, or in a new top-level browsing context
    /// when no host is attached.
    pub fn open_url(&self, url: &str) {
        if let Some(host) = self.environment.host_api() {
            if let Err(error) = host.open_url(url) {
                log::warn!("Host refused to open {url}: {error}");
            }
            return;
        }

        if let Err(error) = self.environment.open_external(url) {
            log::warn!("Failed to open {url} in a new browsing context: {error}");
        }
    }

    /// Dismisses the embedded presentation. Without a host this asks the
    /// parent frame to do it; on a top-level page it is a no-op.
    pub fn close(&self) {
        if let Some(host) = self.environment.host_api() {
            if let Err(error) = host.close() {
                log::warn!("Host refused to close the mini app: {error}");
            }
            return;
        }

        self.post_to_parent(OutboundFrameMessage::CloseMiniapp);
    }

    /// Shares a plain text snippet.
    pub fn share_text(&self, text: &str) {
        if let Some(host) = self.environment.host_api() {
            if let Err(error) = host.share_text(text) {
                log::warn!("Host refused to share text: {error}");
            }
            return;
        }

        self.post_to_parent(OutboundFrameMessage::ShareText {
            text: text.to_string(),
        });
    }

    /// Shares a cast with optional ordered link embeds.
    pub fn share_cast(&self, text: &str, embeds: Option<Vec<String>>) {
        if let Some(host) = self.environment.host_api() {
            if let Err(error) = host.share_cast(text, embeds.as_deref()) {
                log::warn!("Host refused to share a cast: {error}");
            }
            return;
        }

        self.post_to_parent(OutboundFrameMessage::ShareCast {
            text: text.to_string(),
            embeds,
        });
    }

    /// Announces a freshly deployed token: a fixed announcement template plus
    /// a single embed link pointing at the public token page.
    pub fn share_token_creation(&self, request: &TokenShareRequest) {
        let text = build_announcement(request);
        let embed_url = format!("{}{}", self.share.token_page_base_url, request.address);
        self.share_cast(&text, Some(vec![embed_url]));
    }

    /// Posts a fallback message to the parent frame; silently skipped on
    /// top-level pages where no parent exists.
    fn post_to_parent(&self, message: OutboundFrameMessage) {
        if !self.environment.is_nested() {
            return;
        }

        if let Err(error) = self.environment.post_to_parent(&message) {
            log::warn!("Failed to post a fallback message to the parent frame: {error}");
        }
    }
}

fn build_announcement(request: &TokenShareRequest) -> String {
    format!(
        "🚀 Just launched {} (${}) on Base!\n\nCreate your own meme coin in 3 clicks with MemeKit 👇",
        request.name, request.symbol
    )
}
