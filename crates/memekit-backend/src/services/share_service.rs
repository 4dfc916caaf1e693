//! Routes user action requests into the action bridge.
//!
//! Every handler here is fire and forget by contract: the bridge reports no
//! completion status, and transport failures are logged inside it.

use memekit_bridge::token::TokenShareRequest;
use memekit_miniapp::actions::ActionBridge;

async fn actions(context: &super::AppContextHandle) -> ActionBridge {
    let state = context.state.read().await;
    state.actions.clone()
}

/// Handles a request to open a URL outside of the application.
pub async fn handle_open_url_request(context: super::AppContextHandle, url: String) {
    actions(&context).await.open_url(&url);
}

/// Handles a request to close the embedded presentation.
pub async fn handle_close_request(context: super::AppContextHandle) {
    actions(&context).await.close();
}

/// Handles a request to share a plain text snippet.
pub async fn handle_share_text_request(context: super::AppContextHandle, text: String) {
    actions(&context).await.share_text(&text);
}

/// Handles a request to share a cast with optional link embeds.
pub async fn handle_share_cast_request(
    context: super::AppContextHandle,
    text: String,
    embeds: Option<Vec<String>>,
) {
    actions(&context).await.share_cast(&text, embeds);
}

/// Handles a request to announce a freshly deployed token.
pub async fn handle_share_token_creation_request(
    context: super::AppContextHandle,
    request: TokenShareRequest,
) {
    actions(&context).await.share_token_creation(&request);
}
