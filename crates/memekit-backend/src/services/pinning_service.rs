//! Handlers for pinning requests.
//!
//! Uploads run on spawned tasks so a slow pinning service never stalls the
//! dispatch loop; outcomes come back to the frontend as completion messages
//! or error notifications.

use memekit_bridge::MessageFromBackend;
use memekit_bridge::metadata::{TokenMetadata, UserProfile};
use memekit_bridge::notification::NotificationType;
use memekit_pinning::PinningClient;

async fn pinning_client(context: &super::AppContextHandle) -> PinningClient {
    let state = context.state.read().await;
    state.pinning_client.clone()
}

/// Handles an incoming token metadata pin request (see
/// [`memekit_bridge::MessageToBackend::PinTokenMetadataRequest`]).
pub async fn handle_pin_token_metadata_request(
    context: super::AppContextHandle,
    metadata: TokenMetadata,
) {
    let client = pinning_client(&context).await;

    tokio::spawn(async move {
        match client.upload_token_metadata(&metadata).await {
            Ok(content_id) => {
                context
                    .send_notification(
                        NotificationType::Success,
                        format!("Metadata for {} is pinned.", metadata.symbol),
                    )
                    .await;
                context
                    .send(MessageFromBackend::PinningCompleted { content_id })
                    .await;
            }
            Err(error) => {
                context
                    .send_notification(NotificationType::Error, error.to_string())
                    .await;
            }
        }
    });
}

/// Handles an incoming user profile pin request (see
/// [`memekit_bridge::MessageToBackend::PinUserProfileRequest`]).
pub async fn handle_pin_user_profile_request(
    context: super::AppContextHandle,
    profile: UserProfile,
) {
    let client = pinning_client(&context).await;

    tokio::spawn(async move {
        match client.upload_user_profile(&profile).await {
            Ok(content_id) => {
                context
                    .send(MessageFromBackend::PinningCompleted { content_id })
                    .await;
            }
            Err(error) => {
                context
                    .send_notification(NotificationType::Error, error.to_string())
                    .await;
            }
        }
    });
}

/// Handles a request to fetch a pinned document back from a gateway (see
/// [`memekit_bridge::MessageToBackend::FetchPinnedDataRequest`]).
pub async fn handle_fetch_pinned_data_request(
    context: super::AppContextHandle,
    content_id: String,
) {
    let client = pinning_client(&context).await;

    tokio::spawn(async move {
        match client.get_data(&content_id).await {
            Ok(document) => {
                context
                    .send(MessageFromBackend::PinnedDataResponse {
                        content_id,
                        document,
                    })
                    .await;
            }
            Err(error) => {
                context
                    .send_notification(NotificationType::Error, error.to_string())
                    .await;
            }
        }
    });
}
