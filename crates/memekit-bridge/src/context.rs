use serde::{Deserialize, Serialize};

/// Context payload supplied by an embedding host once it has responded.
///
/// Either the whole payload is absent (host never attached or never replied)
/// or it is present with every field independently optional; no field
/// implies another one is set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostContext {
    /// The viewer's identity inside the host, if the host shared it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<HostUser>,
    /// The post the application was opened from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_post: Option<ActivePost>,
    /// The feed channel the application was opened in, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelRef>,
}

/// Identity of the viewing user as known to the embedding host.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostUser {
    /// Numeric identifier of the user within the host.
    pub id: u64,
    /// Short unique handle, without any `@` prefix.
    pub handle: String,
    /// Human-readable display name.
    pub display_name: String,
    /// URL of the user's avatar image.
    pub avatar_url: String,
}

/// Reference to the social post the mini app was launched from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePost {
    /// Opaque identifier of the post within the host.
    pub id: String,
    /// The author of the post.
    pub author: PostAuthor,
}

/// Author of an [`ActivePost`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    /// Numeric identifier of the author within the host.
    pub id: u64,
    /// Short unique handle, without any `@` prefix.
    pub handle: String,
}

/// Reference to a host feed channel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRef {
    /// Opaque channel identifier.
    pub id: String,
    /// Human-readable channel name.
    pub name: String,
}
