use memekit_bridge::context::HostContext;

/// Errors that can occur while delivering an action to the host side.
///
/// These never reach the presentation layer: every caller of a host action
/// logs the failure and carries on, preserving the fire-and-forget contract.
#[derive(Debug, thiserror::Error)]
pub enum HostActionError {
    /// The injected host API refused or failed to execute the action.
    #[error("host rejected the {action} action: {reason}")]
    Rejected {
        /// Name of the rejected action.
        action: &'static str,
        /// Host-provided failure description.
        reason: String,
    },
    /// No delivery channel exists for the action, e.g. posting a message to
    /// the parent frame from a top-level page.
    #[error("no delivery channel for the {action} action")]
    ChannelUnavailable {
        /// Name of the undeliverable action.
        action: &'static str,
    },
}

/// Capability API injected by an embedding host.
///
/// Mirrors the action surface a host offers its mini apps: a context payload
/// plus a handful of imperative actions. Implementations wrap whatever the
/// concrete platform provides (a JS SDK object, a test double).
pub trait HostApi: Send + Sync {
    /// The context payload the host currently exposes.
    fn context(&self) -> HostContext;

    /// Tells the host the embedded content finished mounting and may be
    /// shown. Hosts are expected to tolerate repeated calls; the session
    /// driver additionally guarantees at most one per session.
    fn ready(&self) -> Result<(), HostActionError>;

    /// Opens `url` through the host chrome.
    fn open_url(&self, url: &str) -> Result<(), HostActionError>;

    /// Dismisses the embedded presentation.
    fn close(&self) -> Result<(), HostActionError>;

    /// Shares a plain text snippet.
    fn share_text(&self, text: &str) -> Result<(), HostActionError>;

    /// Shares a cast with optional ordered link embeds.
    fn share_cast(&self, text: &str, embeds: Option<&[String]>) -> Result<(), HostActionError>;
}
