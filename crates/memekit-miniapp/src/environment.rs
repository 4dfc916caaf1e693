//! Execution-context capabilities and the embedding-detection predicate.

use std::sync::Arc;

use memekit_bridge::config::EmbeddingConfig;
use memekit_bridge::frame::OutboundFrameMessage;

use crate::host::{HostActionError, HostApi};

/// Referrer domains recognized as embedding hosts.
pub const KNOWN_HOST_DOMAINS: &[&str] = &["warpcast.com", "farcaster.xyz", "fc.xyz"];

/// User-agent fragments identifying a host application's web view.
pub const KNOWN_HOST_AGENT_TOKENS: &[&str] = &["warpcast", "farcaster"];

/// URL query parameters marking an embedded launch.
pub const KNOWN_MARKER_PARAMS: &[&str] = &["fc_frame", "fc_miniapp"];

/// Capabilities of the surrounding execution context.
///
/// Everything the session layer knows about the outside world goes through
/// this trait, which keeps classification deterministic under test and free
/// of ambient global lookups. Platform shells implement it over their real
/// primitives; tests implement it over scripted values.
pub trait HostEnvironment: Send + Sync {
    /// Referrer string of the page load; empty when unknown.
    fn referrer(&self) -> String;

    /// User-agent string of the running browser or web view.
    fn user_agent(&self) -> String;

    /// Raw query string of the current URL, without the leading `?`.
    fn query_string(&self) -> String;

    /// Whether the current frame differs from its parent frame.
    fn is_nested(&self) -> bool;

    /// The injected host API, if one is attached right now.
    ///
    /// Callers re-query this on every use: a host may attach after mount,
    /// and action routing must pick it up without re-classification.
    fn host_api(&self) -> Option<Arc<dyn HostApi>>;

    /// Opens a new top-level browsing context at `url`.
    fn open_external(&self, url: &str) -> Result<(), HostActionError>;

    /// Posts a message to the parent frame.
    fn post_to_parent(&self, message: &OutboundFrameMessage) -> Result<(), HostActionError>;
}

/// Decides whether the application is running embedded inside a recognized
/// host.
///
/// Evaluates the union of the available signals: an attached host API, frame
/// nesting, a known referrer domain, a known user-agent token, and marker
/// query parameters. All string comparisons are case-insensitive. Absence of
/// every signal simply yields `false`; nothing here can fail.
///
/// The predicate is evaluated exactly once per session, at mount.
pub fn detect_embedding(environment: &dyn HostEnvironment, config: &EmbeddingConfig) -> bool {
    let referrer = environment.referrer().to_lowercase();
    let user_agent = environment.user_agent().to_lowercase();
    let query = environment.query_string().to_lowercase();

    let host_api_attached = environment.host_api().is_some();
    let nested = environment.is_nested();
    let known_referrer = KNOWN_HOST_DOMAINS
        .iter()
        .copied()
        .chain(config.extra_host_domains.iter().map(String::as_str))
        .any(|domain| referrer.contains(&domain.to_lowercase()));
    let known_agent = KNOWN_HOST_AGENT_TOKENS
        .iter()
        .any(|token| user_agent.contains(token));
    let marked_url = KNOWN_MARKER_PARAMS
        .iter()
        .copied()
        .chain(config.extra_marker_params.iter().map(String::as_str))
        .any(|param| query.contains(&param.to_lowercase()));

    let embedded = host_api_attached || nested || known_referrer || known_agent || marked_url;
    log::debug!(
        "Embedding detection: host_api={host_api_attached}, nested={nested}, \
         referrer={known_referrer}, agent={known_agent}, marker={marked_url} => {embedded}"
    );

    embedded
}

/// Environment of a plain top-level page: no referrer signals, no parent
/// frame, no injected host API.
///
/// Used by headless runs and as the degenerate default; every session built
/// on it classifies as standalone and settles immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandaloneEnvironment;

impl HostEnvironment for StandaloneEnvironment {
    fn referrer(&self) -> String {
        String::new()
    }

    fn user_agent(&self) -> String {
        String::new()
    }

    fn query_string(&self) -> String {
        String::new()
    }

    fn is_nested(&self) -> bool {
        false
    }

    fn host_api(&self) -> Option<Arc<dyn HostApi>> {
        None
    }

    fn open_external(&self, url: &str) -> Result<(), HostActionError> {
        log::info!("Opening external URL: {url}");
        Ok(())
    }

    fn post_to_parent(&self, _message: &OutboundFrameMessage) -> Result<(), HostActionError> {
        Err(HostActionError::ChannelUnavailable {
            action: "post_to_parent",
        })
    }
}
