use memekit_miniapp::actions::ActionBridge;
use memekit_miniapp::session::Session;
use memekit_pinning::PinningClient;

/// The core application state that holds configuration, the embedding
/// session, and other shared resources.
///
/// This struct contains all the data that needs to be shared across async
/// tasks in the application.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks.
pub struct State {
    /// The loaded application configuration.
    pub config: memekit_bridge::config::Config,
    /// Client for the metadata pinning service; owns the shared, pooled HTTP
    /// client of the application.
    pub pinning_client: PinningClient,
    /// Handle to the running embedding session.
    pub session: Session,
    /// Routes user actions to the host API or a degraded fallback.
    pub actions: ActionBridge,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
///
/// This is the recommended way to pass state into async handlers, background
/// tasks, or any context where multiple tasks need read access (and occasional
/// write access).
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
