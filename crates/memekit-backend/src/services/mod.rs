//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, perform side effects (network, host actions), and emit
//! responses or notifications back to the frontend.

pub mod config_service;
pub mod pinning_service;
pub mod session_service;
pub mod share_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;
