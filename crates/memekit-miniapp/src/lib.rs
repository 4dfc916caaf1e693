//! Embedding-session primitives for running inside a social-feed host.
//!
//! This crate decides whether the application is embedded inside a
//! recognized host frame or running as a standalone page, tracks the
//! resulting session state as asynchronous host signals arrive, and routes a
//! fixed set of user actions either to the injected host API or to a
//! graceful fallback.
//!
//! The pieces fit together as follows:
//! - [`environment::HostEnvironment`] abstracts the execution context
//!   (referrer, user agent, frame nesting, injected host API), so the whole
//!   layer is driven by injected capabilities instead of ambient globals.
//! - [`session::Session`] classifies the environment once at mount and then
//!   merges racing triggers (initial check, a single bounded fallback wait,
//!   host-ready events, cross-frame messages) into one observable snapshot.
//! - [`actions::ActionBridge`] delivers user actions, re-querying the host
//!   API per call and degrading to parent-frame messages or a no-op.

pub mod actions;
pub mod environment;
pub mod host;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
