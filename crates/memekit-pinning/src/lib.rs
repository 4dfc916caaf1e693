//! HTTP client for a third-party pinning service.
//!
//! Token metadata, user profiles, and the token registry are persisted as
//! content-addressed JSON documents on a distributed content network through
//! a Pinata-style pinning API. This crate owns the request/response shapes of
//! that API and a thin [`client::PinningClient`] over a shared
//! [`reqwest::Client`]; the document vocabulary itself lives in
//! [`memekit_bridge::metadata`] so both sides of the bridge agree on it.

pub mod client;

pub use crate::client::{PinningClient, PinningCredentials, PinningError};
