//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves bytes, `client` wraps it with the auth and failure
//! interceptors, `api` names the endpoints, `error` classifies failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;
