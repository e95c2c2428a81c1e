//! Infrastructure Services
//!
//! - **client**: HTTP client for the change order service procedures
//! - **host**: the boundary to the embedding CRM page (toasts, navigation,
//!   wizard dismissal)
//!
//! The services are designed to be WASM-first, using browser APIs and async
//! traits without Send/Sync bounds for compatibility.

pub mod client;
pub mod host;
