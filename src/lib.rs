//! Polyglot Client - HTTP client for the Polyglot realtime engine.
//!
//! Publishes events to named channels and reads channel history through the
//! engine's REST surface:
//!
//! ```text
//! POST /apps/{app_id}/channels/{channel}/publish   {"type": .., "data": ..}  → {"id": ..}
//! GET  /apps/{app_id}/channels/{channel}/history                          → {"events": [..]}
//! ```
//!
//! Every request carries the application's API key in `X-API-Key`.
//!
//! # Core Types
//!
//! - [`EventClient`] - Issues publish/history requests
//! - [`Channel`] - Channel-scoped handle borrowed from a client
//! - [`ClientConfig`] - Base URL, application id, API key
//! - [`ClientError`] - Structured failure (engine status + raw body, transport, decode)

// Connection settings
pub mod config;

// Request/response payloads
pub mod event;

// HTTP client
pub mod client;

pub use client::{Channel, ClientError, EventClient, API_KEY_HEADER};
pub use config::{load_config, ClientConfig};
pub use event::{Event, HistoryEntry, PublishResult};
