//! Stateless battle service.
//!
//! Speaks newline-delimited JSON over TCP: every non-blank request line gets one
//! response line, and connections share nothing but the matching policy.

pub mod config;
mod service;

pub use config::{ConfigError, ServerConfig};
pub use service::{Acceptor, MAX_REQUEST_BYTES, handle_connection, serve};
