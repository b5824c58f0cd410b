//! Photovault user API: shared wire types and a typed HTTP client
//!
//! The `client` feature (on by default) carries the reqwest-based client used
//! by the web frontend; the types module stands on its own so other consumers
//! can speak the wire format without pulling in an HTTP stack.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{error::ClientError, VaultClient};
