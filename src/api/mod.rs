//! OVH API access.
//!
//! Plain JSON GETs against the public order catalog and availability
//! endpoints. Nothing here needs credentials.

mod client;


// Re-export public API
pub use client::OvhClient;
