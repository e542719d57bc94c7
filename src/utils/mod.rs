//! Utility modules for networking, DOM access, and image export.
//!
//! - [`fetch_json`] - Network fetching with timeout
//! - [`dom`] - Safe access to window/document
//! - [`export`] - Canvas rasterization of the tree

pub mod dom;
pub mod export;
mod fetch;

pub use fetch::{fetch_json, race_with_timeout, RaceResult};
