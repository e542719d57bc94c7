//! Data models and types for the application.
//!
//! - [`FetchPhase`] - Outcome-bearing phase of the fetch state machine

mod viewer;

pub use viewer::FetchPhase;
