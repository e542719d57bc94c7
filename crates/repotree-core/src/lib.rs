//! Core domain logic for the repository tree viewer.
//!
//! This crate is browser-free on purpose: everything here runs (and is
//! tested) natively with plain `cargo test`.
//!
//! - [`tree`] - Path tree construction from flat repository listings
//! - [`locator`] - GitHub repository URL parsing
//! - [`listing`] - Tree listing payload decoding

pub mod listing;
pub mod locator;
pub mod tree;

pub use listing::{ListingEntry, TreeListing};
pub use locator::{LocatorError, RepoLocator, DEFAULT_BRANCH};
pub use tree::{NodeKind, PathTree, TreeNode, TreeRow};
