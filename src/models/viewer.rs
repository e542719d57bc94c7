//! Viewer state machine types.

use repotree_core::{PathTree, TreeListing};

use crate::config::messages;
use crate::error::FetchError;

/// Phase of the fetch state machine.
///
/// Exactly one variant is current at any time, so a tree and an error can
/// never be on screen together and `Loading` always starts from a clean
/// slate. The previous tree is dropped wholesale on the next submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchPhase {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A submission is in flight.
    Loading,
    /// Listing fetched and built into a tree.
    Ready(PathTree),
    /// The attempt failed; holds the user-facing message.
    Failed(String),
}

impl FetchPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchPhase::Loading)
    }

    pub fn tree(&self) -> Option<&PathTree> {
        match self {
            FetchPhase::Ready(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Next phase for a completed listing request.
    ///
    /// A payload without a `tree` field means the repository or branch did
    /// not resolve; a transport fault maps to the generic fetch message.
    /// The underlying [`FetchError`] is the caller's to log.
    pub fn from_listing(result: Result<TreeListing, FetchError>) -> Self {
        match result {
            Ok(listing) => match listing.into_tree() {
                Some(tree) => FetchPhase::Ready(tree),
                None => FetchPhase::Failed(messages::NO_LISTING.to_string()),
            },
            Err(_) => FetchPhase::Failed(messages::FETCH_FAILED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(json: &str) -> TreeListing {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn listing_with_tree_becomes_ready() {
        let phase = FetchPhase::from_listing(Ok(listing(
            r#"{"tree": [{"path": "src/App.js"}, {"path": "src/index.js"}, {"path": "README.md"}]}"#,
        )));

        let FetchPhase::Ready(tree) = phase else {
            panic!("expected Ready");
        };
        let roots: Vec<_> = tree.children().iter().map(|n| n.name()).collect();
        assert_eq!(roots, ["src", "README.md"]);
    }

    #[test]
    fn missing_tree_field_becomes_failed() {
        let phase = FetchPhase::from_listing(Ok(listing("{}")));
        assert_eq!(
            phase.error(),
            Some("Could not fetch repo contents. Check the URL and branch.")
        );
    }

    #[test]
    fn empty_listing_is_ready_not_failed() {
        let phase = FetchPhase::from_listing(Ok(listing(r#"{"tree": []}"#)));
        let FetchPhase::Ready(tree) = phase else {
            panic!("expected Ready");
        };
        assert!(tree.is_empty());
    }

    #[test]
    fn transport_fault_becomes_failed() {
        let phase = FetchPhase::from_listing(Err(FetchError::Timeout));
        assert_eq!(phase.error(), Some("Error fetching data."));

        let phase = FetchPhase::from_listing(Err(FetchError::JsonParseError("eof".into())));
        assert_eq!(phase.error(), Some("Error fetching data."));
    }

    #[test]
    fn accessors_match_variants() {
        assert!(FetchPhase::Loading.is_loading());
        assert!(!FetchPhase::Idle.is_loading());
        assert!(FetchPhase::Idle.tree().is_none());
        assert!(FetchPhase::Idle.error().is_none());
    }
}
