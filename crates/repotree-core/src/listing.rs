//! Tree listing payload decoding.
//!
//! Mirrors the shape of `GET /repos/{owner}/{repo}/git/trees/{branch}` with
//! `?recursive=1`. Only `path` and `type` are consumed; size, mode and hash
//! fields are ignored. Error bodies (unknown repo, missing branch) carry no
//! `tree` field, which is how the caller tells success from failure.

use serde::Deserialize;

use crate::tree::{NodeKind, PathTree};

/// One entry of the recursive listing.
///
/// `type` is `"blob"`, `"tree"` or `"commit"` in practice; anything that is
/// not `"tree"` renders as a file, so unknown tags never fail decoding.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingEntry {
    pub path: String,
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,
}

impl ListingEntry {
    fn node_kind(&self) -> NodeKind {
        match self.entry_type.as_deref() {
            Some("tree") => NodeKind::Directory,
            _ => NodeKind::File,
        }
    }
}

/// Success payload of the trees endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TreeListing {
    #[serde(default)]
    pub tree: Option<Vec<ListingEntry>>,
    /// Set by the API when the listing was cut off at its size limit.
    #[serde(default)]
    pub truncated: bool,
}

impl TreeListing {
    /// Build the path tree, or `None` when the payload carried no listing.
    ///
    /// A present-but-empty `tree` array is an empty repository, not a
    /// failure, and yields an empty tree.
    pub fn into_tree(self) -> Option<PathTree> {
        let entries = self.tree?;
        let mut tree = PathTree::new();
        for entry in &entries {
            tree.insert(&entry.path, entry.node_kind());
        }
        Some(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_builds_tree() {
        let listing: TreeListing = serde_json::from_str(
            r#"{
                "sha": "abc123",
                "tree": [
                    {"path": "src/App.js", "type": "blob", "size": 120},
                    {"path": "src/index.js", "type": "blob"},
                    {"path": "README.md", "type": "blob"}
                ],
                "truncated": false
            }"#,
        )
        .unwrap();

        let tree = listing.into_tree().unwrap();
        let roots: Vec<_> = tree.children().iter().map(|n| n.name()).collect();
        assert_eq!(roots, ["src", "README.md"]);

        let src: Vec<_> = tree
            .find("src")
            .unwrap()
            .children()
            .iter()
            .map(|n| n.name())
            .collect();
        assert_eq!(src, ["App.js", "index.js"]);
        assert!(tree.find("src/App.js").unwrap().children().is_empty());
    }

    #[test]
    fn missing_tree_field_is_none() {
        let listing: TreeListing = serde_json::from_str("{}").unwrap();
        assert!(listing.into_tree().is_none());

        let error_body: TreeListing =
            serde_json::from_str(r#"{"message": "Not Found", "status": "404"}"#).unwrap();
        assert!(error_body.into_tree().is_none());
    }

    #[test]
    fn empty_listing_is_an_empty_tree() {
        let listing: TreeListing = serde_json::from_str(r#"{"tree": []}"#).unwrap();
        let tree = listing.into_tree().unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn tree_tagged_entries_become_directories() {
        let listing: TreeListing = serde_json::from_str(
            r#"{"tree": [
                {"path": "docs", "type": "tree"},
                {"path": "vendor/lib", "type": "commit"}
            ]}"#,
        )
        .unwrap();

        let tree = listing.into_tree().unwrap();
        assert!(tree.find("docs").unwrap().is_dir());
        // Submodule pointers have no descendants and render as files.
        assert!(!tree.find("vendor/lib").unwrap().is_dir());
        assert!(tree.find("vendor").unwrap().is_dir());
    }

    #[test]
    fn entries_without_type_still_build() {
        let listing: TreeListing =
            serde_json::from_str(r#"{"tree": [{"path": "a/b.txt"}]}"#).unwrap();
        let tree = listing.into_tree().unwrap();
        assert!(tree.find("a").unwrap().is_dir());
        assert!(!tree.find("a/b.txt").unwrap().is_dir());
    }

    #[test]
    fn truncated_flag_is_carried_through() {
        let listing: TreeListing =
            serde_json::from_str(r#"{"tree": [], "truncated": true}"#).unwrap();
        assert!(listing.truncated);
    }
}
