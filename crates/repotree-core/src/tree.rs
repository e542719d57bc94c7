//! Path tree construction from flat repository listings.
//!
//! The GitHub trees endpoint returns every path in a snapshot as a flat,
//! `/`-delimited list. [`PathTree`] folds that list into a nested structure
//! suitable for rendering.
//!
//! # Path Convention
//!
//! - Paths are relative, no leading or trailing slashes: `src/app.rs`
//! - Sibling names are unique; re-inserting an existing path is a no-op
//! - Sibling order is first-occurrence order of the input (API order),
//!   never sorted

/// Classification of a tree node.
///
/// The listing tags entries as `blob` or `tree`; the tag is kept so an
/// empty directory is not mistaken for a file. Nodes created implicitly as
/// intermediate path segments are always directories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// A single named node in the path tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    name: String,
    kind: NodeKind,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: &str, kind: NodeKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// True for nodes tagged as directories and for any node that gained
    /// children, which covers untagged inputs as well.
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Child nodes in insertion order.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }
}

/// One row of the flattened tree, in preorder.
#[derive(Clone, Copy, Debug)]
pub struct TreeRow<'a> {
    pub depth: usize,
    pub node: &'a TreeNode,
}

/// Root of a parsed repository tree.
///
/// The root itself is anonymous; top-level entries of the repository are
/// its direct children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathTree {
    children: Vec<TreeNode>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from plain path strings, treating every entry as a file
    /// unless descendants prove otherwise.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path.as_ref(), NodeKind::File);
        }
        tree
    }

    /// Insert a single path, creating missing ancestors along the way.
    ///
    /// `kind` applies to the final segment only; intermediate segments are
    /// directories. Inserting a path that already exists never downgrades a
    /// directory to a file. Empty paths and empty segments are skipped,
    /// so the function has no failure case.
    pub fn insert(&mut self, path: &str, kind: NodeKind) {
        let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
        let mut current = &mut self.children;

        while let Some(segment) = segments.next() {
            let is_last = segments.peek().is_none();
            let segment_kind = if is_last { kind } else { NodeKind::Directory };

            let idx = match current.iter().position(|c| c.name == segment) {
                Some(i) => {
                    if segment_kind == NodeKind::Directory {
                        current[i].kind = NodeKind::Directory;
                    }
                    i
                }
                None => {
                    current.push(TreeNode::new(segment, segment_kind));
                    current.len() - 1
                }
            };

            current = &mut current[idx].children;
        }
    }

    /// Top-level entries in insertion order.
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, which equals the number of unique path
    /// segments across all inserted entries.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[TreeNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.children)
    }

    /// Look up a node by its full `/`-delimited path.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let mut nodes = self.children.as_slice();
        let mut found = None;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let node = nodes.iter().find(|n| n.name == segment)?;
            nodes = &node.children;
            found = Some(node);
        }
        found
    }

    /// Flatten to preorder rows for text or canvas rendering.
    pub fn rows(&self) -> Vec<TreeRow<'_>> {
        fn walk<'a>(nodes: &'a [TreeNode], depth: usize, out: &mut Vec<TreeRow<'a>>) {
            for node in nodes {
                out.push(TreeRow { depth, node });
                walk(&node.children, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.children, 0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_structure() {
        let tree = PathTree::from_paths(["src/App.js", "src/index.js", "README.md"]);

        let names: Vec<_> = tree.children().iter().map(|n| n.name()).collect();
        assert_eq!(names, ["src", "README.md"]);

        let src = tree.find("src").unwrap();
        assert!(src.is_dir());
        let src_names: Vec<_> = src.children().iter().map(|n| n.name()).collect();
        assert_eq!(src_names, ["App.js", "index.js"]);

        assert!(tree.find("src/App.js").unwrap().children().is_empty());
        assert!(tree.find("src/index.js").unwrap().children().is_empty());
    }

    #[test]
    fn node_count_matches_unique_segments() {
        // Unique prefixes: a, a/b, a/b/c.txt, a/d.txt, e.txt -> 5 nodes.
        let tree = PathTree::from_paths(["a/b/c.txt", "a/d.txt", "e.txt"]);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn duplicate_paths_are_idempotent() {
        let base = PathTree::from_paths(["a/b", "a/c"]);
        let dup = PathTree::from_paths(["a/b", "a/c", "a/b", "a/c", "a/b"]);
        assert_eq!(base, dup);
    }

    #[test]
    fn structure_is_order_insensitive() {
        let first = PathTree::from_paths(["a/b", "a/c"]);
        let second = PathTree::from_paths(["a/c", "a/b"]);

        for tree in [&first, &second] {
            let a = tree.find("a").unwrap();
            assert_eq!(a.children().len(), 2);
            assert!(tree.find("a/b").unwrap().children().is_empty());
            assert!(tree.find("a/c").unwrap().children().is_empty());
        }

        // Display order still follows the input.
        let order: Vec<_> = second.find("a").unwrap().children().iter().map(|n| n.name()).collect();
        assert_eq!(order, ["c", "b"]);
    }

    #[test]
    fn single_segment_path_lands_at_root() {
        let tree = PathTree::from_paths(["LICENSE"]);
        assert_eq!(tree.node_count(), 1);
        assert!(tree.find("LICENSE").unwrap().children().is_empty());
    }

    #[test]
    fn empty_input_yields_empty_root() {
        let tree = PathTree::from_paths(Vec::<String>::new());
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn empty_segments_are_skipped() {
        let mut tree = PathTree::new();
        tree.insert("", NodeKind::File);
        tree.insert("a//b", NodeKind::File);
        tree.insert("c/", NodeKind::File);

        assert_eq!(tree.node_count(), 3);
        assert!(tree.find("a/b").is_some());
        assert!(tree.find("c").is_some());
    }

    #[test]
    fn tagged_empty_directory_stays_directory() {
        let mut tree = PathTree::new();
        tree.insert("empty-dir", NodeKind::Directory);
        tree.insert("file", NodeKind::File);

        assert!(tree.find("empty-dir").unwrap().is_dir());
        assert!(!tree.find("file").unwrap().is_dir());
    }

    #[test]
    fn child_insertion_upgrades_parent_to_directory() {
        let mut tree = PathTree::new();
        tree.insert("a", NodeKind::File);
        tree.insert("a/b", NodeKind::File);

        assert!(tree.find("a").unwrap().is_dir());
        assert_eq!(tree.find("a").unwrap().kind(), NodeKind::Directory);
    }

    #[test]
    fn duplicate_file_entry_never_downgrades_directory() {
        let mut tree = PathTree::new();
        tree.insert("a/b", NodeKind::File);
        tree.insert("a", NodeKind::File);

        assert!(tree.find("a").unwrap().is_dir());
    }

    #[test]
    fn rows_flatten_in_preorder() {
        let tree = PathTree::from_paths(["src/app.rs", "src/lib.rs", "README.md"]);
        let rows = tree.rows();

        let flat: Vec<_> = rows.iter().map(|r| (r.depth, r.node.name())).collect();
        assert_eq!(
            flat,
            [(0, "src"), (1, "app.rs"), (1, "lib.rs"), (0, "README.md")]
        );
    }
}
