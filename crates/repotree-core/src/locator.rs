//! GitHub repository URL parsing.
//!
//! Turns user input like `https://github.com/octocat/Hello-World/tree/dev`
//! into an `owner` / `repo` / `branch` triple and renders the trees API URL
//! from it.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Branch used when the URL carries no `/tree/<branch>` segment.
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LocatorError {
    #[error("input does not match https://github.com/<owner>/<repo>[/tree/<branch>]")]
    InvalidUrl,
}

/// A resolved repository reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoLocator {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https://github\.com/([^/]+)/([^/]+)(?:/tree/([^/]+))?")
            .expect("repository URL pattern is valid")
    })
}

impl RepoLocator {
    /// Parse a repository URL.
    ///
    /// Input is trimmed first. Anything after the matched prefix is
    /// ignored, so deep links into a repository still resolve to it.
    pub fn parse(input: &str) -> Result<Self, LocatorError> {
        let input = input.trim();
        let caps = url_pattern()
            .captures(input)
            .ok_or(LocatorError::InvalidUrl)?;

        Ok(Self {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
            branch: caps
                .get(3)
                .map_or_else(|| DEFAULT_BRANCH.to_string(), |m| m.as_str().to_string()),
        })
    }

    /// URL of the recursive tree listing for this reference.
    pub fn trees_url(&self, api_base: &str) -> String {
        format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            api_base, self.owner, self.repo, self.branch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo_with_default_branch() {
        let locator = RepoLocator::parse("https://github.com/octocat/Hello-World").unwrap();
        assert_eq!(locator.owner, "octocat");
        assert_eq!(locator.repo, "Hello-World");
        assert_eq!(locator.branch, "main");
    }

    #[test]
    fn parses_branch_from_tree_segment() {
        let locator = RepoLocator::parse("https://github.com/octocat/Hello-World/tree/dev").unwrap();
        assert_eq!(locator.branch, "dev");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let locator = RepoLocator::parse("  https://github.com/octocat/Hello-World\n").unwrap();
        assert_eq!(locator.owner, "octocat");
    }

    #[test]
    fn tolerates_trailing_path_segments() {
        let locator =
            RepoLocator::parse("https://github.com/octocat/Hello-World/blob/main/README.md")
                .unwrap();
        assert_eq!(locator.repo, "Hello-World");
        assert_eq!(locator.branch, "main");
    }

    #[test]
    fn rejects_non_urls() {
        assert_eq!(RepoLocator::parse("not-a-url"), Err(LocatorError::InvalidUrl));
        assert_eq!(
            RepoLocator::parse("http://github.com/octocat/Hello-World"),
            Err(LocatorError::InvalidUrl)
        );
        assert_eq!(
            RepoLocator::parse("https://github.com/octocat"),
            Err(LocatorError::InvalidUrl)
        );
        assert_eq!(RepoLocator::parse(""), Err(LocatorError::InvalidUrl));
    }

    #[test]
    fn renders_trees_url() {
        let locator = RepoLocator::parse("https://github.com/octocat/Hello-World/tree/dev").unwrap();
        assert_eq!(
            locator.trees_url("https://api.github.com"),
            "https://api.github.com/repos/octocat/Hello-World/git/trees/dev?recursive=1"
        );
    }
}
