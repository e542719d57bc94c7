//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "Repo Tree Viewer";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Viewer Configuration
// =============================================================================

/// Example URL shown in the usage hint.
pub const EXAMPLE_REPO_URL: &str = "https://github.com/octocat/Hello-World";

/// Placeholder text for the URL input.
pub const URL_INPUT_PLACEHOLDER: &str = "Enter GitHub repository URL...";

/// DOM id of the rendered tree region targeted by the exporter.
pub const TREE_REGION_ID: &str = "tree-region";

// =============================================================================
// User-Facing Failure Messages
// =============================================================================

pub mod messages {
    /// Input does not look like a repository URL; no request is issued.
    pub const INVALID_URL: &str = "Invalid GitHub URL format.";
    /// Response arrived but carried no tree listing (bad branch, missing
    /// repo, API error body).
    pub const NO_LISTING: &str = "Could not fetch repo contents. Check the URL and branch.";
    /// The request itself failed (network, timeout, non-JSON body).
    pub const FETCH_FAILED: &str = "Error fetching data.";
}

// =============================================================================
// Export Configuration
// =============================================================================

/// Canvas metrics for the PNG exporter.
pub mod export {
    /// Download filename offered to the browser.
    pub const FILENAME: &str = "repo-tree.png";
    /// Font for file rows.
    pub const FONT: &str = "14px monospace";
    /// Font for directory rows.
    pub const FONT_BOLD: &str = "bold 14px monospace";
    /// Vertical distance between row baselines, in pixels.
    pub const LINE_HEIGHT: f64 = 20.0;
    /// Padding around the drawn tree, in pixels.
    pub const PADDING: f64 = 16.0;
    /// Horizontal indent per tree depth, in pixels.
    pub const INDENT: f64 = 22.0;
    /// Lower bound on image width so tiny trees still export legibly.
    pub const MIN_WIDTH: f64 = 240.0;
    /// Canvas background color.
    pub const BACKGROUND: &str = "#ffffff";
    /// Row text color.
    pub const FOREGROUND: &str = "#24292f";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
