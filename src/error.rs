//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ExportError`] - Canvas rasterization and download errors
//!
//! Both are developer-facing: the user only ever sees one of the fixed
//! message strings in `config::messages`, while these carry the underlying
//! fault to the console.

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (unreachable, CORS, abort)
    NetworkError(String),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// Body was not the expected JSON shape
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Canvas rasterization and download errors.
#[derive(Debug, Clone)]
pub enum ExportError {
    /// Browser document not available
    NoDocument,
    /// Canvas element could not be created
    CanvasUnavailable,
    /// 2D rendering context could not be acquired
    ContextUnavailable,
    /// Canvas could not be encoded to a PNG data URL
    EncodeFailed,
    /// Download anchor could not be attached to the document
    DownloadFailed,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "Browser document not available"),
            Self::CanvasUnavailable => write!(f, "Failed to create canvas element"),
            Self::ContextUnavailable => write!(f, "Failed to acquire 2d context"),
            Self::EncodeFailed => write!(f, "Failed to encode canvas as PNG"),
            Self::DownloadFailed => write!(f, "Failed to trigger download"),
        }
    }
}

impl std::error::Error for ExportError {}
