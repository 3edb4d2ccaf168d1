use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid session range: --min-session {min} is greater than --max-session {max}")]
    InvalidSessionRange { min: u32, max: u32 },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Render(#[from] RenderError),
}

/// Fatal failures while producing the rendered page
#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("Unable to provision {browser}: {}. {hint}", .attempts.join("; "))]
    Provision {
        browser: &'static str,
        attempts: Vec<String>,
        hint: &'static str,
    },

    #[error("Page {url} did not become ready within {timeout_secs}s: {reason}")]
    PageLoad {
        url: String,
        timeout_secs: u64,
        reason: String,
    },

    #[error("Browser error: {0}")]
    Browser(String),
}

/// Per-image failures; logged and skipped by the downloader
#[derive(Debug, Error)]
pub(crate) enum DownloadError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),

    #[error("write failed for {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("read failed: {0}")]
    Read(std::io::Error),
}

impl From<ureq::Error> for DownloadError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => DownloadError::Status(code),
            other => DownloadError::Request(other.to_string()),
        }
    }
}
