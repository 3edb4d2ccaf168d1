//! Browser provisioning
//!
//! Strategies are tried in a fixed order and the first one that yields a
//! working browser wins. Every failure reason is kept so the final error can
//! tell the user what was tried.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::RenderError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum BrowserKind {
    /// Google Chrome / Chromium (default)
    #[default]
    Chrome,
    /// Microsoft Edge
    Edge,
}

impl BrowserKind {
    pub(crate) fn display_name(self) -> &'static str {
        match self {
            BrowserKind::Chrome => "Chrome",
            BrowserKind::Edge => "Edge",
        }
    }

    /// Remediation shown when every strategy failed
    pub(crate) fn remediation_hint(self) -> &'static str {
        match self {
            BrowserKind::Chrome => {
                "Provide --driver-path or --browser-path, or install Chrome."
            }
            BrowserKind::Edge => {
                "Pass --driver-path to a local msedge executable, or switch to Chrome with --browser chrome."
            }
        }
    }

    fn executable_names(self) -> &'static [&'static str] {
        match self {
            BrowserKind::Chrome => &["google-chrome", "google-chrome-stable", "chromium", "chromium-browser", "chrome"],
            BrowserKind::Edge => &["microsoft-edge", "microsoft-edge-stable", "msedge"],
        }
    }

    fn well_known_paths(self) -> &'static [&'static str] {
        match self {
            BrowserKind::Chrome => &[
                r"C:\Program Files\Google\Chrome\Application\chrome.exe",
                r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
                "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            ],
            BrowserKind::Edge => &[
                r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
                r"C:\Program Files\Microsoft\Edge\Application\msedge.exe",
                "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
                "/opt/microsoft/msedge/msedge",
            ],
        }
    }
}

/// Ways of obtaining a browser executable, in fallback order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Explicit --driver-path, then --browser-path
    LocalPath,
    /// Installed browser found without network access
    AutoResolve,
    /// Pinned Chromium build downloaded by the automation library
    ManagedDownload,
}

impl Strategy {
    pub(crate) const ORDER: [Strategy; 3] = [
        Strategy::LocalPath,
        Strategy::AutoResolve,
        Strategy::ManagedDownload,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Strategy::LocalPath => "local path",
            Strategy::AutoResolve => "auto resolve",
            Strategy::ManagedDownload => "managed download",
        }
    }
}

/// Run `attempt` for each strategy in order; return the first success
pub(crate) fn first_success<T>(
    browser: BrowserKind,
    order: &[Strategy],
    mut attempt: impl FnMut(Strategy) -> Result<T, String>,
) -> Result<T, RenderError> {
    let mut failures = Vec::with_capacity(order.len());
    for &strategy in order {
        match attempt(strategy) {
            Ok(value) => {
                info!(browser = browser.display_name(), strategy = strategy.label(), "browser provisioned");
                return Ok(value);
            }
            Err(reason) => {
                info!(
                    browser = browser.display_name(),
                    strategy = strategy.label(),
                    %reason,
                    "provisioning strategy failed"
                );
                failures.push(format!("{}: {reason}", strategy.label()));
            }
        }
    }
    Err(RenderError::Provision {
        browser: browser.display_name(),
        attempts: failures,
        hint: browser.remediation_hint(),
    })
}

/// First explicitly supplied executable that exists; the driver path wins
pub(crate) fn local_executable(
    driver_path: Option<&Path>,
    browser_path: Option<&Path>,
) -> Result<PathBuf, String> {
    let mut given = false;
    for path in [driver_path, browser_path].into_iter().flatten() {
        given = true;
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        debug!(path = %path.display(), "explicit executable does not exist");
    }
    if given {
        Err("explicit path does not exist".to_string())
    } else {
        Err("no --driver-path or --browser-path given".to_string())
    }
}

/// Locate an installed browser on PATH or at a well-known location
pub(crate) fn find_installed(browser: BrowserKind) -> Result<PathBuf, String> {
    if let Some(path) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&path) {
            for name in browser.executable_names() {
                for candidate in executable_candidates(&dir, name) {
                    if candidate.is_file() {
                        return Ok(candidate);
                    }
                }
            }
        }
    }
    browser
        .well_known_paths()
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
        .ok_or_else(|| format!("no installed {} found", browser.display_name()))
}

fn executable_candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    if cfg!(windows) {
        vec![dir.join(format!("{name}.exe")), dir.join(name)]
    } else {
        vec![dir.join(name)]
    }
}
