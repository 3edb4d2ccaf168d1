//! Chromium-family browsers (Chrome, Edge) over the DevTools protocol

use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use headless_chrome::browser::FetcherOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, trace};

use super::PageSession;
use super::provision::{BrowserKind, Strategy, find_installed, first_success, local_executable};
use crate::consts::{CLICK_PAUSE, WINDOW_SIZE};
use crate::error::RenderError;

/// How long the browser may go without sending events before it is considered dead
const IDLE_BROWSER_TIMEOUT: Duration = Duration::from_secs(300);

/// One family of collapsed controls
struct ToggleQuery {
    xpath: &'static str,
    /// Skip matches already reporting `aria-expanded="true"`
    skip_expanded: bool,
}

const TOGGLE_QUERIES: &[ToggleQuery] = &[
    ToggleQuery {
        xpath: "//*[@aria-expanded='false']",
        skip_expanded: false,
    },
    ToggleQuery {
        xpath: "//details[not(@open)]/summary",
        skip_expanded: false,
    },
    ToggleQuery {
        xpath: "//*[self::button or self::div or self::span]\
                [contains(translate(@aria-label,'TOGGLE','toggle'),'toggle') or \
                 contains(translate(@title,'TOGGLE','toggle'),'toggle')]",
        skip_expanded: true,
    },
];

fn is_already_expanded(aria_expanded: Option<&str>) -> bool {
    aria_expanded.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Browser launch settings gathered from the CLI and config file
#[derive(Debug, Clone, Default)]
pub(crate) struct LaunchConfig {
    pub(crate) browser: BrowserKind,
    pub(crate) headless: bool,
    pub(crate) browser_path: Option<PathBuf>,
    pub(crate) driver_path: Option<PathBuf>,
    pub(crate) user_agent: Option<String>,
}

impl LaunchConfig {
    fn launch_args(&self) -> Vec<String> {
        let mut args = vec![
            "--disable-gpu".to_string(),
            "--disable-dev-shm-usage".to_string(),
            "--disable-blink-features=AutomationControlled".to_string(),
        ];
        if let Some(ua) = self.user_agent.as_deref().filter(|ua| !ua.is_empty()) {
            args.push(format!("--user-agent={ua}"));
        }
        args
    }

    fn resolve_executable(&self, strategy: Strategy) -> Result<Option<PathBuf>, String> {
        match strategy {
            Strategy::LocalPath => {
                local_executable(self.driver_path.as_deref(), self.browser_path.as_deref()).map(Some)
            }
            Strategy::AutoResolve => match self.browser {
                BrowserKind::Chrome => headless_chrome::browser::default_executable()
                    .or_else(|_| find_installed(BrowserKind::Chrome))
                    .map(Some),
                BrowserKind::Edge => find_installed(BrowserKind::Edge).map(Some),
            },
            Strategy::ManagedDownload => match self.browser {
                // The fetcher kicks in when no executable path is set
                BrowserKind::Chrome => Ok(None),
                BrowserKind::Edge => Err("no managed download available for Edge".to_string()),
            },
        }
    }

    fn launch(&self, strategy: Strategy) -> Result<Browser, String> {
        let path = self.resolve_executable(strategy)?;
        if let Some(path) = &path {
            debug!(path = %path.display(), strategy = strategy.label(), "launching browser");
        }
        let owned_args = self.launch_args();
        let args: Vec<&OsStr> = owned_args.iter().map(OsStr::new).collect();
        let options = LaunchOptions::default_builder()
            .headless(self.headless)
            .sandbox(false)
            .window_size(Some(WINDOW_SIZE))
            .idle_browser_timeout(IDLE_BROWSER_TIMEOUT)
            .path(path)
            .args(args)
            .fetcher_options(
                FetcherOptions::default().with_allow_download(strategy == Strategy::ManagedDownload),
            )
            .build()
            .map_err(|e| e.to_string())?;
        Browser::new(options).map_err(|e| e.to_string())
    }
}

/// A single tab in a browser launched for this run
///
/// Dropping it closes the tab and then shuts the browser process down.
pub(crate) struct ChromePage {
    tab: Arc<Tab>,
    _browser: Browser,
}

impl ChromePage {
    pub(crate) fn launch(config: &LaunchConfig) -> Result<Self, RenderError> {
        let browser = first_success(config.browser, &Strategy::ORDER, |strategy| config.launch(strategy))?;
        let tab = browser.new_tab().map_err(browser_error)?;
        Ok(Self {
            tab,
            _browser: browser,
        })
    }

    fn evaluate(&self, expression: &str) -> Result<Option<serde_json::Value>, RenderError> {
        let result = self.tab.evaluate(expression, false).map_err(browser_error)?;
        Ok(result.value)
    }
}

impl PageSession for ChromePage {
    fn open(&mut self, url: &str, timeout: Duration) -> Result<(), RenderError> {
        let page_load = |reason: String| RenderError::PageLoad {
            url: url.to_string(),
            timeout_secs: timeout.as_secs(),
            reason,
        };
        self.tab.set_default_timeout(timeout);
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| page_load(e.to_string()))?;
        self.tab
            .wait_for_element_with_custom_timeout("body", timeout)
            .map_err(|e| page_load(e.to_string()))?;
        Ok(())
    }

    fn expand_collapsed(&mut self) -> usize {
        let mut clicked = 0;
        for query in TOGGLE_QUERIES {
            // No match is reported as an error
            let elements = match self.tab.find_elements_by_xpath(query.xpath) {
                Ok(elements) => elements,
                Err(e) => {
                    trace!(xpath = query.xpath, error = %e, "no toggles found");
                    continue;
                }
            };
            for element in &elements {
                if query.skip_expanded {
                    let state = element.get_attribute_value("aria-expanded").ok().flatten();
                    if is_already_expanded(state.as_deref()) {
                        continue;
                    }
                }
                let outcome = element.scroll_into_view().and_then(|el| {
                    sleep(CLICK_PAUSE);
                    el.click()
                });
                sleep(CLICK_PAUSE);
                match outcome {
                    Ok(_) => clicked += 1,
                    Err(e) => trace!(error = %e, "toggle click failed"),
                }
            }
        }
        clicked
    }

    fn scroll_height(&mut self) -> Result<u64, RenderError> {
        let value = self.evaluate("document.body.scrollHeight")?;
        value
            .and_then(|v| v.as_f64())
            .map(|h| h.max(0.0) as u64)
            .ok_or_else(|| RenderError::Browser("document.body.scrollHeight is not a number".to_string()))
    }

    fn scroll_to_bottom(&mut self) -> Result<(), RenderError> {
        self.evaluate("window.scrollTo(0, document.body.scrollHeight)")?;
        Ok(())
    }

    fn scroll_to_top(&mut self) -> Result<(), RenderError> {
        self.evaluate("window.scrollTo(0, 0)")?;
        Ok(())
    }

    fn html(&mut self) -> Result<String, RenderError> {
        self.tab.get_content().map_err(browser_error)
    }
}

impl Drop for ChromePage {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(true) {
            debug!(error = %e, "failed to close tab");
        }
        debug!("browser released");
    }
}

fn browser_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Browser(err.to_string())
}
