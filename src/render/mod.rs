//! Page rendering
//!
//! Produces the HTML of a page after every collapsed section has been opened
//! and lazy content has been scrolled into existence. The browser-specific
//! work sits behind [`PageSession`]; the expand/scroll loop here is shared.

mod chrome;
mod provision;

use std::thread::sleep;
use std::time::Duration;

use tracing::{debug, info};

use crate::consts::{MAX_EXPAND_PASSES, MAX_SCROLL_PASSES, PAGE_TIMEOUT, SCROLL_PAUSE, SETTLE_DELAY};
use crate::error::RenderError;

pub(crate) use chrome::{ChromePage, LaunchConfig};
pub(crate) use provision::BrowserKind;

/// Browser tab operations the renderer needs
pub(crate) trait PageSession {
    /// Navigate and wait until `body` exists
    fn open(&mut self, url: &str, timeout: Duration) -> Result<(), RenderError>;

    /// Click every collapsed control found in one pass; returns how many were clicked
    fn expand_collapsed(&mut self) -> usize;

    fn scroll_height(&mut self) -> Result<u64, RenderError>;

    fn scroll_to_bottom(&mut self) -> Result<(), RenderError>;

    fn scroll_to_top(&mut self) -> Result<(), RenderError>;

    /// Serialized DOM of the current page
    fn html(&mut self) -> Result<String, RenderError>;
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderOptions {
    pub(crate) page_timeout: Duration,
    pub(crate) expand_passes: u32,
    pub(crate) scroll_passes: u32,
    pub(crate) scroll_pause: Duration,
    pub(crate) settle_delay: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_timeout: PAGE_TIMEOUT,
            expand_passes: MAX_EXPAND_PASSES,
            scroll_passes: MAX_SCROLL_PASSES,
            scroll_pause: SCROLL_PAUSE,
            settle_delay: SETTLE_DELAY,
        }
    }
}

/// Render `url` and release the page afterwards, whatever the outcome
pub(crate) fn render_page<P: PageSession>(
    mut page: P,
    url: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let result = drive(&mut page, url, options);
    drop(page);
    result
}

fn drive<P: PageSession>(page: &mut P, url: &str, options: &RenderOptions) -> Result<String, RenderError> {
    info!(%url, "loading page");
    page.open(url, options.page_timeout)?;

    let clicked = expand_all(page, options.expand_passes);
    debug!(clicked, "expanded collapsed sections");

    let passes = scroll_until_stable(page, options)?;
    debug!(passes, "scrolled page");

    sleep(options.settle_delay);
    let html = page.html()?;
    info!(bytes = html.len(), "page rendered");
    Ok(html)
}

/// Repeat expansion passes until one clicks nothing or the pass limit is hit
fn expand_all<P: PageSession>(page: &mut P, max_passes: u32) -> usize {
    let mut total = 0;
    for pass in 0..max_passes {
        let clicked = page.expand_collapsed();
        debug!(pass, clicked, "expansion pass");
        if clicked == 0 {
            break;
        }
        total += clicked;
    }
    total
}

/// Scroll to the bottom until the document height stops growing, then
/// return to the top. Returns the number of scroll passes made.
fn scroll_until_stable<P: PageSession>(page: &mut P, options: &RenderOptions) -> Result<u32, RenderError> {
    let mut last_height = page.scroll_height()?;
    let mut passes = 0;
    while passes < options.scroll_passes {
        page.scroll_to_bottom()?;
        passes += 1;
        sleep(options.scroll_pause);
        let height = page.scroll_height()?;
        if height == last_height {
            break;
        }
        last_height = height;
    }
    page.scroll_to_top()?;
    sleep(options.scroll_pause);
    Ok(passes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// In-memory page: toggles open over a few passes, height grows per scroll
    struct FakePage {
        open_result: Option<RenderError>,
        toggles_per_pass: Vec<usize>,
        expand_calls: usize,
        heights: Vec<u64>,
        height_reads: usize,
        bottom_scrolls: u32,
        top_scrolls: u32,
        released: Rc<Cell<bool>>,
    }

    impl FakePage {
        fn new(released: Rc<Cell<bool>>) -> Self {
            Self {
                open_result: None,
                toggles_per_pass: vec![3, 1, 0, 5],
                expand_calls: 0,
                heights: vec![1000, 2000, 3000, 3000, 9999],
                height_reads: 0,
                bottom_scrolls: 0,
                top_scrolls: 0,
                released,
            }
        }
    }

    impl Drop for FakePage {
        fn drop(&mut self) {
            self.released.set(true);
        }
    }

    impl PageSession for FakePage {
        fn open(&mut self, _url: &str, _timeout: Duration) -> Result<(), RenderError> {
            match self.open_result.take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        fn expand_collapsed(&mut self) -> usize {
            let clicked = self.toggles_per_pass.get(self.expand_calls).copied().unwrap_or(0);
            self.expand_calls += 1;
            clicked
        }

        fn scroll_height(&mut self) -> Result<u64, RenderError> {
            let idx = self.height_reads.min(self.heights.len() - 1);
            self.height_reads += 1;
            Ok(self.heights[idx])
        }

        fn scroll_to_bottom(&mut self) -> Result<(), RenderError> {
            self.bottom_scrolls += 1;
            Ok(())
        }

        fn scroll_to_top(&mut self) -> Result<(), RenderError> {
            self.top_scrolls += 1;
            Ok(())
        }

        fn html(&mut self) -> Result<String, RenderError> {
            Ok(format!(
                "<html><body>expanded={} scrolls={}</body></html>",
                self.expand_calls, self.bottom_scrolls
            ))
        }
    }

    fn fast_options() -> RenderOptions {
        RenderOptions {
            page_timeout: Duration::from_secs(1),
            expand_passes: 5,
            scroll_passes: 40,
            scroll_pause: Duration::ZERO,
            settle_delay: Duration::ZERO,
        }
    }

    #[test]
    fn expansion_stops_after_empty_pass() {
        let released = Rc::new(Cell::new(false));
        let mut page = FakePage::new(released);
        let total = expand_all(&mut page, 5);
        assert_eq!(total, 4);
        assert_eq!(page.expand_calls, 3);
    }

    #[test]
    fn expansion_respects_pass_limit() {
        let released = Rc::new(Cell::new(false));
        let mut page = FakePage::new(released);
        page.toggles_per_pass = vec![1; 10];
        expand_all(&mut page, 5);
        assert_eq!(page.expand_calls, 5);
    }

    #[test]
    fn scrolling_stops_when_height_is_stable() {
        let released = Rc::new(Cell::new(false));
        let mut page = FakePage::new(released);
        let passes = scroll_until_stable(&mut page, &fast_options()).unwrap();
        // 1000 -> 2000 -> 3000 -> 3000 (stable)
        assert_eq!(passes, 3);
        assert_eq!(page.top_scrolls, 1);
    }

    #[test]
    fn scrolling_respects_pass_limit() {
        let released = Rc::new(Cell::new(false));
        let mut page = FakePage::new(released);
        page.heights = (1..=100).map(|h| h * 100).collect();
        let options = RenderOptions {
            scroll_passes: 4,
            ..fast_options()
        };
        let passes = scroll_until_stable(&mut page, &options).unwrap();
        assert_eq!(passes, 4);
        assert_eq!(page.bottom_scrolls, 4);
        assert_eq!(page.top_scrolls, 1);
    }

    #[test]
    fn render_returns_html_and_releases_page() {
        let released = Rc::new(Cell::new(false));
        let page = FakePage::new(released.clone());
        let html = render_page(page, "https://example.com", &fast_options()).unwrap();
        assert_eq!(html, "<html><body>expanded=3 scrolls=3</body></html>");
        assert!(released.get());
    }

    #[test]
    fn render_releases_page_when_load_fails() {
        let released = Rc::new(Cell::new(false));
        let mut page = FakePage::new(released.clone());
        page.open_result = Some(RenderError::PageLoad {
            url: "https://example.com".to_string(),
            timeout_secs: 1,
            reason: "timed out".to_string(),
        });
        let err = render_page(page, "https://example.com", &fast_options()).unwrap_err();
        assert!(matches!(err, RenderError::PageLoad { .. }));
        assert!(released.get());
    }
}
