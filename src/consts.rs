use std::time::Duration;

/// Page scraped when no --url is given
pub(crate) const DEFAULT_PAGE_URL: &str = "https://ethereal-society-312.notion.site/Demos-Anon-d3138e1a280e4042be808cf0a926c919#16c0833ba0fa805d8052e3dde800ca27";

/// Root directory for per-session image folders
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "sessions";

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub(crate) const DEFAULT_REFERER: &str = "https://www.notion.so/";

/// Connect and response-head limit for each image request
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Limit for streaming one image body; slow but steady transfers finish well inside it
pub(crate) const BODY_TIMEOUT: Duration = Duration::from_secs(600);
pub(crate) const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) const MAX_SCROLL_PASSES: u32 = 40;
pub(crate) const MAX_EXPAND_PASSES: u32 = 5;
pub(crate) const SCROLL_PAUSE: Duration = Duration::from_millis(500);
pub(crate) const CLICK_PAUSE: Duration = Duration::from_millis(100);
/// Extra wait after scrolling back to the top, for trailing lazy-loads
pub(crate) const SETTLE_DELAY: Duration = Duration::from_millis(1200);

pub(crate) const WINDOW_SIZE: (u32, u32) = (1400, 2200);

/// Streamed download buffer (16 KiB)
pub(crate) const CHUNK_SIZE: usize = 1 << 14;

/// Used when neither the URL nor the Content-Type yields an extension
pub(crate) const DEFAULT_IMAGE_EXT: &str = ".jpg";
