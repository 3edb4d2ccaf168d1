//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::consts::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_URL, DEFAULT_REFERER, DEFAULT_USER_AGENT, MAX_SCROLL_PASSES,
    BODY_TIMEOUT, PAGE_TIMEOUT, REQUEST_TIMEOUT,
};
use crate::core::SessionRange;
use crate::error::AppError;
use crate::render::{BrowserKind, LaunchConfig};

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "sessiongrab")]
#[command(
    about = "Download images from a Notion page organized by 'Session {n}' headings",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Notion page URL
    #[arg(short, long, global = true)]
    pub(crate) url: Option<String>,

    /// Output root directory [default: sessions]
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) output: Option<PathBuf>,

    /// Only download from sessions >= this number
    #[arg(long, global = true, value_name = "N")]
    pub(crate) min_session: Option<u32>,

    /// Only download from sessions <= this number
    #[arg(long, global = true, value_name = "N")]
    pub(crate) max_session: Option<u32>,

    /// Browser to automate [default: chrome]
    #[arg(long, global = true, value_enum)]
    pub(crate) browser: Option<BrowserKind>,

    /// Run the browser headless
    #[arg(long, global = true)]
    pub(crate) headless: bool,

    /// Path to the browser executable
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) browser_path: Option<PathBuf>,

    /// Path to the executable used for automation (takes priority over --browser-path)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) driver_path: Option<PathBuf>,

    /// Custom user agent for the browser and image requests
    #[arg(long, global = true, value_name = "UA")]
    pub(crate) user_agent: Option<String>,

    /// Maximum scroll passes while waiting for lazy content [default: 40]
    #[arg(long, global = true, value_name = "N")]
    pub(crate) scroll_passes: Option<u32>,

    /// Read already-rendered HTML from a file instead of launching a browser
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) html_file: Option<PathBuf>,

    /// List images per session instead of downloading them
    #[arg(long, global = true)]
    pub(crate) list: bool,

    /// Output as JSON (with --list or notes)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Disable colored table output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    #[arg(skip)]
    pub(crate) referer: Option<String>,

    #[arg(skip)]
    pub(crate) request_timeout_secs: Option<u64>,

    #[arg(skip)]
    pub(crate) body_timeout_secs: Option<u64>,

    #[arg(skip)]
    pub(crate) page_timeout_secs: Option<u64>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI is false (default)
        if !self.headless && config.headless {
            self.headless = true;
        }

        // Optional values: only apply if CLI didn't set them
        if self.url.is_none() {
            self.url = config.url.clone();
        }
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        if self.browser.is_none() {
            self.browser = config.browser;
        }
        if self.browser_path.is_none() {
            self.browser_path = config.browser_path.clone();
        }
        if self.driver_path.is_none() {
            self.driver_path = config.driver_path.clone();
        }
        if self.user_agent.is_none() {
            self.user_agent = config.user_agent.clone();
        }
        if self.scroll_passes.is_none() {
            self.scroll_passes = config.scroll_passes;
        }

        // Config-only settings
        self.referer = config.referer.clone();
        self.request_timeout_secs = config.request_timeout_secs;
        self.body_timeout_secs = config.body_timeout_secs;
        self.page_timeout_secs = config.page_timeout_secs;

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }

    pub(crate) fn page_url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_PAGE_URL)
    }

    pub(crate) fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub(crate) fn scroll_passes(&self) -> u32 {
        self.scroll_passes.unwrap_or(MAX_SCROLL_PASSES)
    }

    /// Custom user agent, treating an empty string as unset
    pub(crate) fn custom_user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref().filter(|ua| !ua.is_empty())
    }

    pub(crate) fn download_user_agent(&self) -> &str {
        self.custom_user_agent().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub(crate) fn referer(&self) -> &str {
        self.referer.as_deref().unwrap_or(DEFAULT_REFERER)
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .map_or(REQUEST_TIMEOUT, Duration::from_secs)
    }

    pub(crate) fn body_timeout(&self) -> Duration {
        self.body_timeout_secs.map_or(BODY_TIMEOUT, Duration::from_secs)
    }

    pub(crate) fn page_timeout(&self) -> Duration {
        self.page_timeout_secs.map_or(PAGE_TIMEOUT, Duration::from_secs)
    }

    pub(crate) fn session_range(&self) -> Result<SessionRange, AppError> {
        if let (Some(min), Some(max)) = (self.min_session, self.max_session)
            && min > max
        {
            return Err(AppError::InvalidSessionRange { min, max });
        }
        Ok(SessionRange::new(self.min_session, self.max_session))
    }

    pub(crate) fn launch_config(&self) -> LaunchConfig {
        LaunchConfig {
            browser: self.browser.unwrap_or_default(),
            headless: self.headless,
            browser_path: self.browser_path.clone(),
            driver_path: self.driver_path.clone(),
            user_agent: self.custom_user_agent().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["sessiongrab"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid args")
    }

    #[test]
    fn defaults_without_flags() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.page_url(), DEFAULT_PAGE_URL);
        assert_eq!(cli.output_dir(), PathBuf::from("sessions"));
        assert_eq!(cli.scroll_passes(), 40);
        assert_eq!(cli.download_user_agent(), "Mozilla/5.0");
        assert_eq!(cli.referer(), "https://www.notion.so/");
        assert_eq!(cli.launch_config().browser, BrowserKind::Chrome);
        assert!(!cli.launch_config().headless);
        assert!(!cli.no_color);
    }

    #[test]
    fn scrape_flags_parse() {
        let cli = parse(&[
            "-u",
            "https://x.notion.site/p",
            "-o",
            "out",
            "--min-session",
            "2",
            "--max-session",
            "3",
            "--browser",
            "edge",
            "--headless",
            "--driver-path",
            "/opt/msedge",
            "--user-agent",
            "UA/1",
        ]);
        assert_eq!(cli.page_url(), "https://x.notion.site/p");
        assert_eq!(cli.output_dir(), PathBuf::from("out"));
        assert_eq!(cli.session_range().unwrap(), SessionRange::new(Some(2), Some(3)));
        let launch = cli.launch_config();
        assert_eq!(launch.browser, BrowserKind::Edge);
        assert!(launch.headless);
        assert_eq!(launch.driver_path, Some(PathBuf::from("/opt/msedge")));
        assert_eq!(launch.user_agent.as_deref(), Some("UA/1"));
        assert_eq!(cli.download_user_agent(), "UA/1");
    }

    #[test]
    fn subcommand_with_global_flags() {
        let cli = parse(&["scrape", "--list", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Scrape)));
        assert!(cli.list);
        assert!(cli.json);
    }

    #[test]
    fn empty_user_agent_is_ignored() {
        let cli = parse(&["--user-agent", ""]);
        assert_eq!(cli.custom_user_agent(), None);
        assert_eq!(cli.download_user_agent(), "Mozilla/5.0");
        assert!(cli.launch_config().user_agent.is_none());
    }

    #[test]
    fn inverted_session_range_is_rejected() {
        let cli = parse(&["--min-session", "5", "--max-session", "2"]);
        assert!(matches!(
            cli.session_range(),
            Err(AppError::InvalidSessionRange { min: 5, max: 2 })
        ));
    }

    #[test]
    fn config_fills_only_unset_values() {
        let config = Config::parse(
            r#"
            url = "https://config.example/page"
            output = "from-config"
            browser = "edge"
            headless = true
            referer = "https://ref.example/"
            request_timeout_secs = 7
            "#,
        )
        .unwrap();
        let cli = parse(&["-o", "from-cli"]).with_config(&config);
        assert_eq!(cli.page_url(), "https://config.example/page");
        assert_eq!(cli.output_dir(), PathBuf::from("from-cli"));
        assert_eq!(cli.launch_config().browser, BrowserKind::Edge);
        assert!(cli.headless);
        assert_eq!(cli.referer(), "https://ref.example/");
        assert_eq!(cli.request_timeout(), Duration::from_secs(7));
        assert_eq!(cli.body_timeout(), BODY_TIMEOUT);
        assert_eq!(cli.page_timeout(), PAGE_TIMEOUT);
    }

    #[test]
    fn cli_browser_wins_over_config() {
        let config = Config::parse(r#"browser = "edge""#).unwrap();
        let cli = parse(&["--browser", "chrome"]).with_config(&config);
        assert_eq!(cli.launch_config().browser, BrowserKind::Chrome);
    }

    #[test]
    fn banner_and_notes_subcommands() {
        let cli = parse(&["banner", "--style", "jules"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Banner {
                style: Some(crate::banner::BannerStyle::Jules)
            })
        ));

        let cli = parse(&["notes", "sessions.md"]);
        match cli.command {
            Some(Commands::Notes { file }) => assert_eq!(file, PathBuf::from("sessions.md")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
