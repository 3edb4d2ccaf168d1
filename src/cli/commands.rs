//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

use crate::banner::BannerStyle;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render the page and download images grouped by session (default)
    Scrape,
    /// Print the DEMOS logo banner as JavaScript array literals
    Banner {
        /// Glyph style to print (all styles when omitted)
        #[arg(long, value_enum)]
        style: Option<BannerStyle>,
    },
    /// Parse "## Session N" markdown notes
    Notes {
        /// Markdown file to parse
        file: PathBuf,
    },
}
