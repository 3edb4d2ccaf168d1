use std::fs;
use std::path::Path;

use tracing::info;

use crate::banner::{BannerStyle, render_report};
use crate::cli::{Cli, Commands};
use crate::collect::collect_images_by_session;
use crate::download::{DownloadOptions, ImageDownloader};
use crate::error::AppError;
use crate::notes::parse_notes;
use crate::output::{output_image_json, output_notes_json, print_image_table, print_notes_table};
use crate::render::{ChromePage, RenderOptions, render_page};

const NO_IMAGES_HINT: &str =
    "No images found. Try increasing --scroll-passes or verify 'Session {n}' headings.";

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Some(Commands::Banner { style }) => {
            handle_banner(*style);
            Ok(())
        }
        Some(Commands::Notes { file }) => handle_notes(file, cli),
        Some(Commands::Scrape) | None => handle_scrape(cli),
    }
}

fn read_input(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

fn handle_scrape(cli: &Cli) -> Result<(), AppError> {
    let range = cli.session_range()?;
    let url = cli.page_url();

    let html = match &cli.html_file {
        Some(path) => {
            info!(path = %path.display(), "reading rendered HTML from file");
            read_input(path)?
        }
        None => {
            let options = RenderOptions {
                page_timeout: cli.page_timeout(),
                scroll_passes: cli.scroll_passes(),
                ..RenderOptions::default()
            };
            let page = ChromePage::launch(&cli.launch_config())?;
            render_page(page, url, &options)?
        }
    };

    let images = collect_images_by_session(&html, range);
    if images.is_empty() {
        println!("{NO_IMAGES_HINT}");
        return Ok(());
    }
    info!(
        sessions = images.len(),
        images = images.total_images(),
        "collected session images"
    );

    if cli.list {
        if cli.json {
            println!("{}", output_image_json(&images));
        } else {
            print_image_table(&images, cli.use_color());
        }
        return Ok(());
    }

    let downloader = ImageDownloader::new(DownloadOptions {
        user_agent: cli.download_user_agent().to_string(),
        referer: cli.referer().to_string(),
        timeout: cli.request_timeout(),
        body_timeout: cli.body_timeout(),
        base_url: Some(url.to_string()),
    });
    let saved = downloader.download(&images, &cli.output_dir());
    println!("\nDone. Saved {saved} images.");
    Ok(())
}

fn handle_banner(style: Option<BannerStyle>) {
    let styles: &[BannerStyle] = match &style {
        Some(style) => std::slice::from_ref(style),
        None => &BannerStyle::ALL,
    };
    print!("{}", render_report(styles));
}

fn handle_notes(file: &Path, cli: &Cli) -> Result<(), AppError> {
    let notes = parse_notes(&read_input(file)?);
    if notes.is_empty() {
        println!("No session notes found in {}.", file.display());
        return Ok(());
    }
    if cli.json {
        println!("{}", output_notes_json(&notes));
    } else {
        print_notes_table(&notes, cli.use_color());
    }
    Ok(())
}
