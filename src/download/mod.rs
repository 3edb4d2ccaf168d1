//! Best-effort image downloads
//!
//! Every URL is attempted exactly once. A failure is logged with its URL and
//! skipped; only the number of saved files is reported back.

mod ext;

use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};
use ureq::Agent;
use url::Url;

use crate::consts::{BODY_TIMEOUT, CHUNK_SIZE, DEFAULT_REFERER, DEFAULT_USER_AGENT, REQUEST_TIMEOUT};
use crate::core::SessionImageMap;
use crate::error::DownloadError;

use ext::resolve_extension;

#[derive(Debug, Clone)]
pub(crate) struct DownloadOptions {
    pub(crate) user_agent: String,
    pub(crate) referer: String,
    /// Bounds connecting and waiting for the response head
    pub(crate) timeout: Duration,
    /// Bounds reading the body, separately from `timeout`
    pub(crate) body_timeout: Duration,
    /// Page URL used to resolve relative image URLs
    pub(crate) base_url: Option<String>,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            timeout: REQUEST_TIMEOUT,
            body_timeout: BODY_TIMEOUT,
            base_url: None,
        }
    }
}

pub(crate) struct ImageDownloader {
    agent: Agent,
    user_agent: String,
    referer: String,
    base_url: Option<Url>,
}

impl ImageDownloader {
    pub(crate) fn new(options: DownloadOptions) -> Self {
        let config = Agent::config_builder()
            .timeout_connect(Some(options.timeout))
            .timeout_recv_response(Some(options.timeout))
            .timeout_recv_body(Some(options.body_timeout))
            .build();
        let base_url = options.base_url.as_deref().and_then(|u| Url::parse(u).ok());
        Self {
            agent: config.into(),
            user_agent: options.user_agent,
            referer: options.referer,
            base_url,
        }
    }

    /// Save every image under `<output_root>/session<N>/image<i><ext>`
    pub(crate) fn download(&self, images: &SessionImageMap, output_root: &Path) -> usize {
        let mut total = 0;
        for (session, urls) in images.iter() {
            if urls.is_empty() {
                continue;
            }
            let out_dir = output_root.join(format!("session{session}"));
            if let Err(e) = fs::create_dir_all(&out_dir) {
                warn!(dir = %out_dir.display(), error = %e, "failed to create session directory, skipping session");
                continue;
            }
            for (i, url) in urls.iter().enumerate() {
                match self.download_one(url, &out_dir, i + 1) {
                    Ok(path) => {
                        info!("Saved: {}", path.display());
                        total += 1;
                    }
                    Err(e) => warn!(%url, error = %e, "failed to download image"),
                }
            }
        }
        total
    }

    fn resolve_url(&self, raw: &str) -> Result<Url, DownloadError> {
        match Url::parse(raw) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base.join(raw).map_err(|e| DownloadError::InvalidUrl(format!("{raw}: {e}"))),
                None => Err(DownloadError::InvalidUrl(format!("{raw}: relative URL without a page URL"))),
            },
            Err(e) => Err(DownloadError::InvalidUrl(format!("{raw}: {e}"))),
        }
    }

    fn download_one(&self, raw_url: &str, out_dir: &Path, index: usize) -> Result<PathBuf, DownloadError> {
        let url = self.resolve_url(raw_url)?;
        debug!(%url, "fetching image");
        let response = self
            .agent
            .get(url.as_str())
            .header("User-Agent", self.user_agent.as_str())
            .header("Referer", self.referer.as_str())
            .call()?;

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let ext = resolve_extension(url.as_str(), content_type.as_deref());
        let path = out_dir.join(format!("image{index}{ext}"));

        let mut reader = response.into_body().into_reader();
        if let Err(e) = stream_to_file(&mut reader, &path) {
            let _ = fs::remove_file(&path);
            return Err(e);
        }
        Ok(path)
    }
}

/// Copy `reader` into a new file at `path` in fixed-size chunks
fn stream_to_file(reader: &mut impl Read, path: &Path) -> Result<u64, DownloadError> {
    let write_err = |source| DownloadError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_err)?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut written = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(DownloadError::Read(e)),
        };
        file.write_all(&buf[..n]).map_err(write_err)?;
        written += n as u64;
    }
    file.flush().map_err(write_err)?;
    Ok(written)
}
