use std::path::Path;

use url::Url;

use crate::consts::DEFAULT_IMAGE_EXT;

/// Longest path extension (including the dot) trusted as a real one
const MAX_URL_EXT_LEN: usize = 5;

/// Extension from the last URL path segment, e.g. `.png` for `.../photo.png?x=1`
pub(crate) fn ext_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.next_back()?;
    let ext = Path::new(segment).extension()?.to_str()?;
    let ext = format!(".{ext}");
    (ext.len() <= MAX_URL_EXT_LEN).then_some(ext)
}

/// Extension for a Content-Type header value; parameters are ignored
pub(crate) fn ext_from_content_type(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
    let ext = match mime.as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "image/svg+xml" => ".svg",
        "image/avif" => ".avif",
        "image/bmp" | "image/x-ms-bmp" => ".bmp",
        "image/tiff" => ".tiff",
        "image/x-icon" | "image/vnd.microsoft.icon" => ".ico",
        "image/heic" => ".heic",
        "image/heif" => ".heif",
        "video/mp4" => ".mp4",
        "application/pdf" => ".pdf",
        "text/html" => ".html",
        _ => return None,
    };
    Some(ext)
}

/// URL path first, then Content-Type, then the default image extension
pub(crate) fn resolve_extension(url: &str, content_type: Option<&str>) -> String {
    ext_from_url(url)
        .or_else(|| content_type.and_then(ext_from_content_type).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_IMAGE_EXT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_extension_ignores_query() {
        assert_eq!(ext_from_url("https://cdn.example/a/photo.png?x=1").as_deref(), Some(".png"));
        assert_eq!(ext_from_url("https://cdn.example/a/photo.jpeg").as_deref(), Some(".jpeg"));
    }

    #[test]
    fn url_extension_rejects_long_or_missing() {
        assert_eq!(ext_from_url("https://cdn.example/a/photo"), None);
        assert_eq!(ext_from_url("https://cdn.example/a/file.download"), None);
        assert_eq!(ext_from_url("https://cdn.example/"), None);
        assert_eq!(ext_from_url("not a url"), None);
    }

    #[test]
    fn url_extension_from_encoded_notion_proxy_path() {
        let url = "https://www.notion.so/image/https%3A%2F%2Fs3.amazonaws.com%2Fbucket%2Fshot.webp?table=block&id=1";
        assert_eq!(ext_from_url(url).as_deref(), Some(".webp"));
    }

    #[test]
    fn content_type_mapping() {
        assert_eq!(ext_from_content_type("image/webp"), Some(".webp"));
        assert_eq!(ext_from_content_type("image/jpeg; charset=binary"), Some(".jpg"));
        assert_eq!(ext_from_content_type("IMAGE/PNG"), Some(".png"));
        assert_eq!(ext_from_content_type("application/octet-stream"), None);
    }

    #[test]
    fn resolution_order() {
        assert_eq!(resolve_extension("https://x/photo.png?x=1", Some("image/webp")), ".png");
        assert_eq!(resolve_extension("https://x/photo", Some("image/webp")), ".webp");
        assert_eq!(resolve_extension("https://x/photo", None), ".jpg");
        assert_eq!(resolve_extension("https://x/photo", Some("application/octet-stream")), ".jpg");
    }
}
