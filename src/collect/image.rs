use scraper::ElementRef;

/// Pick the best URL for an `<img>`: `src`, then `data-src`, then the first
/// `srcset` candidate. Empty attributes fall through to the next source.
pub(crate) fn best_image_src(img: ElementRef<'_>) -> Option<String> {
    let element = img.value();
    if let Some(src) = non_empty(element.attr("src")) {
        return Some(src.to_string());
    }
    if let Some(src) = non_empty(element.attr("data-src")) {
        return Some(src.to_string());
    }
    element.attr("srcset").and_then(first_srcset_candidate)
}

/// First URL of a `srcset` value, without its width/density descriptor
pub(crate) fn first_srcset_candidate(srcset: &str) -> Option<String> {
    let first = srcset.split(',').next()?.trim();
    let url = first.split(' ').next()?;
    non_empty(Some(url)).map(str::to_string)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
