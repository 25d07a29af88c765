// ABOUTME: Link normalization for scraped item hrefs.
// ABOUTME: Prepends the marketplace origin to anything that is not already an absolute URL.

use url::Url;

/// Make `href` absolute against `origin`.
///
/// Hrefs already starting with the origin are returned unchanged. Absolute
/// http(s) URLs on other hosts are kept as they are, and protocol-relative
/// ones (`//host/path`) take the origin's scheme. Everything else gets the
/// origin prepended, with exactly one slash between the two.
pub fn normalize_link(href: &str, origin: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let href = href.trim();

    if href.starts_with(origin) {
        return href.to_string();
    }

    if is_absolute_http(href) {
        return href.to_string();
    }

    if href.starts_with("//") {
        if let Some(resolved) = Url::parse(origin).and_then(|base| base.join(href)).ok() {
            return resolved.to_string();
        }
    }

    if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}

fn is_absolute_http(href: &str) -> bool {
    Url::parse(href)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}
