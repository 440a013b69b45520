//! Checkout URL parsing

/// Last `/`-separated segment of a checkout URL.
///
/// The URL is not validated in any way. Returns `None` for empty input or
/// when the final segment is empty (trailing slash).
pub fn parse_checkout_url(url: Option<&str>) -> Option<&str> {
    let url = url?;
    if url.is_empty() {
        return None;
    }
    url.rsplit('/').next().filter(|segment| !segment.is_empty())
}
