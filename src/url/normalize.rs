use crate::url::decode_entities;
use crate::{UrlError, UrlResult};
use url::Url;

/// Parses the seed URL given on the command line
///
/// A URL given without a scheme (`example.com/start`) is treated as `http`.
///
/// # Returns
///
/// * `Ok(Url)` - Absolute http(s) URL with a host
/// * `Err(UrlError)` - The URL is unparsable, has no host, or a non-HTTP scheme
///
/// # Examples
///
/// ```
/// use ripple_check::url::parse_seed_url;
///
/// let url = parse_seed_url("example.com/start").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/start");
/// ```
pub fn parse_seed_url(raw: &str) -> UrlResult<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    let mut url = match Url::parse(raw) {
        Ok(url) if url.has_host() => url,
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" && !raw.contains("://") => {
            // "example.com:8080/x" parses with scheme "example.com"
            Url::parse(&format!("http://{}", raw)).map_err(|e| UrlError::Parse(e.to_string()))?
        }
        Ok(_) => return Err(UrlError::MissingHost),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("http://{}", raw)).map_err(|e| UrlError::Parse(e.to_string()))?
        }
        Err(e) => return Err(UrlError::Parse(e.to_string())),
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    Ok(url)
}

/// Resolves a raw attribute value against the page it was found on
///
/// # Resolution Steps
///
/// 1. Trim whitespace and decode HTML character references
/// 2. Resolve against `origin` (a value without host takes the origin's host
///    and scheme; a value without scheme takes the origin's scheme)
/// 3. Reject anything that is not http(s) with a host
/// 4. Remove the fragment
///
/// `mailto:` values are filtered by the caller before resolution.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use ripple_check::url::resolve_link;
///
/// let origin = Url::parse("http://example.com/page").unwrap();
/// let url = resolve_link(&origin, "/x?y=1").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/x?y=1");
///
/// let url = resolve_link(&origin, "//cdn.example.net/a.js").unwrap();
/// assert_eq!(url.as_str(), "http://cdn.example.net/a.js");
/// ```
pub fn resolve_link(origin: &Url, raw: &str) -> UrlResult<Url> {
    let decoded = decode_entities(raw.trim());
    let value = decoded.trim();

    if value.is_empty() {
        return Err(UrlError::Empty);
    }

    let mut url = origin
        .join(value)
        .map_err(|e| UrlError::Parse(format!("{}: {}", value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if !url.has_host() {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);
    Ok(url)
}
