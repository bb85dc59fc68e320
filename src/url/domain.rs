use url::Url;

/// Extracts the host of a URL, including a non-default port
///
/// The host is lowercase (the `url` crate normalizes it while parsing). The
/// port is kept so that `localhost:8080` and `localhost:9090` are distinct
/// hosts for scope decisions.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use ripple_check::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.com/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_host(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Trims stray slashes, dots and spaces from a configured host name
pub fn trim_host(host: &str) -> String {
    host.trim_matches(|c| c == '/' || c == '.' || c == ' ')
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_host() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_default_port_is_dropped() {
        let url = Url::parse("http://example.com:80/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_with_port() {
        let url = Url::parse("http://example.com:8080/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com:8080".to_string()));
    }

    #[test]
    fn test_extract_no_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(extract_host(&url), None);
    }

    #[test]
    fn test_trim_host() {
        assert_eq!(trim_host("example.com"), "example.com");
        assert_eq!(trim_host(" example.com./"), "example.com");
        assert_eq!(trim_host("//Example.COM"), "example.com");
    }
}
