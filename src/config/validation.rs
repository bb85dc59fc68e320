use crate::config::types::{CheckOptions, CrawlSettings, DEFAULT_CONCURRENCY};
use crate::url::parse_seed_url;
use crate::{ConfigError, ConfigResult, UrlError};
use regex::Regex;
use url::Url;

/// Validates the positional URL arguments and returns the seed URL
pub fn validate_seed(urls: &[String]) -> ConfigResult<Url> {
    let raw = match urls {
        [] => {
            return Err(ConfigError::Validation(
                "URL to be checked is missing".to_string(),
            ))
        }
        [raw] => raw,
        _ => {
            return Err(ConfigError::Validation(
                "URL cannot be given more than once".to_string(),
            ))
        }
    };

    parse_seed_url(raw).map_err(|e| match e {
        UrlError::MissingHost => ConfigError::InvalidUrl(format!("URL host is missing: '{}'", raw)),
        other => ConfigError::InvalidUrl(format!("URL given is not parsable: '{}' ({})", raw, other)),
    })
}

/// Validates that at least one attribute family and one status class is watched
pub fn validate_watch_flags(options: &CheckOptions) -> ConfigResult<()> {
    if !options.watch_href && !options.watch_src {
        return Err(ConfigError::Validation(
            "Nothing to 'watch', enable --watch-href and/or --watch-src".to_string(),
        ));
    }

    if !options.check_server_errors && !options.check_client_errors && !options.check_redirection
    {
        return Err(ConfigError::Validation(
            "Nothing to 'check', enable at least one of --check-server-errors, \
             --check-client-errors, --check-redirection"
                .to_string(),
        ));
    }

    Ok(())
}

/// Compiles the filename watch pattern
///
/// The pattern is matched against the last path segment only, so it may not
/// contain a slash.
pub fn compile_watch_pattern(pattern: Option<&str>) -> ConfigResult<Option<Regex>> {
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    if pattern.contains('/') {
        return Err(ConfigError::InvalidPattern(format!(
            "filename pattern contains a slash '/': '{}'",
            pattern
        )));
    }

    Regex::new(pattern)
        .map(Some)
        .map_err(|e| ConfigError::InvalidPattern(format!("failed to compile '{}': {}", pattern, e)))
}

/// Returns the concurrency level, falling back to the default when not positive
pub fn sanitize_concurrency(level: Option<i64>) -> usize {
    match level {
        Some(level) if level > 0 => usize::try_from(level).unwrap_or(DEFAULT_CONCURRENCY),
        _ => DEFAULT_CONCURRENCY,
    }
}

/// Validates the numeric limits after merging file and command line values
pub fn validate_limits(settings: &CrawlSettings) -> ConfigResult<()> {
    if settings.max_errors == Some(0) {
        return Err(ConfigError::Validation(
            "max-errors must be >= 1, got 0".to_string(),
        ));
    }

    if settings.max_visited == Some(0) {
        return Err(ConfigError::Validation(
            "max-visited must be >= 1, got 0".to_string(),
        ));
    }

    if settings.idle_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "idle-timeout must be >= 1 second, got 0".to_string(),
        ));
    }

    if settings.request_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "request-timeout must be >= 1 second, got 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates the contact URL included in the User-Agent
pub fn validate_contact_url(contact_url: Option<&str>) -> ConfigResult<()> {
    if let Some(contact) = contact_url {
        Url::parse(contact)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }
    Ok(())
}
