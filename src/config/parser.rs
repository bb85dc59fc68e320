use crate::config::types::{
    default_user_agent, CheckConfig, CheckOptions, CrawlSettings, OutputFormat, SettingsFile,
    DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_ERRORS, DEFAULT_MAX_VISITED, DEFAULT_REQUEST_TIMEOUT,
};
use crate::config::validation::{
    compile_watch_pattern, sanitize_concurrency, validate_contact_url, validate_limits,
    validate_seed, validate_watch_flags,
};
use crate::check::WatchClasses;
use crate::url::extract_host;
use crate::{ConfigError, ConfigResult};
use std::path::Path;
use std::time::Duration;

/// Loads and parses a settings file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Returns
///
/// * `Ok(SettingsFile)` - Successfully loaded settings
/// * `Err(ConfigError)` - Failed to read or parse the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use ripple_check::config::load_settings;
///
/// let settings = load_settings(Path::new("ripple-check.toml")).unwrap();
/// println!("Concurrency: {:?}", settings.crawl.concurrency);
/// ```
pub fn load_settings(path: &Path) -> ConfigResult<SettingsFile> {
    let content = std::fs::read_to_string(path)?;
    let settings: SettingsFile = toml::from_str(&content)?;
    Ok(settings)
}

/// Builds the run configuration from command-line options
///
/// Values given on the command line take precedence over the settings file,
/// which takes precedence over the built-in defaults.
///
/// # Returns
///
/// * `Ok(CheckConfig)` - Validated configuration
/// * `Err(ConfigError)` - A validation rule failed; the run must not start
pub fn build_config(options: &CheckOptions) -> ConfigResult<CheckConfig> {
    let file = match &options.config_path {
        Some(path) => load_settings(path)?,
        None => SettingsFile::default(),
    };

    let seed_url = validate_seed(&options.urls)?;
    validate_watch_flags(options)?;
    let filename_pattern = compile_watch_pattern(options.watch_pattern.as_deref())?;

    let settings = merge_settings(options, &file.crawl);
    validate_limits(&settings)?;

    let contact_url = file.user_agent.contact_url.as_deref();
    validate_contact_url(contact_url)?;

    let seed_host = extract_host(&seed_url).ok_or_else(|| {
        ConfigError::InvalidUrl(format!("URL host is missing: '{}'", seed_url))
    })?;

    Ok(CheckConfig {
        seed_url,
        seed_host,
        watch_href: options.watch_href,
        watch_src: options.watch_src,
        span_hosts: options.span_hosts,
        span_subdomains: options.span_subdomains,
        watch: WatchClasses {
            server_errors: options.check_server_errors,
            client_errors: options.check_client_errors,
            redirects: options.check_redirection,
        },
        output: if options.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        filename_pattern,
        concurrency: sanitize_concurrency(settings.concurrency),
        max_visited: settings.max_visited.unwrap_or(DEFAULT_MAX_VISITED),
        max_errors: settings.max_errors.unwrap_or(DEFAULT_MAX_ERRORS),
        idle_timeout: settings
            .idle_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_IDLE_TIMEOUT),
        fetch_delay: Duration::from_millis(settings.delay_ms.unwrap_or(0)),
        request_timeout: settings
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        user_agent: default_user_agent(contact_url),
    })
}

/// Overlays command-line values on the settings file
fn merge_settings(options: &CheckOptions, file: &CrawlSettings) -> CrawlSettings {
    CrawlSettings {
        concurrency: options.concurrency.or(file.concurrency),
        max_visited: options.max_visited.or(file.max_visited),
        max_errors: options.max_errors.or(file.max_errors),
        idle_timeout_secs: options.idle_timeout_secs.or(file.idle_timeout_secs),
        delay_ms: options.delay_ms.or(file.delay_ms),
        request_timeout_secs: options.request_timeout_secs.or(file.request_timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn valid_options() -> CheckOptions {
        CheckOptions {
            urls: vec!["http://example.com/".to_string()],
            watch_href: true,
            check_server_errors: true,
            check_client_errors: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_with_defaults() {
        let config = build_config(&valid_options()).unwrap();

        assert_eq!(config.seed_url.as_str(), "http://example.com/");
        assert_eq!(config.seed_host, "example.com");
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.max_visited, DEFAULT_MAX_VISITED);
        assert_eq!(config.max_errors, DEFAULT_MAX_ERRORS);
        assert_eq!(config.idle_timeout, DEFAULT_IDLE_TIMEOUT);
        assert_eq!(config.fetch_delay, Duration::ZERO);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.watch.server_errors);
        assert!(config.watch.client_errors);
        assert!(!config.watch.redirects);
        assert!(config.user_agent.starts_with("Mozilla/5.0 ripple-check/"));
        assert!(config
            .user_agent
            .ends_with(&format!("(+{})", env!("CARGO_PKG_REPOSITORY"))));
    }

    #[test]
    fn test_build_keeps_port_in_seed_host() {
        let options = CheckOptions {
            urls: vec!["http://127.0.0.1:8080/start".to_string()],
            ..valid_options()
        };
        let config = build_config(&options).unwrap();
        assert_eq!(config.seed_host, "127.0.0.1:8080");
    }

    #[test]
    fn test_build_json_output() {
        let options = CheckOptions {
            json: true,
            ..valid_options()
        };
        assert_eq!(build_config(&options).unwrap().output, OutputFormat::Json);
    }

    #[test]
    fn test_load_valid_settings() {
        let file = create_temp_config(
            r#"
[crawl]
concurrency = 4
max-visited = 500
max-errors = 3
idle-timeout-secs = 5
delay-ms = 250
request-timeout-secs = 12

[user-agent]
contact-url = "https://example.com/about"
"#,
        );

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.crawl.concurrency, Some(4));
        assert_eq!(settings.crawl.max_visited, Some(500));
        assert_eq!(
            settings.user_agent.contact_url.as_deref(),
            Some("https://example.com/about")
        );
    }

    #[test]
    fn test_settings_file_applied() {
        let file = create_temp_config(
            r#"
[crawl]
concurrency = 4
delay-ms = 250

[user-agent]
contact-url = "https://example.com/about"
"#,
        );
        let options = CheckOptions {
            config_path: Some(file.path().to_path_buf()),
            ..valid_options()
        };

        let config = build_config(&options).unwrap();
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.fetch_delay, Duration::from_millis(250));
        assert!(config.user_agent.contains("+https://example.com/about"));
    }

    #[test]
    fn test_command_line_overrides_settings_file() {
        let file = create_temp_config("[crawl]\nconcurrency = 4\nmax-errors = 3\n");
        let options = CheckOptions {
            config_path: Some(file.path().to_path_buf()),
            concurrency: Some(16),
            ..valid_options()
        };

        let config = build_config(&options).unwrap();
        assert_eq!(config.concurrency, 16);
        assert_eq!(config.max_errors, 3);
    }

    #[test]
    fn test_unknown_settings_key_rejected() {
        let file = create_temp_config("[crawl]\nmax-depth = 3\n");
        let result = load_settings(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        assert!(load_settings(file.path()).is_err());
    }

    #[test]
    fn test_missing_settings_file() {
        let result = load_settings(Path::new("/nonexistent/ripple-check.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_validation_error_from_file() {
        let file = create_temp_config("[crawl]\nmax-errors = 0\n");
        let options = CheckOptions {
            config_path: Some(file.path().to_path_buf()),
            ..valid_options()
        };
        assert!(matches!(
            build_config(&options),
            Err(ConfigError::Validation(_))
        ));
    }
}
