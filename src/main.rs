//! Ripple-Check main entry point
//!
//! This is the command-line interface for the Ripple-Check link checker.

use clap::Parser;
use ripple_check::config::{build_config, CheckOptions};
use ripple_check::output::reporter_for;
use ripple_check::crawler::run_check;
use ripple_check::{RunSummary, StopReason};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LICENSE: &str = "\
MIT License

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

/// Ripple-Check: a concurrent broken link checker
///
/// Ripple-Check crawls a website from a seed URL, following href and src
/// links, and reports redirects, client errors, server errors and connection
/// failures as it finds them.
#[derive(Parser, Debug)]
#[command(name = "ripple-check")]
#[command(about = "A concurrent broken link checker", long_about = None)]
struct Cli {
    /// URL to start checking from
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Show version and exit
    #[arg(short = 'v', long)]
    version: bool,

    /// Show license and exit
    #[arg(short = 'l', long)]
    license: bool,

    /// Watch URLs in 'href' attributes
    #[arg(long)]
    watch_href: bool,

    /// Watch URLs in 'src' attributes
    #[arg(long)]
    watch_src: bool,

    /// Only fetch links whose filename matches this regular expression
    #[arg(long, value_name = "REGEX")]
    watch_pattern: Option<String>,

    /// Follow links hosted on other websites
    #[arg(long)]
    span_hosts: bool,

    /// Follow links to subdomains of the seed host
    #[arg(long)]
    span_subdomains: bool,

    /// Print results as JSON, one object per line
    #[arg(short = 'j', long)]
    json: bool,

    /// Report HTTP 5xx server errors
    #[arg(long)]
    check_server_errors: bool,

    /// Report HTTP 4xx client errors
    #[arg(long)]
    check_client_errors: bool,

    /// Report HTTP 3xx redirects
    #[arg(long)]
    check_redirection: bool,

    /// Number of concurrent fetches (values below 1 fall back to 1)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    concurrency_level: Option<i64>,

    /// Maximum number of URLs remembered as visited
    #[arg(long, value_name = "N")]
    max_visited: Option<usize>,

    /// Stop after this many server or client errors
    #[arg(long, value_name = "N")]
    max_errors: Option<u32>,

    /// Stop after this many seconds without new work
    #[arg(long, value_name = "SECS")]
    idle_timeout: Option<u64>,

    /// Wait this many milliseconds before each request
    #[arg(long, value_name = "MS")]
    delay: Option<u64>,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECS")]
    request_timeout: Option<u64>,

    /// Path to TOML settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log every fetch and skipped link to stderr
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn into_options(self) -> CheckOptions {
        CheckOptions {
            urls: self.urls,
            watch_href: self.watch_href,
            watch_src: self.watch_src,
            watch_pattern: self.watch_pattern,
            span_hosts: self.span_hosts,
            span_subdomains: self.span_subdomains,
            json: self.json,
            check_server_errors: self.check_server_errors,
            check_client_errors: self.check_client_errors,
            check_redirection: self.check_redirection,
            concurrency: self.concurrency_level,
            max_visited: self.max_visited,
            max_errors: self.max_errors,
            idle_timeout_secs: self.idle_timeout,
            delay_ms: self.delay,
            request_timeout_secs: self.request_timeout,
            config_path: self.config,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.license {
        println!("{}", LICENSE);
        return ExitCode::SUCCESS;
    }

    if cli.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    setup_logging(cli.debug);

    let options = cli.into_options();
    let config = match build_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}, for usage see: -h | --help", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("Configuration: {:?}", config);

    let mut reporter = reporter_for(config.output, std::io::stdout());

    match run_check(config, reporter.as_mut()).await {
        Ok(summary) => {
            log_summary(&summary);
            ExitCode::from(summary.exit_code())
        }
        Err(e) => {
            tracing::error!("Check failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber
///
/// Logs go to stderr so stdout carries only results. `RUST_LOG` overrides the
/// default filter.
fn setup_logging(debug: bool) {
    let default = if debug {
        "ripple_check=debug"
    } else {
        "ripple_check=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn log_summary(summary: &RunSummary) {
    match summary.stop {
        StopReason::Idle => tracing::info!(
            "Check finished: {} dispatched, {} reported, {} watched errors, {} visited",
            summary.dispatched,
            summary.reported,
            summary.watched_errors,
            summary.visited
        ),
        StopReason::ErrorThreshold { errors } => tracing::warn!(
            "Check aborted after {} watched errors: {} dispatched, {} reported, {} visited",
            errors,
            summary.dispatched,
            summary.reported,
            summary.visited
        ),
    }
}
