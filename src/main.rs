mod application;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

/// Used when RUST_LOG is unset, empty, or unparsable
const DEFAULT_LOG_DIRECTIVE: &str = "dataset_splitter=info";

/// RUST_LOG wins when it holds a valid filter; otherwise
/// fall back to info-level logs for this crate.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the per-class summary
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();
    cli.run()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_rust_log_debug_is_kept() {
        let filter = log_filter(Some("dataset_splitter=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert!(!filter.to_string().contains("info"));
    }

    #[test]
    fn test_global_rust_log_level_is_kept() {
        let filter = log_filter(Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_default_when_unset_or_empty() {
        for rust_log in [None, Some(""), Some("  ")] {
            let filter = log_filter(rust_log);
            assert_eq!(filter.to_string(), DEFAULT_LOG_DIRECTIVE);
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        }
    }
}
