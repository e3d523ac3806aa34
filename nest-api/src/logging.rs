//! Logging setup for applications built on this crate
//!
//! The library itself only emits `tracing` events (request URLs, redirect
//! hops, failed statuses). Applications opt into output by installing a
//! subscriber, either directly or through [`init_logging`].
//!
//! # Environment Variables
//!
//! - `NEST_LOG_MODE`: `silent`, `development` or `debug` (used by [`init_logging_from_env`])
//! - `NEST_LOG_LEVEL`: Filter directive, e.g. `debug` or `rest_client=trace`.
//!   Falls back to `RUST_LOG`, then to the mode's default level.
//! - `NEST_LOG_TARGET`: Only log this target at the chosen level, everything
//!   else at `warn`, e.g. `rest_client`

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber is installed
    Silent,
    /// Compact stderr output at `info`
    Development,
    /// Pretty output at `debug` with source locations
    Debug,
}

impl LoggingMode {
    /// Parse a mode name; anything unrecognised is `Silent`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => LoggingMode::Development,
            "debug" => LoggingMode::Debug,
            _ => LoggingMode::Silent,
        }
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install a global subscriber for the given mode
///
/// Call once, early. A second call fails with [`LoggingError::TracingInit`].
///
/// ```rust,ignore
/// nest_api::logging::init_logging(LoggingMode::Development)?;
/// ```
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => Registry::default()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .with(env_filter("info"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Debug => Registry::default()
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter("debug"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
    }
}

/// Initialize logging with the mode named by `NEST_LOG_MODE` (default silent)
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = std::env::var("NEST_LOG_MODE")
        .map(|name| LoggingMode::parse(&name))
        .unwrap_or(LoggingMode::Silent);

    init_logging(mode)
}

fn env_filter(default_level: &str) -> EnvFilter {
    let level = std::env::var("NEST_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());
    let target = std::env::var("NEST_LOG_TARGET").ok();

    EnvFilter::new(filter_directive(&level, target.as_deref()))
}

fn filter_directive(level: &str, target: Option<&str>) -> String {
    match target.map(str::trim) {
        Some(target) if !target.is_empty() => format!("warn,{}={}", target, level.trim()),
        _ => level.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(LoggingMode::parse("debug"), LoggingMode::Debug);
        assert_eq!(LoggingMode::parse(" Development "), LoggingMode::Development);
        assert_eq!(LoggingMode::parse("dev"), LoggingMode::Development);
        assert_eq!(LoggingMode::parse("loud"), LoggingMode::Silent);
        assert_eq!(LoggingMode::parse(""), LoggingMode::Silent);
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug", None), "debug");
        assert_eq!(filter_directive(" info ", Some("")), "info");
        assert_eq!(
            filter_directive("trace", Some("rest_client")),
            "warn,rest_client=trace"
        );
    }
}
