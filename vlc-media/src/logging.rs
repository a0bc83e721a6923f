//! Logging setup for applications embedding the adapter
//!
//! The crate itself only emits `tracing` events. Hosts that do not install
//! their own subscriber can use these helpers; the default stays silent so
//! a terminal UI is not garbled by poll chatter.
//!
//! The built-in filters are scoped to the adapter's own crates. With a
//! 500 ms poll, `reqwest` and `hyper` connection logs at debug level would
//! drown everything else, so they stay at `warn` unless a filter is given
//! explicitly.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Environment variable selecting the logging mode
pub const LOG_MODE_ENV: &str = "VLC_MEDIA_LOG_MODE";

/// Environment variable overriding the filter directive
pub const LOG_LEVEL_ENV: &str = "VLC_MEDIA_LOG_LEVEL";

/// Crates whose events the built-in filters let through
const ADAPTER_TARGETS: [&str; 3] = ["vlc_media", "vlc_client", "vlc_parser"];

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No output
    Silent,
    /// Compact stderr output: activation, deactivation, command failures
    Development,
    /// Every poll tick and request, with source locations
    Debug,
}

impl LoggingMode {
    /// Filter used when neither `VLC_MEDIA_LOG_LEVEL` nor `RUST_LOG` is set
    pub fn default_directive(&self) -> Option<String> {
        let level = match self {
            LoggingMode::Silent => return None,
            LoggingMode::Development => "info",
            LoggingMode::Debug => "trace",
        };

        let mut directive = String::from("warn");
        for target in ADAPTER_TARGETS {
            directive.push_str(&format!(",{target}={level}"));
        }
        Some(directive)
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode
///
/// Call this once, early, before activating any adapter. When the host has
/// already installed a global subscriber this leaves it in place and
/// returns `Ok`.
///
/// # Environment Variables
///
/// - `VLC_MEDIA_LOG_LEVEL`: Override the filter (e.g. `vlc_media=trace`)
/// - `RUST_LOG`: Used when `VLC_MEDIA_LOG_LEVEL` is not set
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let Some(default_directive) = mode.default_directive() else {
        return Ok(());
    };

    if is_initialized() {
        tracing::debug!(?mode, "Keeping the host's tracing subscriber");
        return Ok(());
    }

    let filter = create_env_filter(&default_directive);
    let result = match mode {
        LoggingMode::Debug => Registry::default()
            .with(fmt::layer().pretty().with_file(true).with_line_number(true))
            .with(filter)
            .try_init(),
        _ => Registry::default()
            .with(fmt::layer().with_target(false).compact())
            .with(filter)
            .try_init(),
    };

    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Initialize logging from `VLC_MEDIA_LOG_MODE`
///
/// - "development" -> LoggingMode::Development
/// - "debug" -> LoggingMode::Debug
///
/// Anything else, or the variable being unset, means silent.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    init_logging(mode_from_str(std::env::var(LOG_MODE_ENV).ok().as_deref()))
}

fn mode_from_str(value: Option<&str>) -> LoggingMode {
    match value.map(str::trim) {
        Some(mode) if mode.eq_ignore_ascii_case("development") => LoggingMode::Development,
        Some(mode) if mode.eq_ignore_ascii_case("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

/// Explicit filters win over the crate-scoped default
fn create_env_filter(default_directive: &str) -> EnvFilter {
    std::env::var(LOG_LEVEL_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Check if a global subscriber has already been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}
