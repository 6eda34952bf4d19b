//! Tracing and logging setup
//!
//! Installs the global `tracing` subscriber. The output format follows the
//! runtime environment: human-readable with source locations and span
//! open/close events during development, JSON lines in production. A
//! `RUST_LOG` filter overrides the default level in both formats.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Subscriber format and default level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    level: Level,
    json: bool,
}

impl TracingConfig {
    /// Pretty output with debug logging
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json: false,
        }
    }

    /// JSON lines at info level
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
        }
    }

    /// Pick the format matching the runtime environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        if env.is_production() {
            Self::production()
        } else {
            Self::development()
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::development()
    }
}

/// Install the global tracing subscriber
///
/// # Errors
/// Returns [`TracingError::AlreadyInitialized`] when a subscriber has
/// already been installed for this process.
pub fn try_init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()
    };

    result.map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
