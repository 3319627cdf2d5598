//! Logging setup
//!
//! Widget helpers emit `tracing` events (computed toggle branches at `debug`,
//! misconfiguration at `error`). Applications that do not already install a
//! subscriber can call [`init`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging
///
/// Sets up environment-based level filtering (`RUST_LOG`), pretty output in
/// debug builds and JSON output in release builds.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use zuluru_widgets::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("rendering widgets");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    init_with(&ObservabilityConfig::default())
}

/// Initialize structured logging with explicit settings
///
/// `RUST_LOG` still takes precedence over the configured filter.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    #[cfg(debug_assertions)]
    {
        // Pretty formatting for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        // JSON formatting for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    tracing::info!(service = %config.service_name, "logging initialized");
    Ok(())
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to log output
    pub service_name: String,

    /// Log every resolved route at trace level
    pub trace_routes: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "zuluru-widgets".to_string(),
            trace_routes: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create new observability config
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable route tracing
    #[must_use]
    pub const fn with_route_tracing(mut self) -> Self {
        self.trace_routes = true;
        self
    }

    /// Filter directive matching this configuration
    #[must_use]
    pub fn filter_directive(&self) -> String {
        let base = if cfg!(debug_assertions) { "debug" } else { "info" };
        let level = if self.trace_routes { "trace" } else { "debug" };
        format!("{base},zuluru_widgets={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "zuluru-widgets");
        assert!(!config.trace_routes);
        assert!(config.filter_directive().ends_with(",zuluru_widgets=debug"));
    }

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("league-site").with_route_tracing();
        assert_eq!(config.service_name, "league-site");
        assert!(config.trace_routes);
        assert!(config.filter_directive().ends_with(",zuluru_widgets=trace"));
    }
}
