//! Error types and error handling

use thiserror::Error;

use crate::routing::RouteError;

/// Widget rendering error
///
/// The configuration variants mean the caller handed a helper an incomplete
/// or contradictory description. They abort rendering of that fragment; no
/// partial markup is returned.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A toggle was configured without `selector` or `values`
    #[error("no selector specified for toggle input `{input}`")]
    MissingSelector {
        /// Name of the input being rendered
        input: String,
    },

    /// A toggle was configured with both `selector` and `values`
    #[error("toggle input `{input}` specifies both `selector` and `values`")]
    ConflictingSelector {
        /// Name of the input being rendered
        input: String,
    },

    /// A per-option toggle was configured on an input without options
    #[error("no options specified for toggle input `{input}`")]
    MissingOptions {
        /// Name of the input being rendered
        input: String,
    },

    /// A widget was rendered without one of its required data keys
    #[error("{widget} requires a `{key}` entry")]
    MissingData {
        /// Helper that rejected the data
        widget: &'static str,
        /// Missing key
        key: &'static str,
    },

    /// URL resolution failed
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Template rendering failed
    #[error("failed to render widget template: {0}")]
    Template(#[from] askama::Error),
}

impl WidgetError {
    /// Whether this error was caused by caller misconfiguration
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingSelector { .. }
                | Self::ConflictingSelector { .. }
                | Self::MissingOptions { .. }
                | Self::MissingData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WidgetError::MissingSelector { input: "has_fee".into() };
        assert_eq!(err.to_string(), "no selector specified for toggle input `has_fee`");

        let err = WidgetError::MissingData { widget: "ajax_link", key: "url" };
        assert_eq!(err.to_string(), "ajax_link requires a `url` entry");
    }

    #[test]
    fn test_route_errors_pass_through() {
        let err = WidgetError::from(RouteError::UnknownRoute("teams.view".into()));
        assert!(!err.is_configuration());
        assert_eq!(err.to_string(), "unknown route `teams.view`");
    }

    #[test]
    fn test_configuration_classification() {
        assert!(WidgetError::MissingOptions { input: "x".into() }.is_configuration());
        assert!(WidgetError::ConflictingSelector { input: "x".into() }.is_configuration());
    }
}
