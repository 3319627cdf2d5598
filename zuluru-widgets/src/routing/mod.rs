//! URL resolution for widget data
//!
//! Helpers accept URLs either as literal paths or as named routes with
//! parameters. Named routes are turned into paths by a [`UrlResolver`]; the
//! application supplies its own resolver or uses the table-driven
//! [`RouteTable`].
//!
//! ```rust
//! use zuluru_widgets::routing::{Route, RouteTable, UrlResolver};
//!
//! let routes = RouteTable::new()
//!     .route("teams.view", "/teams/{team}")
//!     .route("people.search", "/people/search");
//!
//! let url = routes.url(&Route::new("teams.view").param("team", "12").param("tab", "roster"))?;
//! assert_eq!(url, "/teams/12?tab=roster");
//! # Ok::<(), zuluru_widgets::routing::RouteError>(())
//! ```

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters left unescaped in path segments and query components
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Errors produced while resolving a route to a URL
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// No route registered under this name
    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    /// A `{placeholder}` in the route pattern had no matching parameter
    #[error("route `{route}` is missing parameter `{param}`")]
    MissingParam {
        /// Route name
        route: String,
        /// Placeholder without a value
        param: String,
    },

    /// The route pattern has an unterminated `{` placeholder
    #[error("route `{route}` has a malformed pattern `{pattern}`")]
    MalformedPattern {
        /// Route name
        route: String,
        /// Offending pattern
        pattern: String,
    },
}

/// A named route plus its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    params: Vec<(String, String)>,
}

impl Route {
    /// Create a route reference with no parameters
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Add or replace a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_param(key, value);
        self
    }

    /// Add or replace a parameter in place
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Copy of this route with extra parameters appended
    ///
    /// Parameters already present keep their original value.
    #[must_use]
    pub fn with_extra(&self, extra: &[(String, String)]) -> Self {
        let mut route = self.clone();
        for (key, value) in extra {
            if route.get(key).is_none() {
                route.params.push((key.clone(), value.clone()));
            }
        }
        route
    }

    /// Route name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in insertion order
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a parameter value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A URL given either literally or as a named route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTarget {
    /// Literal URL, used as-is
    Path(String),
    /// Named route resolved through a [`UrlResolver`]
    Route(Route),
}

impl From<&str> for UrlTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for UrlTarget {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<Route> for UrlTarget {
    fn from(route: Route) -> Self {
        Self::Route(route)
    }
}

/// Turns named routes into URLs
pub trait UrlResolver {
    /// Build the URL for a named route
    ///
    /// # Errors
    ///
    /// Returns an error if the route is unknown or its parameters do not
    /// satisfy the route pattern.
    fn url(&self, route: &Route) -> Result<String, RouteError>;

    /// Resolve a literal path or named route
    ///
    /// # Errors
    ///
    /// Propagates errors from [`UrlResolver::url`].
    fn resolve(&self, target: &UrlTarget) -> Result<String, RouteError> {
        match target {
            UrlTarget::Path(path) => Ok(path.clone()),
            UrlTarget::Route(route) => self.url(route),
        }
    }
}

impl<T: UrlResolver + ?Sized> UrlResolver for &T {
    fn url(&self, route: &Route) -> Result<String, RouteError> {
        (**self).url(route)
    }
}

/// Table of named route patterns
///
/// Patterns use `{param}` placeholders. Parameters that do not fill a
/// placeholder are appended as a query string in the order given.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route pattern
    #[must_use]
    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.insert(name.into(), pattern.into());
        self
    }

    /// Number of registered routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl UrlResolver for RouteTable {
    fn url(&self, route: &Route) -> Result<String, RouteError> {
        let pattern = self
            .routes
            .get(route.name())
            .ok_or_else(|| RouteError::UnknownRoute(route.name().to_string()))?;

        let mut path = String::with_capacity(pattern.len());
        let mut used: Vec<&str> = Vec::new();
        let mut rest = pattern.as_str();

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| RouteError::MalformedPattern {
                route: route.name().to_string(),
                pattern: pattern.clone(),
            })?;
            let param = &after[..end];
            let value = route.get(param).ok_or_else(|| RouteError::MissingParam {
                route: route.name().to_string(),
                param: param.to_string(),
            })?;
            path.extend(utf8_percent_encode(value, COMPONENT));
            used.push(param);
            rest = &after[end + 1..];
        }
        path.push_str(rest);

        let query: Vec<String> = route
            .params()
            .iter()
            .filter(|(key, _)| !used.contains(&key.as_str()))
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, COMPONENT),
                    utf8_percent_encode(value, COMPONENT)
                )
            })
            .collect();
        if !query.is_empty() {
            path.push(if path.contains('?') { '&' } else { '?' });
            path.push_str(&query.join("&"));
        }

        tracing::trace!(route = route.name(), url = %path, "resolved route");
        Ok(path)
    }
}
