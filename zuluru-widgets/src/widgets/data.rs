//! AJAX data maps

use crate::attributes::AttributeSet;
use crate::error::WidgetError;
use crate::routing::{Route, UrlResolver, UrlTarget};

/// One value of an AJAX data map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataValue {
    /// Literal text
    Text(String),
    /// URL, resolved through the router when rendered
    Url(UrlTarget),
    /// List, rendered as `#a#b#`
    List(Vec<String>),
}

impl DataValue {
    /// Render the value for a `data-*` attribute
    ///
    /// # Errors
    ///
    /// Propagates router errors for [`DataValue::Url`].
    pub fn render<R: UrlResolver>(&self, router: &R) -> Result<String, WidgetError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Url(target) => Ok(router.resolve(target)?),
            Self::List(items) => Ok(hash_list(items.as_slice())),
        }
    }
}

/// Join items as `#a#b#`
#[must_use]
pub fn hash_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::from("#");
    for item in items {
        out.push_str(item.as_ref());
        out.push('#');
    }
    out
}

impl From<&str> for DataValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DataValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<UrlTarget> for DataValue {
    fn from(target: UrlTarget) -> Self {
        Self::Url(target)
    }
}

impl From<Route> for DataValue {
    fn from(route: Route) -> Self {
        Self::Url(UrlTarget::Route(route))
    }
}

impl From<Vec<String>> for DataValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Ordered `data-*` options telling the client script how to handle a request
///
/// Keys are written without the `data-` prefix, e.g. `url`, `disposition`.
///
/// ```rust
/// use zuluru_widgets::routing::Route;
/// use zuluru_widgets::widgets::AjaxData;
///
/// let data = AjaxData::new()
///     .with("url", Route::new("games.attendance").param("game", "12"))
///     .with("disposition", "replace");
/// assert_eq!(data.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AjaxData {
    entries: Vec<(String, DataValue)>,
}

impl AjaxData {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, replacing any existing value for the key in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DataValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `url` entry, required by `widget`
    pub(crate) fn require_url(&self, widget: &'static str) -> Result<&DataValue, WidgetError> {
        self.get("url").ok_or_else(|| {
            tracing::error!(widget, "widget data has no url");
            WidgetError::MissingData { widget, key: "url" }
        })
    }

    /// Write every entry as `data-<key>`
    pub(crate) fn write_to<R: UrlResolver>(
        &self,
        router: &R,
        attrs: &mut AttributeSet,
    ) -> Result<(), WidgetError> {
        for (key, value) in &self.entries {
            attrs.data(key, value.render(router)?);
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<DataValue>> FromIterator<(K, V)> for AjaxData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut data = Self::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}
