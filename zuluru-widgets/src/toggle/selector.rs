//! Visibility rules and selector options

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::TOGGLE_INPUT_CLASS;
use crate::attributes::{AttributeSet, SelectorRole};
use crate::error::WidgetError;

/// Segment used in attribute names for the empty option value
pub const EMPTY_VALUE_SEGMENT: &str = "empty-string";

/// One visibility rule
///
/// A single selector is hidden while the input is falsy and shown while it is
/// truthy. A pair hides `hide` and then shows `show`; either half may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ToggleSpec {
    /// Selector toggled by truthiness
    Single(String),
    /// Explicit hide/show pair, hide applied first
    Pair {
        /// Selector to hide
        #[serde(default)]
        hide: Option<String>,
        /// Selector to show
        #[serde(default)]
        show: Option<String>,
    },
}

impl ToggleSpec {
    /// Hide one selector, then show another
    #[must_use]
    pub fn pair(hide: impl Into<String>, show: impl Into<String>) -> Self {
        Self::Pair {
            hide: Some(hide.into()),
            show: Some(show.into()),
        }
    }

    /// Write `data-selector` or `data-selector-hide`/`-show`
    pub(crate) fn write(&self, attrs: &mut AttributeSet) {
        match self {
            Self::Single(selector) => {
                attrs.selector(selector);
            }
            Self::Pair { hide, show } => {
                if let Some(hide) = hide {
                    attrs.selector_hide(hide);
                }
                if let Some(show) = show {
                    attrs.selector_show(show);
                }
            }
        }
    }

    /// Write the per-value variant `data-selector-<segment>[-hide|-show]`
    pub(crate) fn write_for_value(&self, attrs: &mut AttributeSet, segment: &str) {
        match self {
            Self::Single(selector) => {
                attrs.value_selector(segment, SelectorRole::Toggle, selector);
            }
            Self::Pair { hide, show } => {
                if let Some(hide) = hide {
                    attrs.value_selector(segment, SelectorRole::Hide, hide);
                }
                if let Some(show) = show {
                    attrs.value_selector(segment, SelectorRole::Show, show);
                }
            }
        }
    }
}

impl From<&str> for ToggleSpec {
    fn from(selector: &str) -> Self {
        Self::Single(selector.to_string())
    }
}

impl From<String> for ToggleSpec {
    fn from(selector: String) -> Self {
        Self::Single(selector)
    }
}

/// Make an option value safe for use inside an attribute name
///
/// Spaces are removed; a value that ends up empty becomes `empty-string`.
#[must_use]
pub fn sanitize_value(value: &str) -> String {
    let segment = value.replace(' ', "");
    if segment.is_empty() {
        EMPTY_VALUE_SEGMENT.to_string()
    } else {
        segment
    }
}

/// Ordered mapping from option value to visibility rule
///
/// Order is preserved from insertion (or from the source document when
/// deserialized) and determines the order of `data-values`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueMap {
    entries: Vec<(String, ToggleSpec)>,
}

impl ValueMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, value: impl Into<String>, spec: impl Into<ToggleSpec>) -> Self {
        self.insert(value, spec);
        self
    }

    /// Insert a rule, replacing an existing rule for the same value in place
    pub fn insert(&mut self, value: impl Into<String>, spec: impl Into<ToggleSpec>) {
        let value = value.into();
        let spec = spec.into();
        match self.entries.iter_mut().find(|(v, _)| *v == value) {
            Some(slot) => slot.1 = spec,
            None => self.entries.push((value, spec)),
        }
    }

    /// Rule for a value
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&ToggleSpec> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, spec)| spec)
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ToggleSpec)> {
        self.entries.iter().map(|(v, spec)| (v.as_str(), spec))
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
}

impl<V: Into<String>, S: Into<ToggleSpec>> FromIterator<(V, S)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (V, S)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (value, spec) in iter {
            map.insert(value, spec);
        }
        map
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueMapVisitor;

        impl<'de> Visitor<'de> for ValueMapVisitor {
            type Value = ValueMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of option values to selectors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ValueMap, A::Error> {
                let mut map = ValueMap::new();
                while let Some((value, spec)) = access.next_entry::<String, ToggleSpec>()? {
                    map.insert(value, spec);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ValueMapVisitor)
    }
}

/// Where a toggle gets its selectors from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorSource {
    /// One rule driven by the input's truthiness
    Selector(ToggleSpec),
    /// One rule per discrete input value
    Values(ValueMap),
}

/// Validated description of what a toggle input shows and hides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOptions {
    /// Selector source
    pub source: SelectorSource,
    /// Show/hide the closest ancestor matching this selector instead
    pub parent_selector: Option<String>,
    /// Also toggle matches that have no such ancestor
    pub parent_selector_optional: Option<bool>,
    /// Only toggle elements inside this selector
    pub container_selector: Option<String>,
}

impl SelectorOptions {
    /// Toggle driven by the input's truthiness
    #[must_use]
    pub fn selector(spec: impl Into<ToggleSpec>) -> Self {
        Self::from_source(SelectorSource::Selector(spec.into()))
    }

    /// Toggle driven by discrete input values
    #[must_use]
    pub fn values(values: ValueMap) -> Self {
        Self::from_source(SelectorSource::Values(values))
    }

    const fn from_source(source: SelectorSource) -> Self {
        Self {
            source,
            parent_selector: None,
            parent_selector_optional: None,
            container_selector: None,
        }
    }

    /// Set the parent selector
    #[must_use]
    pub fn parent_selector(mut self, selector: impl Into<String>) -> Self {
        self.parent_selector = Some(selector.into());
        self
    }

    /// Set whether the parent selector is optional
    #[must_use]
    pub const fn parent_selector_optional(mut self, optional: bool) -> Self {
        self.parent_selector_optional = Some(optional);
        self
    }

    /// Set the container selector
    #[must_use]
    pub fn container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = Some(selector.into());
        self
    }

    /// Marker class plus the scope attributes copied into every produced set
    #[must_use]
    pub fn shared_attributes(&self) -> AttributeSet {
        let mut attrs = AttributeSet::new();
        attrs.add_class(TOGGLE_INPUT_CLASS);
        if let Some(ref selector) = self.parent_selector {
            attrs.parent_selector(selector);
        }
        if let Some(optional) = self.parent_selector_optional {
            attrs.parent_selector_optional(optional);
        }
        if let Some(ref selector) = self.container_selector {
            attrs.container_selector(selector);
        }
        attrs
    }
}

/// Unvalidated selector options, as read from configuration
///
/// ```rust
/// use zuluru_widgets::toggle::{SelectorOptionsConfig, SelectorSource};
///
/// let raw: SelectorOptionsConfig = serde_json::from_str(
///     r#"{"values": {"": ".default", "ON": {"show": ".on"}}, "parent_selector": ".form-group"}"#,
/// )?;
/// let options = raw.validate("province")?;
/// assert!(matches!(options.source, SelectorSource::Values(_)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorOptionsConfig {
    /// Rule driven by truthiness
    pub selector: Option<ToggleSpec>,
    /// Rules per discrete value
    pub values: Option<ValueMap>,
    /// Parent selector
    pub parent_selector: Option<String>,
    /// Whether the parent selector is optional
    pub parent_selector_optional: Option<bool>,
    /// Container selector
    pub container_selector: Option<String>,
}

impl SelectorOptionsConfig {
    /// Check that exactly one selector source is present
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingSelector`] when neither `selector` nor
    /// `values` is set, and [`WidgetError::ConflictingSelector`] when both are.
    pub fn validate(self, input: &str) -> Result<SelectorOptions, WidgetError> {
        let source = match (self.selector, self.values) {
            (Some(spec), None) => SelectorSource::Selector(spec),
            (None, Some(values)) => SelectorSource::Values(values),
            (None, None) => {
                tracing::error!(input, "toggle input has no selector");
                return Err(WidgetError::MissingSelector {
                    input: input.to_string(),
                });
            }
            (Some(_), Some(_)) => {
                tracing::error!(input, "toggle input has both selector and values");
                return Err(WidgetError::ConflictingSelector {
                    input: input.to_string(),
                });
            }
        };

        Ok(SelectorOptions {
            source,
            parent_selector: self.parent_selector,
            parent_selector_optional: self.parent_selector_optional,
            container_selector: self.container_selector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_value() {
        assert_eq!(sanitize_value("ON"), "ON");
        assert_eq!(sanitize_value("North York"), "NorthYork");
        assert_eq!(sanitize_value(""), "empty-string");
        assert_eq!(sanitize_value("   "), "empty-string");
    }

    #[test]
    fn test_value_map_preserves_order_and_replaces_in_place() {
        let mut map = ValueMap::new().with("b", ".b").with("a", ".a");
        map.insert("b", ToggleSpec::pair(".x", ".y"));

        let values: Vec<_> = map.iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["b", "a"]);
        assert_eq!(map.get("b"), Some(&ToggleSpec::pair(".x", ".y")));
    }

    #[test]
    fn test_deserialize_value_map_keeps_document_order() {
        let map: ValueMap = serde_json::from_str(r#"{"z": ".z", "": ".none", "a": {"hide": ".h"}}"#).unwrap();
        let values: Vec<_> = map.iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["z", "", "a"]);
        assert_eq!(
            map.get("a"),
            Some(&ToggleSpec::Pair {
                hide: Some(".h".into()),
                show: None
            })
        );
    }

    #[test]
    fn test_validate_requires_a_source() {
        let err = SelectorOptionsConfig::default().validate("has_fee").unwrap_err();
        assert!(matches!(err, WidgetError::MissingSelector { ref input } if input == "has_fee"));
    }

    #[test]
    fn test_validate_rejects_both_sources() {
        let raw = SelectorOptionsConfig {
            selector: Some(".a".into()),
            values: Some(ValueMap::new().with("1", ".b")),
            ..SelectorOptionsConfig::default()
        };
        assert!(matches!(
            raw.validate("x").unwrap_err(),
            WidgetError::ConflictingSelector { .. }
        ));
    }

    #[test]
    fn test_validate_copies_scope_settings() {
        let raw: SelectorOptionsConfig = serde_json::from_str(
            r##"{"selector": ".fee", "parent_selector": ".form-group", "parent_selector_optional": true, "container_selector": "#fees"}"##,
        )
        .unwrap();
        let options = raw.validate("has_fee").unwrap();

        assert_eq!(options.source, SelectorSource::Selector(".fee".into()));
        let shared = options.shared_attributes();
        assert_eq!(shared.get("class"), Some(TOGGLE_INPUT_CLASS));
        assert_eq!(shared.get("data-parent-selector"), Some(".form-group"));
        assert_eq!(shared.get("data-parent-selector-optional"), Some("1"));
        assert_eq!(shared.get("data-container-selector"), Some("#fees"));
    }
}
