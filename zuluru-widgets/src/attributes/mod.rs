//! Ordered HTML attribute sets
//!
//! Every helper in this crate produces an [`AttributeSet`]: an ordered list of
//! attribute name/value pairs that is later written onto a rendered control.
//! Names are unique within a set. Setting a name that already exists replaces
//! its value in place, except for `class`, which accumulates.
//!
//! The named setters cover the attribute contract understood by `zuluru.js`,
//! so callers never have to spell `data-*` keys by hand.
//!
//! ```rust
//! use zuluru_widgets::attributes::AttributeSet;
//!
//! let mut attrs = AttributeSet::new();
//! attrs.add_class("btn");
//! attrs.add_class("zuluru_toggle_link");
//! attrs.selector(".details");
//!
//! assert_eq!(attrs.get("class"), Some("btn zuluru_toggle_link"));
//! assert_eq!(attrs.to_html(), r#" class="btn zuluru_toggle_link" data-selector=".details""#);
//! ```

use crate::html;

/// Which half of a hide/show pair a per-value selector belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorRole {
    /// Selector toggled purely by truthiness
    Toggle,
    /// Selector hidden first
    Hide,
    /// Selector shown after hiding
    Show,
}

impl SelectorRole {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Toggle => "",
            Self::Hide => "-hide",
            Self::Show => "-show",
        }
    }
}

/// Ordered collection of HTML attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    attrs: Vec<(String, String)>,
}

impl AttributeSet {
    /// Create an empty attribute set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value for the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Builder-style variant of [`AttributeSet::set`]
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute only if it is not already present
    pub fn set_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self.contains(&name) {
            self.attrs.push((name, value.into()));
        }
        self
    }

    /// Get an attribute value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    /// Remove an attribute, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(index).1)
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate over attribute name/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Iterate over attribute names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|(n, _)| n.as_str())
    }

    /// Append one or more space-separated classes to the `class` attribute
    ///
    /// Classes already present are not repeated.
    pub fn add_class(&mut self, classes: &str) -> &mut Self {
        let mut current: Vec<String> = self
            .get("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        for class in classes.split_whitespace() {
            if !current.iter().any(|c| c == class) {
                current.push(class.to_string());
            }
        }
        self.set("class", current.join(" "))
    }

    /// Copy every attribute of `other` into this set, `other` winning on conflict
    ///
    /// Classes are accumulated rather than replaced.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        for (name, value) in other.iter() {
            if name == "class" {
                self.add_class(value);
            } else {
                self.set(name, value);
            }
        }
        self
    }

    /// Copy attributes of `other` that this set does not already have
    ///
    /// Classes are still accumulated.
    pub fn merge_missing(&mut self, other: &Self) -> &mut Self {
        for (name, value) in other.iter() {
            if name == "class" {
                self.add_class(value);
            } else {
                self.set_if_absent(name, value);
            }
        }
        self
    }

    // =========================================================================
    // zuluru.js attribute contract
    // =========================================================================

    /// Set `data-<key>`
    pub fn data(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.set(format!("data-{key}"), value)
    }

    /// Set `data-selector`
    pub fn selector(&mut self, selector: impl Into<String>) -> &mut Self {
        self.set("data-selector", selector)
    }

    /// Set `data-selector-hide`
    pub fn selector_hide(&mut self, selector: impl Into<String>) -> &mut Self {
        self.set("data-selector-hide", selector)
    }

    /// Set `data-selector-show`
    pub fn selector_show(&mut self, selector: impl Into<String>) -> &mut Self {
        self.set("data-selector-show", selector)
    }

    /// Set `data-selector-<segment>[-hide|-show]` for one sanitized value segment
    pub fn value_selector(
        &mut self,
        segment: &str,
        role: SelectorRole,
        selector: impl Into<String>,
    ) -> &mut Self {
        self.set(value_selector_key(segment, role), selector)
    }

    /// Set `data-values`, the space-joined list of value segments
    pub fn values<I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.set("data-values", joined)
    }

    /// Set `data-parent-selector`
    pub fn parent_selector(&mut self, selector: impl Into<String>) -> &mut Self {
        self.set("data-parent-selector", selector)
    }

    /// Set `data-parent-selector-optional`
    pub fn parent_selector_optional(&mut self, optional: bool) -> &mut Self {
        self.set("data-parent-selector-optional", if optional { "1" } else { "0" })
    }

    /// Set `data-container-selector`
    pub fn container_selector(&mut self, selector: impl Into<String>) -> &mut Self {
        self.set("data-container-selector", selector)
    }

    /// Set `data-show-text`
    pub fn show_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.set("data-show-text", text)
    }

    /// Set `data-hide-text`
    pub fn hide_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.set("data-hide-text", text)
    }

    /// Render as ` name="value"` pairs, escaped for use inside a tag
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.attrs.len() * 24);
        for (name, value) in &self.attrs {
            html::write_attr(&mut out, name, value);
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.set(name, value);
        }
        set
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for AttributeSet {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

/// Build the attribute name for a per-value selector
#[must_use]
pub fn value_selector_key(segment: &str, role: SelectorRole) -> String {
    format!("data-selector-{segment}{}", role.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = AttributeSet::new();
        attrs.set("id", "a").set("name", "b").set("id", "c");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("id"), Some("c"));
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn test_add_class_accumulates_without_duplicates() {
        let mut attrs = AttributeSet::new().with("class", "btn");
        attrs.add_class("btn-success zuluru_ajax_button");
        attrs.add_class("btn");

        assert_eq!(attrs.get("class"), Some("btn btn-success zuluru_ajax_button"));
    }

    #[test]
    fn test_merge_overwrites_and_merge_missing_keeps() {
        let base = AttributeSet::new().with("value", "ON").with("class", "a");
        let extra = AttributeSet::new().with("value", "QC").with("class", "b");

        let mut merged = base.clone();
        merged.merge(&extra);
        assert_eq!(merged.get("value"), Some("QC"));
        assert_eq!(merged.get("class"), Some("a b"));

        let mut kept = base;
        kept.merge_missing(&extra);
        assert_eq!(kept.get("value"), Some("ON"));
        assert_eq!(kept.get("class"), Some("a b"));
    }

    #[test]
    fn test_value_selector_keys() {
        assert_eq!(value_selector_key("ON", SelectorRole::Toggle), "data-selector-ON");
        assert_eq!(value_selector_key("ON", SelectorRole::Hide), "data-selector-ON-hide");
        assert_eq!(value_selector_key("ON", SelectorRole::Show), "data-selector-ON-show");
    }

    #[test]
    fn test_values_joined_with_spaces() {
        let mut attrs = AttributeSet::new();
        attrs.values(["empty-string", "ON"]);
        assert_eq!(attrs.get("data-values"), Some("empty-string ON"));
    }

    #[test]
    fn test_parent_selector_optional_flag() {
        let mut attrs = AttributeSet::new();
        attrs.parent_selector_optional(true);
        assert_eq!(attrs.get("data-parent-selector-optional"), Some("1"));
        attrs.parent_selector_optional(false);
        assert_eq!(attrs.get("data-parent-selector-optional"), Some("0"));
    }

    #[test]
    fn test_to_html_escapes_values() {
        let attrs = AttributeSet::new().with("data-confirm", r#"Really "delete" <this>?"#);
        assert_eq!(
            attrs.to_html(),
            r#" data-confirm="Really &quot;delete&quot; &lt;this&gt;?""#
        );
    }

    #[test]
    fn test_remove() {
        let mut attrs: AttributeSet = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(attrs.remove("a").as_deref(), Some("1"));
        assert!(!attrs.contains("a"));
        assert_eq!(attrs.remove("missing"), None);
    }
}
