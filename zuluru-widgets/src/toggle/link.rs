//! Toggle attributes for links

use super::selector::ToggleSpec;
use super::TOGGLE_LINK_CLASS;
use crate::attributes::AttributeSet;

/// Label swapping for a toggle link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleText {
    /// Whether the link text swaps on click
    pub enabled: bool,
    /// Text shown while the target is hidden
    pub show_label: String,
    /// Text shown while the target is visible
    pub hide_label: String,
}

impl ToggleText {
    /// Fixed link text
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Swap between two labels
    #[must_use]
    pub fn new(show_label: impl Into<String>, hide_label: impl Into<String>) -> Self {
        Self {
            enabled: true,
            show_label: show_label.into(),
            hide_label: hide_label.into(),
        }
    }

    /// Text the link is rendered with
    ///
    /// A swapping link starts out with its target shown, so it reads as the
    /// hide label.
    #[must_use]
    pub fn initial_text<'a>(&'a self, text: &'a str) -> &'a str {
        if self.enabled {
            &self.hide_label
        } else {
            text
        }
    }
}

/// Compute the attributes of a toggle link
///
/// ```rust
/// use zuluru_widgets::toggle::{compute_toggle_link_attributes, ToggleSpec, ToggleText};
///
/// let attrs = compute_toggle_link_attributes(
///     &ToggleSpec::from(".rules"),
///     &ToggleText::new("Show rules", "Hide rules"),
/// );
/// assert_eq!(attrs.get("data-selector"), Some(".rules"));
/// assert_eq!(attrs.get("data-hide-text"), Some("Hide rules"));
/// ```
#[must_use]
pub fn compute_toggle_link_attributes(selector: &ToggleSpec, toggle_text: &ToggleText) -> AttributeSet {
    let mut attrs = AttributeSet::new();
    attrs.add_class(TOGGLE_LINK_CLASS);
    selector.write(&mut attrs);
    if toggle_text.enabled {
        attrs
            .show_text(toggle_text.show_label.as_str())
            .hide_text(toggle_text.hide_label.as_str());
    }
    attrs
}

/// Attributes for two links that swap visibility of each other's classes
///
/// Each link carries its own class in place of any class in `base`, hides
/// elements with that class and shows elements with the other one.
#[must_use]
pub fn toggle_link_pair_attributes(a_class: &str, b_class: &str, base: &AttributeSet) -> [AttributeSet; 2] {
    let link = |own: &str, other: &str| {
        let mut attrs = base.clone();
        attrs.set("class", own);
        let spec = ToggleSpec::pair(format!(".{own}"), format!(".{other}"));
        attrs.merge(&compute_toggle_link_attributes(&spec, &ToggleText::disabled()));
        attrs
    };
    [link(a_class, b_class), link(b_class, a_class)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_without_text_swap() {
        let attrs = compute_toggle_link_attributes(&".details".into(), &ToggleText::disabled());
        assert_eq!(attrs.to_html(), r#" class="zuluru_toggle_link" data-selector=".details""#);
    }

    #[test]
    fn test_link_pair_selector() {
        let attrs = compute_toggle_link_attributes(&ToggleSpec::pair(".short", ".long"), &ToggleText::disabled());
        assert_eq!(attrs.get("data-selector-hide"), Some(".short"));
        assert_eq!(attrs.get("data-selector-show"), Some(".long"));
        assert!(!attrs.contains("data-selector"));
    }

    #[test]
    fn test_initial_text() {
        let swap = ToggleText::new("Show", "Hide");
        assert_eq!(swap.initial_text("Rules"), "Hide");
        assert_eq!(ToggleText::disabled().initial_text("Rules"), "Rules");
    }

    #[test]
    fn test_link_pair() {
        let base = AttributeSet::new().with("class", "btn").with("title", "Switch");
        let [a, b] = toggle_link_pair_attributes("a", "b", &base);

        assert_eq!(a.get("class"), Some("a zuluru_toggle_link"));
        assert_eq!(a.get("data-selector-hide"), Some(".a"));
        assert_eq!(a.get("data-selector-show"), Some(".b"));
        assert_eq!(a.get("title"), Some("Switch"));

        assert_eq!(b.get("class"), Some("b zuluru_toggle_link"));
        assert_eq!(b.get("data-selector-hide"), Some(".b"));
        assert_eq!(b.get("data-selector-show"), Some(".a"));
    }
}
