//! Toggle inputs, toggle links and select-all links

use super::{Widgets, SELECT_ALL_CLASS};
use crate::attributes::AttributeSet;
use crate::config::LabelSettings;
use crate::error::WidgetError;
use crate::forms::{FormField, FormRenderer};
use crate::html::{self, Content};
use crate::routing::UrlResolver;
use crate::toggle::{
    compute_toggle_attributes, compute_toggle_link_attributes, toggle_link_pair_attributes,
    InputDescriptor, SelectorOptions, SelectorOptionsConfig, ToggleSpec, ToggleText,
};

impl<R: UrlResolver> Widgets<'_, R> {
    /// Form input that shows and hides other elements as its value changes
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingOptions`] for a per-value toggle on a
    /// checkbox or radio group without options.
    pub fn toggle_input(
        &self,
        mut field: FormField,
        selector_options: &SelectorOptions,
    ) -> Result<String, WidgetError> {
        let input = InputDescriptor::from_field(&field);
        compute_toggle_attributes(&input, selector_options)?.apply_to(&mut field);
        Ok(FormRenderer::render(&field))
    }

    /// [`Widgets::toggle_input`] with options read from configuration
    ///
    /// # Errors
    ///
    /// Also returns [`WidgetError::MissingSelector`] or
    /// [`WidgetError::ConflictingSelector`] when the configuration does not
    /// name exactly one selector source.
    pub fn toggle_input_from_config(
        &self,
        field: FormField,
        selector_options: SelectorOptionsConfig,
    ) -> Result<String, WidgetError> {
        let options = selector_options.validate(&field.name)?;
        self.toggle_input(field, &options)
    }

    /// Link that shows and hides other elements when clicked
    ///
    /// With `toggle_text`, the link reads "Hide <text>" and swaps to
    /// "Show <text>" once the target is hidden, using the configured label
    /// templates. `target` defaults to `#`.
    #[must_use]
    pub fn toggle_link(
        &self,
        text: &str,
        selector: &ToggleSpec,
        attrs: &AttributeSet,
        toggle_text: bool,
        target: Option<&str>,
    ) -> String {
        let labels = if toggle_text {
            ToggleText::new(
                LabelSettings::format(&self.config.labels.show, text),
                LabelSettings::format(&self.config.labels.hide, text),
            )
        } else {
            ToggleText::disabled()
        };

        let mut attrs = attrs.clone();
        attrs.merge(&compute_toggle_link_attributes(selector, &labels));
        html::link(
            Content::Text(labels.initial_text(text)),
            target.unwrap_or("#"),
            &attrs,
        )
    }

    /// Two links, each hiding the elements of its own class and showing the other's
    #[must_use]
    pub fn toggle_link_pair(
        &self,
        a_text: &str,
        a_class: &str,
        b_text: &str,
        b_class: &str,
        attrs: &AttributeSet,
    ) -> String {
        let [a, b] = toggle_link_pair_attributes(a_class, b_class, attrs);
        let mut out = html::link(Content::Text(a_text), "#", &a);
        out.push_str(&html::link(Content::Text(b_text), "#", &b));
        out
    }

    /// Link that checks or unchecks every checkbox matching `selector`
    #[must_use]
    pub fn select_all(&self, selector: &str, text: Option<&str>) -> String {
        let labels = &self.config.labels;
        let (select, unselect) = match text.filter(|t| !t.is_empty()) {
            Some(text) => (
                LabelSettings::format(&labels.select_all_named, text),
                LabelSettings::format(&labels.unselect_all_named, text),
            ),
            None => (labels.select_all.clone(), labels.unselect_all.clone()),
        };

        let attrs = AttributeSet::new()
            .with("class", SELECT_ALL_CLASS)
            .with("data-select-text", select.as_str())
            .with("data-unselect-text", unselect)
            .with("data-selector", selector);
        html::link(Content::Text(&select), "#", &attrs)
    }
}
