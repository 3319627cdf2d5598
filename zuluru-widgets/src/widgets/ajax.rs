//! AJAX buttons, inputs, links and autocomplete inputs

use super::{AjaxData, Widgets, AJAX_BUTTON_CLASS, AJAX_INPUT_CLASS, AJAX_LINK_CLASS, AUTOCOMPLETE_CLASS};
use crate::attributes::AttributeSet;
use crate::error::WidgetError;
use crate::forms::{FormField, FormRenderer, InputType};
use crate::html::{self, Content};
use crate::routing::{UrlResolver, UrlTarget};

/// Wiring for an autocomplete input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteData {
    /// Where suggestions are fetched from
    pub url: UrlTarget,
    /// How a chosen suggestion is handled
    pub disposition: Option<String>,
    /// Where a chosen suggestion is added
    pub add: Option<AutocompleteAdd>,
}

/// Target for adding a chosen suggestion to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteAdd {
    /// URL called with the chosen suggestion
    pub url: UrlTarget,
    /// Element the response is added to
    pub selector: String,
}

impl AutocompleteData {
    /// Suggestions from `url`
    #[must_use]
    pub fn new(url: impl Into<UrlTarget>) -> Self {
        Self {
            url: url.into(),
            disposition: None,
            add: None,
        }
    }

    /// Set the disposition
    #[must_use]
    pub fn disposition(mut self, disposition: impl Into<String>) -> Self {
        self.disposition = Some(disposition.into());
        self
    }

    /// Add chosen suggestions through `url` into `selector`
    #[must_use]
    pub fn add(mut self, url: impl Into<UrlTarget>, selector: impl Into<String>) -> Self {
        self.add = Some(AutocompleteAdd {
            url: url.into(),
            selector: selector.into(),
        });
        self
    }
}

impl<R: UrlResolver> Widgets<'_, R> {
    /// Submit button that sends its form via AJAX
    ///
    /// # Errors
    ///
    /// Propagates router errors from URL-valued data.
    pub fn ajax_button(
        &self,
        text: &str,
        data: &AjaxData,
        attrs: &AttributeSet,
    ) -> Result<String, WidgetError> {
        let mut attrs = attrs.clone();
        attrs
            .add_class(&self.config.classes.ajax_button_style)
            .add_class(AJAX_BUTTON_CLASS);
        data.write_to(&self.router, &mut attrs)?;
        Ok(html::button(text, &attrs))
    }

    /// Form input that fires an AJAX request when its value changes
    ///
    /// Date inputs also get `data-type="date"`.
    ///
    /// # Errors
    ///
    /// Propagates router errors from URL-valued data.
    pub fn ajax_input(&self, mut field: FormField, data: &AjaxData) -> Result<String, WidgetError> {
        field.attrs.add_class(AJAX_INPUT_CLASS);
        data.write_to(&self.router, &mut field.attrs)?;
        if field.input_type().is_some_and(|t| t.is_date()) {
            field.attrs.data("type", "date");
        }
        Ok(FormRenderer::render(&field))
    }

    /// Link that posts to an action URL via AJAX
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingData`] without a `url` entry and
    /// propagates router errors.
    pub fn ajax_link(
        &self,
        text: &str,
        data: &AjaxData,
        attrs: &AttributeSet,
    ) -> Result<String, WidgetError> {
        let href = data.require_url("ajax_link")?.render(&self.router)?;
        let mut attrs = attrs.clone();
        attrs.add_class(AJAX_LINK_CLASS);
        data.write_to(&self.router, &mut attrs)?;
        Ok(html::link(Content::Text(text), &href, &attrs))
    }

    /// Unlabelled text input that fetches suggestions as the user types
    ///
    /// # Errors
    ///
    /// Propagates router errors.
    pub fn autocomplete_input(
        &self,
        name: &str,
        id: &str,
        data: &AutocompleteData,
    ) -> Result<String, WidgetError> {
        let mut field = FormField::input(name, InputType::Text)
            .id(id)
            .attr("autocomplete", "off")
            .class(AUTOCOMPLETE_CLASS)
            .attr("size", self.config.autocomplete.size.to_string());

        field.attrs.data("url", self.resolve(&data.url)?);
        if let Some(ref disposition) = data.disposition {
            field.attrs.data("disposition", disposition.as_str());
        }
        if let Some(ref add) = data.add {
            field.attrs.data("add-url", self.resolve(&add.url)?);
            field.attrs.data("add-selector", add.selector.as_str());
        }

        Ok(FormRenderer::render(&field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::routing::{Route, RouteTable};

    fn routes() -> RouteTable {
        RouteTable::new()
            .route("people.search", "/people/search")
            .route("teams.add_player", "/teams/{team}/add_player")
            .route("games.delete", "/games/{game}/delete")
    }

    #[test]
    fn test_ajax_button() {
        let config = WidgetConfig::default();
        let routes = routes();
        let widgets = Widgets::new(&config, &routes);

        let data = AjaxData::new()
            .with("url", Route::new("people.search"))
            .with("disposition", "replace_content");
        let html = widgets
            .ajax_button("Search", &data, &AttributeSet::new().with("class", "btn"))
            .unwrap();

        assert_eq!(
            html,
            r#"<button type="submit" class="btn btn-success zuluru_ajax_button" data-url="/people/search" data-disposition="replace_content">Search</button>"#
        );
    }

    #[test]
    fn test_ajax_button_style_from_config() {
        let mut config = WidgetConfig::default();
        config.classes.ajax_button_style = "btn-primary".into();
        let routes = routes();
        let html = Widgets::new(&config, &routes)
            .ajax_button("Go", &AjaxData::new(), &AttributeSet::new())
            .unwrap();
        assert!(html.contains(r#"class="btn-primary zuluru_ajax_button""#));
    }

    #[test]
    fn test_ajax_input() {
        let config = WidgetConfig::default();
        let routes = routes();
        let widgets = Widgets::new(&config, &routes);

        let field = FormField::select("division").option("1", "Tier 1");
        let data = AjaxData::new().with("url", "/divisions/select").with("disposition", "replace_content");
        let html = widgets.ajax_input(field, &data).unwrap();

        assert!(html.contains(
            r#"<select name="division" id="division" class="zuluru_ajax_input" data-url="/divisions/select" data-disposition="replace_content">"#
        ));
        assert!(!html.contains("data-type"));
    }

    #[test]
    fn test_ajax_input_date() {
        let config = WidgetConfig::default();
        let routes = routes();
        let field = FormField::input("game_date", InputType::Date);
        let html = Widgets::new(&config, &routes)
            .ajax_input(field, &AjaxData::new().with("url", "/games/slots"))
            .unwrap();
        assert!(html.contains(r#"class="zuluru_ajax_input" data-url="/games/slots" data-type="date""#));
    }

    #[test]
    fn test_ajax_input_radio_group() {
        let config = WidgetConfig::default();
        let routes = routes();
        let field = FormField::radio("status").option("1", "Yes").option("2", "No");
        let html = Widgets::new(&config, &routes)
            .ajax_input(field, &AjaxData::new().with("url", "/games/attendance"))
            .unwrap();

        assert!(html.contains(
            r#"<input type="radio" name="status" id="status-0" value="1" class="zuluru_ajax_input" data-url="/games/attendance">"#
        ));
        assert!(html.contains(
            r#"<input type="radio" name="status" id="status-1" value="2" class="zuluru_ajax_input" data-url="/games/attendance">"#
        ));
    }

    #[test]
    fn test_ajax_input_checkbox_group() {
        let config = WidgetConfig::default();
        let routes = routes();
        let field = FormField::checkbox_group("days").option("1", "Mon").option("2", "Tue");
        let html = Widgets::new(&config, &routes)
            .ajax_input(field, &AjaxData::new().with("url", "/leagues/days"))
            .unwrap();

        let marked: Vec<&str> = html.lines().filter(|line| line.contains("zuluru_ajax_input")).collect();
        assert_eq!(marked.len(), 2);
        assert!(marked.iter().all(|line| line.trim_start().starts_with(r#"<input type="checkbox""#)
            && line.contains(r#"data-url="/leagues/days""#)));
    }

    #[test]
    fn test_ajax_link_requires_url() {
        let config = WidgetConfig::default();
        let routes = routes();
        let err = Widgets::new(&config, &routes)
            .ajax_link("Delete", &AjaxData::new().with("disposition", "remove"), &AttributeSet::new())
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_ajax_link() {
        let config = WidgetConfig::default();
        let routes = routes();
        let data = AjaxData::new()
            .with("url", Route::new("games.delete").param("game", "41"))
            .with("dialog", "confirm_delete");
        let html = Widgets::new(&config, &routes)
            .ajax_link("Delete", &data, &AttributeSet::new())
            .unwrap();
        assert_eq!(
            html,
            r#"<a href="/games/41/delete" class="zuluru_ajax_link" data-url="/games/41/delete" data-dialog="confirm_delete">Delete</a>"#
        );
    }

    #[test]
    fn test_autocomplete_input() {
        let config = WidgetConfig::default();
        let routes = routes();
        let data = AutocompleteData::new(Route::new("people.search"))
            .disposition("append")
            .add(Route::new("teams.add_player").param("team", "9"), "#roster");
        let html = Widgets::new(&config, &routes)
            .autocomplete_input("name", "player_search", &data)
            .unwrap();

        assert_eq!(
            html,
            concat!(
                "<div class=\"form-group\">\n",
                "  <input type=\"text\" name=\"name\" id=\"player_search\" autocomplete=\"off\" ",
                "class=\"zuluru_autocomplete\" size=\"50\" data-url=\"/people/search\" ",
                "data-disposition=\"append\" data-add-url=\"/teams/9/add_player\" data-add-selector=\"#roster\">\n",
                "</div>"
            )
        );
    }

    #[test]
    fn test_autocomplete_input_minimal() {
        let config = WidgetConfig::default();
        let routes = routes();
        let html = Widgets::new(&config, &routes)
            .autocomplete_input("q", "q", &AutocompleteData::new("/search"))
            .unwrap();
        assert!(html.contains(r#"data-url="/search">"#));
        assert!(!html.contains("data-add-url"));
        assert!(!html.contains("<label"));
    }
}
