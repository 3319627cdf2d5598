//! In-place widgets and their option menus
//!
//! An in-place widget is a link that, when clicked, pops up a hidden menu of
//! options identified by the widget type. Picking an option either fires an
//! AJAX request or follows a plain link.

use askama::Template;

use super::{
    options_menu_id, AjaxData, DataValue, Widgets, IN_PLACE_OPTIONS_CLASS, IN_PLACE_OPTION_CLASS,
    IN_PLACE_WIDGET_CLASS,
};
use crate::attributes::AttributeSet;
use crate::error::WidgetError;
use crate::html::{self, Content};
use crate::routing::{Route, UrlResolver, UrlTarget};

/// One entry of an in-place option menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOption {
    /// Value sent when chosen
    pub value: String,
    /// Display text
    pub text: String,
    /// Id (without `#`) of a dialog shown before submitting
    pub dialog: Option<String>,
}

impl WidgetOption {
    /// Create an option
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            dialog: None,
        }
    }

    /// Show a dialog before submitting (AJAX menus only)
    #[must_use]
    pub fn dialog(mut self, id: impl Into<String>) -> Self {
        self.dialog = Some(id.into());
        self
    }
}

/// How menu options submit their value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionMode {
    /// AJAX request to the widget's `data-url`
    Ajax,
    /// Plain link to this route with the value as a parameter
    Link(Route),
}

/// Settings shared by all options of one menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InPlaceOptionsData {
    /// Widget type, matching the `type` data of the widgets using this menu
    pub widget_type: String,
    /// Name of the parameter carrying the chosen value
    pub url_param: String,
    /// Submission mode
    pub mode: OptionMode,
    /// Confirmation prompt shown before submitting
    pub confirm: Option<String>,
}

impl InPlaceOptionsData {
    /// Menu whose options submit via AJAX
    #[must_use]
    pub fn ajax(widget_type: impl Into<String>, url_param: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            url_param: url_param.into(),
            mode: OptionMode::Ajax,
            confirm: None,
        }
    }

    /// Menu whose options are plain links to `route`
    #[must_use]
    pub fn link(widget_type: impl Into<String>, url_param: impl Into<String>, route: Route) -> Self {
        Self {
            mode: OptionMode::Link(route),
            ..Self::ajax(widget_type, url_param)
        }
    }

    /// Ask for confirmation before submitting
    #[must_use]
    pub fn confirm(mut self, message: impl Into<String>) -> Self {
        self.confirm = Some(message.into());
        self
    }
}

/// One entry of a "more" actions menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoreAction {
    /// Link text
    pub name: String,
    /// What the entry does
    pub kind: MoreActionKind,
}

/// What a "more" menu entry does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoreActionKind {
    /// AJAX link
    Ajax(AjaxData),
    /// Ordinary navigation, or a form post when `post` is set
    Link {
        /// Destination
        url: UrlTarget,
        /// Confirmation prompt
        confirm: Option<String>,
        /// Submit as POST through a hidden form
        post: bool,
    },
}

impl MoreAction {
    /// AJAX link entry
    #[must_use]
    pub fn ajax(name: impl Into<String>, data: AjaxData) -> Self {
        Self {
            name: name.into(),
            kind: MoreActionKind::Ajax(data),
        }
    }

    /// Plain link entry
    #[must_use]
    pub fn link(name: impl Into<String>, url: impl Into<UrlTarget>) -> Self {
        Self {
            name: name.into(),
            kind: MoreActionKind::Link {
                url: url.into(),
                confirm: None,
                post: false,
            },
        }
    }

    /// Entry that posts to `url`
    #[must_use]
    pub fn post(name: impl Into<String>, url: impl Into<UrlTarget>) -> Self {
        let mut action = Self::link(name, url);
        if let MoreActionKind::Link { ref mut post, .. } = action.kind {
            *post = true;
        }
        action
    }

    /// Ask for confirmation first (ignored for AJAX entries)
    #[must_use]
    pub fn confirm(mut self, message: impl Into<String>) -> Self {
        if let MoreActionKind::Link { ref mut confirm, .. } = self.kind {
            *confirm = Some(message.into());
        }
        self
    }
}

struct MenuItem {
    attrs: String,
    content: String,
}

impl MenuItem {
    const fn plain(content: String) -> Self {
        Self {
            attrs: String::new(),
            content,
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<div{{ attrs|safe }}>{% if !prompt.is_empty() %}<div>{{ prompt }}</div>{% endif %}{% for item in items %}<div{{ item.attrs|safe }}>{{ item.content|safe }}</div>{% endfor %}</div>"#,
    ext = "html"
)]
struct OptionsMenu {
    attrs: String,
    prompt: String,
    items: Vec<MenuItem>,
}

#[derive(Template)]
#[template(
    source = r##"<span{{ span_attrs|safe }}><a href="#">{{ label|safe }}</a></span>{{ menu|safe }}"##,
    ext = "html"
)]
struct MoreWidget {
    span_attrs: String,
    label: String,
    menu: String,
}

fn form_name(widget_type: &str, index: usize) -> String {
    let safe: String = widget_type
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("post_{safe}_{index}")
}

/// Link submitting a hidden POST form
fn post_link(text: &str, action: &str, confirm: Option<&str>, form: &str) -> String {
    let form_attrs = AttributeSet::new()
        .with("name", form)
        .with("style", "display:none;")
        .with("method", "post")
        .with("action", action);
    let method = html::void_tag(
        "input",
        &AttributeSet::new()
            .with("type", "hidden")
            .with("name", "_method")
            .with("value", "POST"),
    );

    let submit = format!("document.{form}.submit();");
    let mut link_attrs = AttributeSet::new();
    let onclick = match confirm {
        Some(message) => {
            link_attrs.data("confirm", message);
            format!("if (confirm(this.dataset.confirm)) {{ {submit} }} event.returnValue = false; return false;")
        }
        None => format!("{submit} event.returnValue = false; return false;"),
    };
    link_attrs.set("onclick", onclick);

    let mut out = html::tag("form", Content::Markup(&method), &form_attrs);
    out.push_str(&html::link(Content::Text(text), "#", &link_attrs));
    out
}

impl<R: UrlResolver> Widgets<'_, R> {
    /// Link that opens an in-place option menu
    ///
    /// `data` must hold `url` and normally `type`. When the url is a route,
    /// `ajax_params` are added to it for the AJAX request only; the link's
    /// own `href` keeps the plain route.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingData`] without a `url` entry and
    /// propagates router errors.
    pub fn in_place_widget(
        &self,
        text: &str,
        data: &AjaxData,
        attrs: &AttributeSet,
        dropdown_icon: bool,
        ajax_params: Option<&[(String, String)]>,
    ) -> Result<String, WidgetError> {
        let href = data.require_url("in_place_widget")?.render(&self.router)?;

        let mut attrs = attrs.clone();
        attrs.add_class(IN_PLACE_WIDGET_CLASS);
        for (key, value) in data.iter() {
            let rendered = match (key, value, ajax_params) {
                ("url", DataValue::Url(UrlTarget::Route(route)), Some(extra)) => {
                    self.router.url(&route.with_extra(extra))?
                }
                _ => value.render(&self.router)?,
            };
            attrs.data(key, rendered);
        }

        let label = self.label_with_icon(text, dropdown_icon);
        let link_attrs = AttributeSet::new().with("class", self.config.classes.icon_link.as_str());
        let link = html::link(Content::Markup(&label), &href, &link_attrs);
        Ok(html::tag("span", Content::Markup(&link), &attrs))
    }

    /// Hidden menu of options shared by in-place widgets of one type
    ///
    /// # Errors
    ///
    /// Propagates router errors for link menus and template errors.
    pub fn in_place_widget_options(
        &self,
        options: &[WidgetOption],
        data: &InPlaceOptionsData,
        prompt: Option<&str>,
    ) -> Result<String, WidgetError> {
        let mut attrs = AttributeSet::new()
            .with("id", options_menu_id(&data.widget_type))
            .with("class", IN_PLACE_OPTIONS_CLASS)
            .with("data-param", data.url_param.as_str());
        if let Some(ref confirm) = data.confirm {
            attrs.data("confirm", confirm.as_str());
        }
        attrs.set("style", "display: none;");

        let items = options
            .iter()
            .map(|option| self.menu_option(option, data))
            .collect::<Result<Vec<_>, _>>()?;

        let menu = OptionsMenu {
            attrs: attrs.to_html(),
            prompt: prompt.unwrap_or_default().to_string(),
            items,
        };
        Ok(menu.render()?)
    }

    fn menu_option(
        &self,
        option: &WidgetOption,
        data: &InPlaceOptionsData,
    ) -> Result<MenuItem, WidgetError> {
        match data.mode {
            OptionMode::Ajax => {
                let mut attrs = AttributeSet::new()
                    .with(
                        "id",
                        format!("zuluru_in_place_widget_{}_option_{}", data.widget_type, option.value),
                    )
                    .with("class", IN_PLACE_OPTION_CLASS)
                    .with("data-value", option.value.as_str());
                if let Some(ref dialog) = option.dialog {
                    attrs.data("dialog", dialog.as_str());
                }
                Ok(MenuItem {
                    attrs: attrs.to_html(),
                    content: html::escape_html(&option.text),
                })
            }
            OptionMode::Link(ref route) => {
                let route = route.clone().param(data.url_param.as_str(), option.value.as_str());
                let href = self.router.url(&route)?;
                Ok(MenuItem::plain(html::link(
                    Content::Text(&option.text),
                    &href,
                    &AttributeSet::new(),
                )))
            }
        }
    }

    /// Drop-down menu of additional actions
    ///
    /// Renders nothing when there are no actions. `text` defaults to the
    /// configured "more" label.
    ///
    /// # Errors
    ///
    /// Propagates errors from AJAX entries, router errors and template errors.
    pub fn more_widget(
        &self,
        widget_type: &str,
        actions: &[MoreAction],
        text: Option<&str>,
        attrs: &AttributeSet,
        dropdown_icon: bool,
    ) -> Result<String, WidgetError> {
        if actions.is_empty() {
            return Ok(String::new());
        }

        let mut span_attrs = attrs.clone();
        span_attrs.add_class(IN_PLACE_WIDGET_CLASS).data("type", widget_type);

        let text = text
            .filter(|t| !t.is_empty())
            .unwrap_or(self.config.labels.more.as_str());

        let items = actions
            .iter()
            .enumerate()
            .map(|(index, action)| self.more_item(widget_type, index, action).map(MenuItem::plain))
            .collect::<Result<Vec<_>, _>>()?;

        let menu_attrs = AttributeSet::new()
            .with("id", options_menu_id(widget_type))
            .with("class", IN_PLACE_OPTIONS_CLASS)
            .with("style", "display: none;");
        let menu = OptionsMenu {
            attrs: menu_attrs.to_html(),
            prompt: String::new(),
            items,
        }
        .render()?;

        let widget = MoreWidget {
            span_attrs: span_attrs.to_html(),
            label: self.label_with_icon(text, dropdown_icon),
            menu,
        };
        tracing::debug!(widget_type, actions = actions.len(), "rendered more widget");
        Ok(widget.render()?)
    }

    fn more_item(&self, widget_type: &str, index: usize, action: &MoreAction) -> Result<String, WidgetError> {
        match action.kind {
            MoreActionKind::Ajax(ref data) => self.ajax_link(&action.name, data, &AttributeSet::new()),
            MoreActionKind::Link {
                ref url,
                ref confirm,
                post,
            } => {
                let href = self.resolve(url)?;
                if post {
                    return Ok(post_link(
                        &action.name,
                        &href,
                        confirm.as_deref(),
                        &form_name(widget_type, index),
                    ));
                }
                let mut attrs = AttributeSet::new();
                if let Some(ref message) = confirm {
                    attrs.data("confirm", message.as_str());
                }
                Ok(html::link(Content::Text(&action.name), &href, &attrs))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::routing::RouteTable;

    fn routes() -> RouteTable {
        RouteTable::new()
            .route("games.attendance", "/games/{game}/attendance")
            .route("people.edit", "/people/{person}/edit")
            .route("people.delete", "/people/{person}/delete")
    }

    #[test]
    fn test_in_place_widget() {
        let config = WidgetConfig::default();
        let routes = routes();
        let widgets = Widgets::new(&config, &routes);

        let data = AjaxData::new()
            .with("type", "attendance")
            .with("url", Route::new("games.attendance").param("game", "5"))
            .with("valid-options", vec!["1".to_string(), "3".to_string()]);
        let extra = vec![("person".to_string(), "12".to_string())];
        let html = widgets
            .in_place_widget("Attending", &data, &AttributeSet::new(), true, Some(&extra))
            .unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<span class="zuluru_in_place_widget" data-type="attendance" "#,
                r##"data-url="/games/5/attendance?person=12" data-valid-options="#1#3#">"##,
                r#"<a href="/games/5/attendance" class="icon">Attending"#,
                r#"<img src="/img/dropdown.png" alt="dropdown" class="icon"></a></span>"#
            )
        );
    }

    #[test]
    fn test_in_place_widget_without_icon() {
        let config = WidgetConfig::default();
        let routes = routes();
        let data = AjaxData::new().with("url", "/custom");
        let html = Widgets::new(&config, &routes)
            .in_place_widget("Pick", &data, &AttributeSet::new(), false, None)
            .unwrap();
        assert!(html.contains(r#"<a href="/custom" class="icon">Pick</a>"#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_in_place_widget_requires_url() {
        let config = WidgetConfig::default();
        let routes = routes();
        let err = Widgets::new(&config, &routes)
            .in_place_widget("Pick", &AjaxData::new(), &AttributeSet::new(), true, None)
            .unwrap_err();
        assert!(matches!(err, WidgetError::MissingData { widget: "in_place_widget", key: "url" }));
    }

    #[test]
    fn test_ajax_options_menu() {
        let config = WidgetConfig::default();
        let routes = routes();
        let options = [
            WidgetOption::new("1", "Attending"),
            WidgetOption::new("2", "Absent").dialog("absence_reason"),
        ];
        let data = InPlaceOptionsData::ajax("attendance", "status").confirm("Really change");

        let html = Widgets::new(&config, &routes)
            .in_place_widget_options(&options, &data, Some("Change to"))
            .unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<div id="zuluru_in_place_widget_attendance_options" class="zuluru_in_place_widget_options" "#,
                r#"data-param="status" data-confirm="Really change" style="display: none;">"#,
                r#"<div>Change to</div>"#,
                r#"<div id="zuluru_in_place_widget_attendance_option_1" class="zuluru_in_place_widget_option" data-value="1">Attending</div>"#,
                r#"<div id="zuluru_in_place_widget_attendance_option_2" class="zuluru_in_place_widget_option" data-value="2" data-dialog="absence_reason">Absent</div>"#,
                r#"</div>"#
            )
        );
    }

    #[test]
    fn test_link_options_menu() {
        let config = WidgetConfig::default();
        let routes = routes();
        let data = InPlaceOptionsData::link("role", "role", Route::new("people.edit").param("person", "4"));

        let html = Widgets::new(&config, &routes)
            .in_place_widget_options(&[WidgetOption::new("captain", "Captain")], &data, None)
            .unwrap();

        assert!(html.contains(r#"<div><a href="/people/4/edit?role=captain">Captain</a></div>"#));
        assert!(!html.contains("data-confirm"));
    }

    #[test]
    fn test_more_widget_empty() {
        let config = WidgetConfig::default();
        let routes = routes();
        let html = Widgets::new(&config, &routes)
            .more_widget("person_4", &[], None, &AttributeSet::new(), true)
            .unwrap();
        assert!(html.is_empty());
    }

    #[test]
    fn test_more_widget() {
        let config = WidgetConfig::default();
        let routes = routes();
        let actions = [
            MoreAction::link("Edit", Route::new("people.edit").param("person", "4")),
            MoreAction::post("Delete", Route::new("people.delete").param("person", "4")).confirm("Sure"),
            MoreAction::ajax("Note", AjaxData::new().with("url", "/notes/add")),
        ];

        let html = Widgets::new(&config, &routes)
            .more_widget("person_4", &actions, None, &AttributeSet::new(), false)
            .unwrap();

        assert!(html.starts_with(
            r##"<span class="zuluru_in_place_widget" data-type="person_4"><a href="#">More</a></span>"##
        ));
        assert!(html.contains(
            r#"<div id="zuluru_in_place_widget_person_4_options" class="zuluru_in_place_widget_options" style="display: none;">"#
        ));
        assert!(html.contains(r#"<div><a href="/people/4/edit">Edit</a></div>"#));
        assert!(html.contains(r#"<form name="post_person_4_1" style="display:none;" method="post" action="/people/4/delete">"#));
        assert!(html.contains(r#"data-confirm="Sure""#));
        assert!(html.contains(r#"<a href="/notes/add" class="zuluru_ajax_link" data-url="/notes/add">Note</a>"#));
    }

    #[test]
    fn test_more_widget_label_from_config() {
        let mut config = WidgetConfig::default();
        config.labels.more = "Plus".into();
        let routes = routes();
        let html = Widgets::new(&config, &routes)
            .more_widget("x", &[MoreAction::link("A", "/a")], Some(""), &AttributeSet::new(), true)
            .unwrap();
        assert!(html.contains(r##"<a href="#">Plus<img src="/img/dropdown.png""##));
    }

    #[test]
    fn test_form_name_is_identifier_safe() {
        assert_eq!(form_name("team-7 roster", 2), "post_team_7_roster_2");
    }
}
