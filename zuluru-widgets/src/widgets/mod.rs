//! Widget rendering helpers
//!
//! [`Widgets`] pairs the presentation settings with a URL resolver and
//! renders the fragments the client script binds to: AJAX buttons, inputs and
//! links, autocomplete inputs, in-place option menus, toggle inputs and
//! links, and select-all links.
//!
//! ```rust
//! use zuluru_widgets::config::WidgetConfig;
//! use zuluru_widgets::routing::{Route, RouteTable};
//! use zuluru_widgets::widgets::{AjaxData, Widgets};
//! use zuluru_widgets::attributes::AttributeSet;
//!
//! let config = WidgetConfig::default();
//! let routes = RouteTable::new().route("people.deactivate", "/people/{person}/deactivate");
//! let widgets = Widgets::new(&config, &routes);
//!
//! let data = AjaxData::new().with("url", Route::new("people.deactivate").param("person", "3"));
//! let html = widgets.ajax_link("Deactivate", &data, &AttributeSet::new())?;
//! assert_eq!(
//!     html,
//!     r#"<a href="/people/3/deactivate" class="zuluru_ajax_link" data-url="/people/3/deactivate">Deactivate</a>"#
//! );
//! # Ok::<(), zuluru_widgets::error::WidgetError>(())
//! ```

mod ajax;
mod data;
mod in_place;
mod toggle;

pub use ajax::{AutocompleteAdd, AutocompleteData};
pub use data::{hash_list, AjaxData, DataValue};
pub use in_place::{InPlaceOptionsData, MoreAction, MoreActionKind, OptionMode, WidgetOption};

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::html;
use crate::routing::{UrlResolver, UrlTarget};

/// Marker class of AJAX submit buttons
pub const AJAX_BUTTON_CLASS: &str = "zuluru_ajax_button";

/// Marker class of AJAX inputs
pub const AJAX_INPUT_CLASS: &str = "zuluru_ajax_input";

/// Marker class of AJAX links
pub const AJAX_LINK_CLASS: &str = "zuluru_ajax_link";

/// Marker class of autocomplete inputs
pub const AUTOCOMPLETE_CLASS: &str = "zuluru_autocomplete";

/// Marker class of in-place widgets and "more" menus
pub const IN_PLACE_WIDGET_CLASS: &str = "zuluru_in_place_widget";

/// Marker class of one AJAX option inside an in-place option menu
pub const IN_PLACE_OPTION_CLASS: &str = "zuluru_in_place_widget_option";

/// Marker class of the hidden in-place option menu
pub const IN_PLACE_OPTIONS_CLASS: &str = "zuluru_in_place_widget_options";

/// Marker class of select-all links
pub const SELECT_ALL_CLASS: &str = "zuluru_select_all";

/// Widget renderer
///
/// Cheap to construct; build one per request or share one across handlers.
#[derive(Debug, Clone, Copy)]
pub struct Widgets<'a, R> {
    config: &'a WidgetConfig,
    router: R,
}

impl<'a, R: UrlResolver> Widgets<'a, R> {
    /// Create a renderer from settings and a URL resolver
    pub const fn new(config: &'a WidgetConfig, router: R) -> Self {
        Self { config, router }
    }

    /// Presentation settings
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        self.config
    }

    /// URL resolver
    #[must_use]
    pub const fn router(&self) -> &R {
        &self.router
    }

    fn resolve(&self, target: &UrlTarget) -> Result<String, WidgetError> {
        Ok(self.router.resolve(target)?)
    }

    fn dropdown_icon(&self) -> String {
        html::icon_img(&self.config.icons.dropdown, &self.config.icons.dropdown_alt)
    }

    /// Escaped text, optionally followed by the drop-down icon
    fn label_with_icon(&self, text: &str, dropdown_icon: bool) -> String {
        let mut label = html::escape_html(text);
        if dropdown_icon {
            label.push_str(&self.dropdown_icon());
        }
        label
    }
}

/// Id of the hidden option menu belonging to in-place widgets of one type
#[must_use]
pub fn options_menu_id(widget_type: &str) -> String {
    format!("zuluru_in_place_widget_{widget_type}_options")
}
