//! zuluru-widgets: view helpers for zuluru.js-driven pages
//!
//! The helpers render ordinary HTML form controls and links annotated with
//! `data-*` attributes and marker classes. A client-side script binds to
//! those markers and turns them into AJAX buttons, inputs and links,
//! in-place option menus and show/hide toggles. Nothing here talks to the
//! network or keeps state between calls; every helper is a string builder.
//!
//! # Quick Start
//!
//! ```rust
//! use zuluru_widgets::prelude::*;
//!
//! let config = WidgetConfig::default();
//! let routes = RouteTable::new();
//! let widgets = Widgets::new(&config, &routes);
//!
//! let html = widgets.toggle_input(
//!     FormField::checkbox("has_fee").label("Charge a fee"),
//!     &SelectorOptions::selector(".fee").parent_selector(".form-group"),
//! )?;
//! assert!(html.contains(r#"data-selector=".fee""#));
//! # Ok::<(), WidgetError>(())
//! ```
//!
//! # Modules
//!
//! - [`toggle`]: which show/hide attributes go on a control or its options
//! - [`widgets`]: the rendering helpers
//! - [`attributes`], [`html`], [`forms`]: attribute sets and markup
//! - [`routing`]: named routes to URLs
//! - [`config`], [`observability`], [`error`]: settings, logging and errors

// Lint configuration is handled at the workspace level in Cargo.toml

pub mod attributes;
pub mod config;
pub mod error;
pub mod forms;
pub mod html;
pub mod observability;
pub mod routing;
pub mod toggle;
pub mod widgets;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use zuluru_widgets::prelude::*;
    //! ```

    // Rendering
    pub use crate::widgets::{
        AjaxData, AutocompleteData, DataValue, InPlaceOptionsData, MoreAction, WidgetOption,
        Widgets,
    };

    // Toggles
    pub use crate::toggle::{
        compute_toggle_attributes, compute_toggle_link_attributes, InputDescriptor, InputKind,
        SelectorOptions, SelectorOptionsConfig, ToggleAttributes, ToggleSpec, ToggleText,
        ValueMap,
    };

    // Forms and markup
    pub use crate::attributes::AttributeSet;
    pub use crate::forms::{FormField, FormRenderer, InputType, SelectOption};

    // Routing
    pub use crate::routing::{Route, RouteTable, UrlResolver, UrlTarget};

    // Configuration and errors
    pub use crate::config::WidgetConfig;
    pub use crate::error::WidgetError;
}
