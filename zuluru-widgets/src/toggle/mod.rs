//! Visibility toggles
//!
//! A toggle input or link shows and hides other parts of the page. The
//! client script reads the rules from `data-*` attributes; this module
//! decides which attributes go where:
//!
//! - a `selector` rule puts `data-selector` (or `-hide`/`-show`) on the control
//! - a `values` rule on a checkbox group puts each option's own selectors on
//!   that option
//! - a `values` rule on anything else writes one
//!   `data-selector-<value>[-hide|-show]` key per value plus `data-values`,
//!   onto the control or, for radio groups, onto every radio button
//!
//! ```rust
//! use zuluru_widgets::toggle::{
//!     compute_toggle_attributes, InputDescriptor, InputKind, SelectorOptions, ValueMap,
//! };
//! use zuluru_widgets::forms::SelectOption;
//!
//! let input = InputDescriptor::new("provinces", InputKind::MultiCheckbox).with_options(vec![
//!     SelectOption::new("ON", "Ontario"),
//!     SelectOption::new("QC", "Quebec"),
//! ]);
//! let values = ValueMap::new().with("ON", ".on").with("QC", ".qc");
//! let attrs = compute_toggle_attributes(&input, &SelectorOptions::values(values))?;
//!
//! assert_eq!(attrs.option("ON").and_then(|a| a.get("data-selector")), Some(".on"));
//! assert_eq!(attrs.option("QC").and_then(|a| a.get("data-selector")), Some(".qc"));
//! # Ok::<(), zuluru_widgets::error::WidgetError>(())
//! ```

mod input;
mod link;
mod selector;

pub use input::{compute_toggle_attributes, InputDescriptor, InputKind, ToggleAttributes};
pub use link::{compute_toggle_link_attributes, toggle_link_pair_attributes, ToggleText};
pub use selector::{
    sanitize_value, SelectorOptions, SelectorOptionsConfig, SelectorSource, ToggleSpec, ValueMap,
    EMPTY_VALUE_SEGMENT,
};

/// Marker class of toggle inputs
pub const TOGGLE_INPUT_CLASS: &str = "zuluru_toggle_input";

/// Marker class of toggle links
pub const TOGGLE_LINK_CLASS: &str = "zuluru_toggle_link";
