//! Toggle attributes for form inputs

use tracing::{debug, error};

use super::selector::{sanitize_value, SelectorOptions, SelectorSource, ToggleSpec, ValueMap};
use super::TOGGLE_INPUT_CLASS;
use crate::attributes::AttributeSet;
use crate::error::WidgetError;
use crate::forms::{FieldKind, FormField, SelectOption};

/// How a toggle input holds its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single checkbox, truthy or falsy
    Boolean,
    /// Several checkboxes sharing one name
    MultiCheckbox,
    /// Radio group
    Radio,
    /// Select dropdown
    Select,
    /// Any other single-valued input
    Generic,
}

impl InputKind {
    /// Lowercase name used in log output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::MultiCheckbox => "multi_checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Generic => "generic",
        }
    }
}

/// The input a toggle is attached to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDescriptor {
    /// Field name
    pub name: String,
    /// Value shape
    pub kind: InputKind,
    /// Options, for kinds that have them
    pub options: Option<Vec<SelectOption>>,
}

impl InputDescriptor {
    /// Describe an input without options
    #[must_use]
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            options: None,
        }
    }

    /// Attach the option list
    #[must_use]
    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Classify a form field
    ///
    /// An option group with no options is described as having none, so a
    /// per-option toggle on it is rejected.
    #[must_use]
    pub fn from_field(field: &FormField) -> Self {
        let kind = match field.kind {
            FieldKind::Checkbox { .. } => InputKind::Boolean,
            FieldKind::CheckboxGroup { .. } => InputKind::MultiCheckbox,
            FieldKind::Radio { .. } => InputKind::Radio,
            FieldKind::Select { .. } => InputKind::Select,
            FieldKind::Input(_) | FieldKind::Textarea { .. } => InputKind::Generic,
        };
        let options = field
            .kind
            .options()
            .filter(|options| !options.is_empty())
            .map(<[SelectOption]>::to_vec);

        Self {
            name: field.name.clone(),
            kind,
            options,
        }
    }

    fn require_options(&self) -> Result<&[SelectOption], WidgetError> {
        self.options.as_deref().ok_or_else(|| {
            error!(input = %self.name, kind = self.kind.as_str(), "per-value toggle without options");
            WidgetError::MissingOptions {
                input: self.name.clone(),
            }
        })
    }
}

/// Attributes computed for a toggle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleAttributes {
    /// Everything goes on the control
    Control(AttributeSet),
    /// The control gets the marker class, each option its own set
    ///
    /// For option groups the renderer writes the control set onto every
    /// radio button or checkbox, under that option's own attributes.
    PerOption {
        /// Attributes for the control itself
        control: AttributeSet,
        /// Options with their computed attributes
        options: Vec<SelectOption>,
    },
}

impl ToggleAttributes {
    /// Attributes for the control
    #[must_use]
    pub const fn control(&self) -> &AttributeSet {
        match self {
            Self::Control(control) | Self::PerOption { control, .. } => control,
        }
    }

    /// Per-option results, if any
    #[must_use]
    pub fn options(&self) -> Option<&[SelectOption]> {
        match self {
            Self::Control(_) => None,
            Self::PerOption { options, .. } => Some(options),
        }
    }

    /// Attributes computed for one option value
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&AttributeSet> {
        self.options()?
            .iter()
            .find(|option| option.value == value)
            .map(|option| &option.attrs)
    }

    /// Write the attributes onto a field
    ///
    /// Control attributes are merged into the field's own; per-option results
    /// replace the field's options.
    pub fn apply_to(self, field: &mut FormField) {
        match self {
            Self::Control(control) => {
                field.attrs.merge(&control);
            }
            Self::PerOption { control, options } => {
                field.attrs.merge(&control);
                if let Some(slot) = field.kind.options_mut() {
                    *slot = options;
                }
            }
        }
    }
}

fn marker_only() -> AttributeSet {
    let mut attrs = AttributeSet::new();
    attrs.add_class(TOGGLE_INPUT_CLASS);
    attrs
}

/// Compute the toggle attributes for an input
///
/// # Errors
///
/// Returns [`WidgetError::MissingOptions`] when a `values` toggle targets a
/// checkbox group or radio group with no options.
///
/// # Example
///
/// ```rust
/// use zuluru_widgets::toggle::{
///     compute_toggle_attributes, InputDescriptor, InputKind, SelectorOptions, ValueMap,
/// };
///
/// let input = InputDescriptor::new("province", InputKind::Select);
/// let values = ValueMap::new().with("", ".none").with("ON", ".ontario");
/// let attrs = compute_toggle_attributes(&input, &SelectorOptions::values(values))?;
///
/// let control = attrs.control();
/// assert_eq!(control.get("data-values"), Some("empty-string ON"));
/// assert_eq!(control.get("data-selector-empty-string"), Some(".none"));
/// assert_eq!(control.get("data-selector-ON"), Some(".ontario"));
/// # Ok::<(), zuluru_widgets::error::WidgetError>(())
/// ```
pub fn compute_toggle_attributes(
    input: &InputDescriptor,
    options: &SelectorOptions,
) -> Result<ToggleAttributes, WidgetError> {
    let shared = options.shared_attributes();

    match &options.source {
        SelectorSource::Selector(spec) => {
            debug!(input = %input.name, kind = input.kind.as_str(), branch = "selector", "computed toggle attributes");
            let mut attrs = shared;
            spec.write(&mut attrs);
            Ok(ToggleAttributes::Control(attrs))
        }
        SelectorSource::Values(values) if input.kind == InputKind::MultiCheckbox => {
            let options = per_checkbox(input.require_options()?, values, &shared);
            debug!(input = %input.name, kind = input.kind.as_str(), branch = "per_checkbox", options = options.len(), "computed toggle attributes");
            Ok(ToggleAttributes::PerOption {
                control: marker_only(),
                options,
            })
        }
        SelectorSource::Values(values) => {
            let mut attrs = shared;
            write_value_selectors(&mut attrs, values);

            if input.kind == InputKind::Radio {
                let options = input
                    .require_options()?
                    .iter()
                    .map(|option| {
                        let mut option = option.clone();
                        option.attrs.merge_missing(&attrs);
                        option
                    })
                    .collect::<Vec<_>>();
                debug!(input = %input.name, kind = input.kind.as_str(), branch = "per_radio", options = options.len(), "computed toggle attributes");
                return Ok(ToggleAttributes::PerOption {
                    control: marker_only(),
                    options,
                });
            }

            debug!(input = %input.name, kind = input.kind.as_str(), branch = "values", values = values.len(), "computed toggle attributes");
            Ok(ToggleAttributes::Control(attrs))
        }
    }
}

fn per_checkbox(
    options: &[SelectOption],
    values: &ValueMap,
    shared: &AttributeSet,
) -> Vec<SelectOption> {
    options
        .iter()
        .map(|option| {
            let mut option = option.clone();
            option.attrs.merge(shared);
            if let Some(spec) = values.get(&option.value) {
                spec.write(&mut option.attrs);
            }
            option
        })
        .collect()
}

fn write_value_selectors(attrs: &mut AttributeSet, values: &ValueMap) {
    let segments: Vec<String> = values
        .iter()
        .map(|(value, spec): (&str, &ToggleSpec)| {
            let segment = sanitize_value(value);
            spec.write_for_value(attrs, &segment);
            segment
        })
        .collect();
    attrs.values(&segments);
}
