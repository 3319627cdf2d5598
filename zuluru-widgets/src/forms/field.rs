//! Form field types and input configuration
//!
//! A [`FormField`] describes one control the widget helpers decorate: its
//! name, kind, options and the attributes that end up on the rendered tag.
//! Options carry their own [`AttributeSet`] so that per-option toggle data can
//! be written onto individual `<option>`, radio and checkbox tags.

use crate::attributes::AttributeSet;

/// Field attribute flags
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldFlags {
    /// Whether field is required
    pub required: bool,
    /// Whether field is disabled
    pub disabled: bool,
    /// Autofocus this field
    pub autofocus: bool,
}

/// HTML input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// Text input (default)
    #[default]
    Text,
    /// Email input with validation
    Email,
    /// Password input (masked)
    Password,
    /// Number input
    Number,
    /// Telephone input
    Tel,
    /// URL input
    Url,
    /// Search input
    Search,
    /// Date input
    Date,
    /// Time input
    Time,
    /// Date and time input
    DateTimeLocal,
    /// Hidden input
    Hidden,
}

impl InputType {
    /// Get the HTML type attribute value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTimeLocal => "datetime-local",
            Self::Hidden => "hidden",
        }
    }

    /// Whether the input holds a calendar date
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date | Self::DateTimeLocal)
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One option of a select, radio group or checkbox group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value attribute
    pub value: String,
    /// Display text
    pub label: String,
    /// Whether this option is disabled
    pub disabled: bool,
    /// Attributes written onto this option's tag
    pub attrs: AttributeSet,
}

impl SelectOption {
    /// Create a new option
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            attrs: AttributeSet::new(),
        }
    }

    /// Create a disabled option
    #[must_use]
    pub fn disabled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            disabled: true,
            ..Self::new(value, label)
        }
    }

    /// Add an attribute to this option
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }
}

/// Kind of form field
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Standard input field
    Input(InputType),
    /// Textarea for multi-line text
    Textarea {
        /// Number of visible text lines
        rows: Option<u32>,
    },
    /// Select dropdown
    Select {
        /// Available options
        options: Vec<SelectOption>,
        /// Allow multiple selections
        multiple: bool,
        /// Values currently selected in a multiple select
        selected: Vec<String>,
        /// Label of a leading empty-valued option, if any
        empty: Option<String>,
    },
    /// Single boolean checkbox
    Checkbox {
        /// Whether checkbox is checked
        checked: bool,
    },
    /// Group of checkboxes sharing one name, any number of which may be checked
    CheckboxGroup {
        /// Available options
        options: Vec<SelectOption>,
        /// Values currently checked
        checked: Vec<String>,
    },
    /// Radio button group
    Radio {
        /// Available options
        options: Vec<SelectOption>,
    },
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::Input(InputType::default())
    }
}

impl FieldKind {
    /// Options of multi-valued kinds
    #[must_use]
    pub fn options(&self) -> Option<&[SelectOption]> {
        match self {
            Self::Select { options, .. }
            | Self::CheckboxGroup { options, .. }
            | Self::Radio { options } => Some(options),
            Self::Input(_) | Self::Textarea { .. } | Self::Checkbox { .. } => None,
        }
    }

    /// Mutable options of multi-valued kinds
    pub fn options_mut(&mut self) -> Option<&mut Vec<SelectOption>> {
        match self {
            Self::Select { options, .. }
            | Self::CheckboxGroup { options, .. }
            | Self::Radio { options } => Some(options),
            Self::Input(_) | Self::Textarea { .. } | Self::Checkbox { .. } => None,
        }
    }
}

/// A form field with all its attributes
#[derive(Debug, Clone)]
pub struct FormField {
    /// Field name (used for form submission)
    pub name: String,
    /// Field kind (input, textarea, select, etc.)
    pub kind: FieldKind,
    /// Label text; no label is rendered when unset
    pub label: Option<String>,
    /// Current value
    pub value: Option<String>,
    /// Element ID (defaults to name if not set)
    pub id: Option<String>,
    /// Help text shown below the field
    pub help_text: Option<String>,
    /// Field attribute flags
    pub flags: FieldFlags,
    /// Extra attributes written onto the control
    pub attrs: AttributeSet,
}

impl FormField {
    /// Create a new input field
    #[must_use]
    pub fn input(name: impl Into<String>, input_type: InputType) -> Self {
        Self::new(name, FieldKind::Input(input_type))
    }

    /// Create a new textarea field
    #[must_use]
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Textarea { rows: None })
    }

    /// Create a new select field
    #[must_use]
    pub fn select(name: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldKind::Select {
                options: Vec::new(),
                multiple: false,
                selected: Vec::new(),
                empty: None,
            },
        )
    }

    /// Create a new single checkbox
    #[must_use]
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox { checked: false })
    }

    /// Create a new checkbox group
    #[must_use]
    pub fn checkbox_group(name: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldKind::CheckboxGroup {
                options: Vec::new(),
                checked: Vec::new(),
            },
        )
    }

    /// Create a new radio button group
    #[must_use]
    pub fn radio(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Radio { options: Vec::new() })
    }

    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            value: None,
            id: None,
            help_text: None,
            flags: FieldFlags::default(),
            attrs: AttributeSet::new(),
        }
    }

    /// Set the label
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the current value
    ///
    /// For checkbox groups and multiple selects the value is added to the
    /// checked set.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        match &mut self.kind {
            FieldKind::CheckboxGroup { checked, .. }
            | FieldKind::Select {
                multiple: true,
                selected: checked,
                ..
            } => checked.push(value),
            _ => self.value = Some(value),
        }
        self
    }

    /// Set the element ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set help text
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Mark field as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.flags.required = true;
        self
    }

    /// Mark field as disabled
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.flags.disabled = true;
        self
    }

    /// Autofocus this field
    #[must_use]
    pub const fn autofocus(mut self) -> Self {
        self.flags.autofocus = true;
        self
    }

    /// Add CSS classes
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.add_class(class);
        self
    }

    /// Add a custom attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Add an option (select, radio and checkbox group only)
    #[must_use]
    pub fn option(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.add_option(SelectOption::new(value, label))
    }

    /// Add a pre-built option (select, radio and checkbox group only)
    #[must_use]
    pub fn add_option(mut self, option: SelectOption) -> Self {
        if let Some(options) = self.kind.options_mut() {
            options.push(option);
        }
        self
    }

    /// Lead a select with an empty-valued option
    #[must_use]
    pub fn empty(mut self, label: impl Into<String>) -> Self {
        if let FieldKind::Select { empty, .. } = &mut self.kind {
            *empty = Some(label.into());
        }
        self
    }

    /// Allow multiple selections in a select
    ///
    /// A value set earlier becomes the first selected value.
    #[must_use]
    pub fn multiple(mut self) -> Self {
        if let FieldKind::Select {
            multiple, selected, ..
        } = &mut self.kind
        {
            *multiple = true;
            selected.extend(self.value.take());
        }
        self
    }

    /// Check a single checkbox
    #[must_use]
    pub fn checked(mut self) -> Self {
        if let FieldKind::Checkbox { checked } = &mut self.kind {
            *checked = true;
        }
        self
    }

    /// Set the number of visible textarea rows
    #[must_use]
    pub fn rows(mut self, count: u32) -> Self {
        if let FieldKind::Textarea { rows } = &mut self.kind {
            *rows = Some(count);
        }
        self
    }

    /// Get the effective ID (custom ID or field name)
    #[must_use]
    pub fn effective_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// Input type, if this is a plain input
    #[must_use]
    pub const fn input_type(&self) -> Option<InputType> {
        match self.kind {
            FieldKind::Input(input_type) => Some(input_type),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_as_str() {
        assert_eq!(InputType::Email.as_str(), "email");
        assert_eq!(InputType::DateTimeLocal.as_str(), "datetime-local");
        assert!(InputType::Date.is_date());
        assert!(!InputType::Text.is_date());
    }

    #[test]
    fn test_select_option() {
        let opt = SelectOption::new("ON", "Ontario").attr("data-x", "1");
        assert_eq!(opt.value, "ON");
        assert_eq!(opt.label, "Ontario");
        assert!(!opt.disabled);
        assert_eq!(opt.attrs.get("data-x"), Some("1"));
        assert!(SelectOption::disabled("", "Pick one").disabled);
    }

    #[test]
    fn test_options_only_on_multi_valued_kinds() {
        let field = FormField::select("province").option("ON", "Ontario").option("QC", "Quebec");
        assert_eq!(field.kind.options().map(<[_]>::len), Some(2));

        let field = FormField::checkbox("has_fee").option("ON", "Ontario");
        assert!(field.kind.options().is_none());
    }

    #[test]
    fn test_checkbox_group_value_adds_to_checked() {
        let field = FormField::checkbox_group("days").option("1", "Mon").value("1");
        assert!(field.value.is_none());
        match field.kind {
            FieldKind::CheckboxGroup { checked, .. } => assert_eq!(checked, vec!["1"]),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_multiple_select_collects_values() {
        let field = FormField::select("days").value("1").multiple().value("3");
        assert!(field.value.is_none());
        match field.kind {
            FieldKind::Select { selected, .. } => assert_eq!(selected, vec!["1", "3"]),
            other => panic!("unexpected kind {other:?}"),
        }

        let field = FormField::select("day").value("1").value("2");
        assert_eq!(field.value.as_deref(), Some("2"));
    }

    #[test]
    fn test_form_field_effective_id() {
        let field = FormField::input("email", InputType::Email);
        assert_eq!(field.effective_id(), "email");
        assert_eq!(field.id("contact-email").effective_id(), "contact-email");
    }
}
