//! Field rendering to HTML
//!
//! Renders a single [`FormField`] with its label and help text. Control-level
//! attributes go on the `<input>`/`<select>`/`<textarea>`; option-level
//! attributes go on each `<option>`. Radio buttons and group checkboxes are
//! controls in their own right, so each carries the field attributes under
//! its option's own.

use std::fmt::Write;

use super::field::{FieldKind, FormField, InputType, SelectOption};
use crate::attributes::AttributeSet;
use crate::html::{escape_attr, escape_html, write_attr};

/// Options for customizing field rendering
#[derive(Debug, Clone)]
pub struct FormRenderOptions {
    /// CSS class for form groups (wrapper around label + input + help)
    pub group_class: String,
    /// CSS class for labels
    pub label_class: String,
    /// CSS class for help text
    pub help_class: String,
    /// Whether to wrap fields in a div
    pub wrap_fields: bool,
}

impl Default for FormRenderOptions {
    fn default() -> Self {
        Self {
            group_class: "form-group".into(),
            label_class: "form-label".into(),
            help_class: "form-help".into(),
            wrap_fields: true,
        }
    }
}

/// Renders form fields to HTML
pub struct FormRenderer;

impl FormRenderer {
    /// Render a field to an HTML string
    #[must_use]
    pub fn render(field: &FormField) -> String {
        Self::render_with_options(field, &FormRenderOptions::default())
    }

    /// Render a field with custom options
    #[must_use]
    pub fn render_with_options(field: &FormField, options: &FormRenderOptions) -> String {
        let mut html = String::with_capacity(256);

        let is_hidden = matches!(field.kind, FieldKind::Input(InputType::Hidden));
        let wrap = options.wrap_fields && !is_hidden;
        if wrap {
            let _ = writeln!(html, r#"<div class="{}">"#, escape_attr(&options.group_class));
        }

        // Checkbox label comes after input; groups use a legend-style label
        let is_checkbox = matches!(field.kind, FieldKind::Checkbox { .. });
        if let Some(ref label) = field.label {
            if !is_hidden && !is_checkbox {
                let _ = writeln!(
                    html,
                    r#"  <label for="{}" class="{}">{}</label>"#,
                    escape_attr(field.effective_id()),
                    escape_attr(&options.label_class),
                    escape_html(label)
                );
            }
        }

        match &field.kind {
            FieldKind::Input(input_type) => Self::render_input(&mut html, field, *input_type),
            FieldKind::Textarea { rows } => Self::render_textarea(&mut html, field, *rows),
            FieldKind::Select {
                options: opts,
                multiple,
                selected,
                empty,
            } => Self::render_select(&mut html, field, opts, *multiple, selected, empty.as_deref()),
            FieldKind::Checkbox { checked } => Self::render_checkbox(&mut html, field, *checked),
            FieldKind::CheckboxGroup {
                options: opts,
                checked,
            } => Self::render_checkbox_group(&mut html, field, opts, checked),
            FieldKind::Radio { options: opts } => Self::render_radio(&mut html, field, opts),
        }

        if is_checkbox {
            if let Some(ref label) = field.label {
                let _ = writeln!(
                    html,
                    r#"  <label for="{}" class="{}">{}</label>"#,
                    escape_attr(field.effective_id()),
                    escape_attr(&options.label_class),
                    escape_html(label)
                );
            }
        }

        if let Some(ref help) = field.help_text {
            let _ = writeln!(
                html,
                r#"  <span class="{}">{}</span>"#,
                escape_attr(&options.help_class),
                escape_html(help)
            );
        }

        if wrap {
            html.push_str("</div>");
        } else if html.ends_with('\n') {
            html.pop();
        }

        html
    }

    fn render_input(html: &mut String, field: &FormField, input_type: InputType) {
        html.push_str("  <input");
        write_attr(html, "type", input_type.as_str());
        write_attr(html, "name", &field.name);
        write_attr(html, "id", field.effective_id());
        if let Some(ref value) = field.value {
            write_attr(html, "value", value);
        }
        Self::write_flags(html, field);
        html.push_str(&field.attrs.to_html());
        html.push_str(">\n");
    }

    fn render_textarea(html: &mut String, field: &FormField, rows: Option<u32>) {
        html.push_str("  <textarea");
        write_attr(html, "name", &field.name);
        write_attr(html, "id", field.effective_id());
        if let Some(r) = rows {
            write_attr(html, "rows", &r.to_string());
        }
        Self::write_flags(html, field);
        html.push_str(&field.attrs.to_html());
        html.push('>');
        if let Some(ref value) = field.value {
            html.push_str(&escape_html(value));
        }
        html.push_str("</textarea>\n");
    }

    fn render_select(
        html: &mut String,
        field: &FormField,
        opts: &[SelectOption],
        multiple: bool,
        selected: &[String],
        empty: Option<&str>,
    ) {
        html.push_str("  <select");
        if multiple {
            write_attr(html, "name", &format!("{}[]", field.name));
        } else {
            write_attr(html, "name", &field.name);
        }
        write_attr(html, "id", field.effective_id());
        if multiple {
            html.push_str(" multiple");
        }
        Self::write_flags(html, field);
        html.push_str(&field.attrs.to_html());
        html.push_str(">\n");

        if let Some(label) = empty {
            let _ = writeln!(html, r#"    <option value="">{}</option>"#, escape_html(label));
        }

        for opt in opts {
            html.push_str("    <option");
            write_attr(html, "value", &opt.value);
            html.push_str(&Self::option_attrs(&opt.attrs).to_html());
            if opt.disabled {
                html.push_str(" disabled");
            }
            if field.value.as_ref() == Some(&opt.value) || selected.contains(&opt.value) {
                html.push_str(" selected");
            }
            html.push('>');
            html.push_str(&escape_html(&opt.label));
            html.push_str("</option>\n");
        }

        html.push_str("  </select>\n");
    }

    fn render_checkbox(html: &mut String, field: &FormField, checked: bool) {
        // Unchecked boxes still submit a value
        html.push_str("  <input");
        write_attr(html, "type", "hidden");
        write_attr(html, "name", &field.name);
        write_attr(html, "value", "0");
        html.push_str(">\n");

        html.push_str("  <input");
        write_attr(html, "type", "checkbox");
        write_attr(html, "name", &field.name);
        write_attr(html, "id", field.effective_id());
        write_attr(html, "value", field.value.as_deref().unwrap_or("1"));
        if checked {
            html.push_str(" checked");
        }
        Self::write_flags(html, field);
        html.push_str(&field.attrs.to_html());
        html.push_str(">\n");
    }

    fn render_checkbox_group(
        html: &mut String,
        field: &FormField,
        opts: &[SelectOption],
        checked: &[String],
    ) {
        html.push_str("  <div>\n");
        for (i, opt) in opts.iter().enumerate() {
            let opt_id = format!("{}-{}", field.effective_id(), i);
            html.push_str("    <div class=\"checkbox\">\n");
            html.push_str("      <input");
            write_attr(html, "type", "checkbox");
            write_attr(html, "name", &format!("{}[]", field.name));
            write_attr(html, "id", &opt_id);
            write_attr(html, "value", &opt.value);
            html.push_str(&Self::group_item_attrs(field, opt).to_html());
            if checked.contains(&opt.value) {
                html.push_str(" checked");
            }
            if opt.disabled || field.flags.disabled {
                html.push_str(" disabled");
            }
            html.push_str(">\n");
            let _ = writeln!(
                html,
                "      <label for=\"{}\">{}</label>",
                escape_attr(&opt_id),
                escape_html(&opt.label)
            );
            html.push_str("    </div>\n");
        }
        html.push_str("  </div>\n");
    }

    fn render_radio(html: &mut String, field: &FormField, opts: &[SelectOption]) {
        for (i, opt) in opts.iter().enumerate() {
            let opt_id = format!("{}-{}", field.effective_id(), i);
            html.push_str("  <div class=\"form-radio\">\n");
            html.push_str("    <input");
            write_attr(html, "type", "radio");
            write_attr(html, "name", &field.name);
            write_attr(html, "id", &opt_id);
            write_attr(html, "value", &opt.value);
            html.push_str(&Self::group_item_attrs(field, opt).to_html());
            if field.value.as_ref() == Some(&opt.value) {
                html.push_str(" checked");
            }
            if opt.disabled || field.flags.disabled {
                html.push_str(" disabled");
            }
            if field.flags.required && i == 0 {
                html.push_str(" required");
            }
            html.push_str(">\n");
            let _ = writeln!(
                html,
                "    <label for=\"{}\">{}</label>",
                escape_attr(&opt_id),
                escape_html(&opt.label)
            );
            html.push_str("  </div>\n");
        }
    }

    /// Option attributes minus the ones the renderer writes itself
    fn option_attrs(attrs: &AttributeSet) -> AttributeSet {
        attrs
            .iter()
            .filter(|(name, _)| !matches!(*name, "value" | "type" | "name" | "id"))
            .collect()
    }

    /// Attributes of one radio button or group checkbox: the option's own,
    /// then any field attributes the option does not override
    fn group_item_attrs(field: &FormField, opt: &SelectOption) -> AttributeSet {
        let mut attrs = Self::option_attrs(&opt.attrs);
        attrs.merge_missing(&Self::option_attrs(&field.attrs));
        attrs
    }

    fn write_flags(html: &mut String, field: &FormField) {
        if field.flags.required {
            html.push_str(" required");
        }
        if field.flags.disabled {
            html.push_str(" disabled");
        }
        if field.flags.autofocus {
            html.push_str(" autofocus");
        }
    }
}
