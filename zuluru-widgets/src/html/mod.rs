//! Minimal HTML tag rendering
//!
//! Just enough markup generation for the widget helpers: escaping, generic
//! tags, links, buttons and icon images. Attribute values are always escaped;
//! element content is escaped unless the caller passes pre-rendered markup.

use crate::attributes::AttributeSet;

/// Element content, either plain text or already-rendered markup
#[derive(Debug, Clone, Copy)]
pub enum Content<'a> {
    /// Text that must be escaped
    Text(&'a str),
    /// Markup emitted as-is
    Markup(&'a str),
}

impl Content<'_> {
    fn write(self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Markup(markup) => out.push_str(markup),
        }
    }
}

/// Render `<name attrs>content</name>`
#[must_use]
pub fn tag(name: &str, content: Content<'_>, attrs: &AttributeSet) -> String {
    let mut out = String::with_capacity(64);
    out.push('<');
    out.push_str(name);
    out.push_str(&attrs.to_html());
    out.push('>');
    content.write(&mut out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}

/// Render a void element such as `<input>` or `<img>`
#[must_use]
pub fn void_tag(name: &str, attrs: &AttributeSet) -> String {
    format!("<{name}{}>", attrs.to_html())
}

/// Render an anchor; `href` is written first, ahead of `attrs`
#[must_use]
pub fn link(content: Content<'_>, href: &str, attrs: &AttributeSet) -> String {
    let mut all = AttributeSet::new().with("href", href);
    all.merge(attrs);
    tag("a", content, &all)
}

/// Render a `<button>`, defaulting to `type="submit"`
#[must_use]
pub fn button(text: &str, attrs: &AttributeSet) -> String {
    let mut all = AttributeSet::new().with("type", "submit");
    all.merge(attrs);
    tag("button", Content::Text(text), &all)
}

/// Render an icon `<img>`
#[must_use]
pub fn icon_img(src: &str, alt: &str) -> String {
    void_tag(
        "img",
        &AttributeSet::new()
            .with("src", src)
            .with("alt", alt)
            .with("class", "icon"),
    )
}

/// Append ` name="value"` with the value escaped
pub fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Escape a string for use in HTML attribute values
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in HTML content
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("\"test\""), "&quot;test&quot;");
    }

    #[test]
    fn test_tag_escapes_text_but_not_markup() {
        let attrs = AttributeSet::new().with("class", "x");
        assert_eq!(tag("div", Content::Text("<b>"), &attrs), r#"<div class="x">&lt;b&gt;</div>"#);
        assert_eq!(tag("div", Content::Markup("<b>"), &attrs), r#"<div class="x"><b></div>"#);
    }

    #[test]
    fn test_link_puts_href_first() {
        let attrs = AttributeSet::new().with("class", "zuluru_ajax_link");
        assert_eq!(
            link(Content::Text("Go"), "/teams/1", &attrs),
            r#"<a href="/teams/1" class="zuluru_ajax_link">Go</a>"#
        );
    }

    #[test]
    fn test_button_defaults_to_submit() {
        let html = button("Search", &AttributeSet::new());
        assert_eq!(html, r#"<button type="submit">Search</button>"#);

        let html = button("Reset", &AttributeSet::new().with("type", "button"));
        assert_eq!(html, r#"<button type="button">Reset</button>"#);
    }

    #[test]
    fn test_icon_img() {
        assert_eq!(
            icon_img("/img/dropdown.png", "More"),
            r#"<img src="/img/dropdown.png" alt="More" class="icon">"#
        );
    }
}
