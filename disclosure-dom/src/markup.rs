//! HTML-like serialization of element trees.

use crate::document::Document;
use crate::element::Element;

/// Serialize an element and its subtree.
///
/// Attributes come out sorted by name; boolean attributes are written bare.
pub fn to_markup(el: &Element) -> String {
    let mut out = String::new();
    write_element(el, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
    }
    out.push('>');
    if let Some(text) = &el.text {
        out.push_str(&escape(text));
    }
    for child in &el.children {
        write_element(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Document {
    pub fn to_markup(&self) -> String {
        to_markup(self.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_escapes_and_flags() {
        let el = Element::div()
            .attr("title", "a \"b\"")
            .flag("hidden", true)
            .text("1 < 2 & 3");

        assert_eq!(
            to_markup(&el),
            "<div hidden title=\"a &quot;b&quot;\">1 &lt; 2 &amp; 3</div>"
        );
    }

    #[test]
    fn test_markup_nested() {
        let el = Element::div().child(Element::button().text("Go"));
        assert_eq!(to_markup(&el), "<div><button>Go</button></div>");
    }
}
