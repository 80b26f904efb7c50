//! Minimal XML document tree and pretty printer.
//!
//! The tree is built first and serialized in a separate pass, so either
//! half can be tested on its own. Attribute order is insertion order, which
//! keeps the output byte-for-byte reproducible.

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const INDENT: &str = "  ";

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// A complete document: the XML declaration plus one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(elements.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the element children, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    fn write_pretty(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if self.children.iter().all(|c| matches!(c, Node::Text(_))) {
            for child in &self.children {
                if let Node::Text(text) = child {
                    out.push_str(&escape_text(text));
                }
            }
        } else {
            for child in &self.children {
                out.push('\n');
                match child {
                    Node::Element(e) => e.write_pretty(out, depth + 1),
                    Node::Text(text) => {
                        for _ in 0..=depth {
                            out.push_str(INDENT);
                        }
                        out.push_str(&escape_text(text));
                    }
                }
            }
            out.push('\n');
            for _ in 0..depth {
                out.push_str(INDENT);
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Document { root }
    }

    /// Serializes the document with a UTF-8 declaration, two-space
    /// indentation and self-closing empty elements. No trailing newline.
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::from(DECLARATION);
        out.push('\n');
        self.root.write_pretty(&mut out, 0);
        out
    }
}

/// Stands in for characters XML 1.0 cannot represent at all.
const REPLACEMENT: char = '\u{FFFD}';

/// Returns `true` for characters allowed by the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

/// Escapes a string for use inside a double-quoted attribute value.
///
/// Characters XML cannot carry, even as references, become U+FFFD.
fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c if !is_xml_char(c) => out.push(REPLACEMENT),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes character data, replacing non-XML characters like
/// [`escape_attribute`] does.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#xD;"),
            c if !is_xml_char(c) => out.push(REPLACEMENT),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_root_self_closes() {
        let doc = Document::new(Element::new("testsuites").attr("package", "stylelint.rules"));
        assert_eq!(
            doc.to_pretty_string(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<testsuites package=\"stylelint.rules\"/>"
        );
    }

    #[test]
    fn text_only_element_stays_on_one_line() {
        let b = Element::new("b").attr("x", 1).text("hello");
        let doc = Document::new(Element::new("a").child(b));
        assert_eq!(
            doc.to_pretty_string(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a>\n  <b x=\"1\">hello</b>\n</a>"
        );
    }

    #[test]
    fn nested_elements_indent_two_spaces() {
        let b = Element::new("b").child(Element::new("c"));
        let doc = Document::new(Element::new("a").child(b));
        assert_eq!(
            doc.to_pretty_string(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<a>\n  <b>\n    <c/>\n  </b>\n</a>"
        );
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let el = Element::new("t").attr("z", "1").attr("a", "2").attr("m", "3");
        let doc = Document::new(el);
        assert!(doc.to_pretty_string().ends_with(r#"<t z="1" a="2" m="3"/>"#));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let escaped = escape_attribute("a & <b> \"c\"\n");
        assert_eq!(escaped, "a &amp; &lt;b> &quot;c&quot;&#xA;");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_text("1 < 2 & 3 > \"x\""), "1 &lt; 2 &amp; 3 &gt; \"x\"");
    }

    #[test]
    fn control_characters_are_replaced() {
        assert_eq!(escape_attribute("bad \u{1b}[31m\u{0}"), "bad \u{FFFD}[31m\u{FFFD}");
        let escaped = escape_text("\u{7}x\u{B}\u{C}\u{FFFE}");
        assert_eq!(escaped, "\u{FFFD}x\u{FFFD}\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn allowed_whitespace_and_astral_characters_survive() {
        assert_eq!(escape_text("a\tb\nc \u{1F600}"), "a\tb\nc \u{1F600}");
        assert_eq!(escape_attribute("\u{E000}\u{10FFFF}"), "\u{E000}\u{10FFFF}");
    }

    #[test]
    fn attribute_lookup() {
        let el = Element::new("t").attr("name", "x");
        assert_eq!(el.attribute("name"), Some("x"));
        assert_eq!(el.attribute("missing"), None);
    }
}
