//! View binding layer.
//!
//! `HostDocument` is the capability the engine mutates: it locates named
//! regions, sets header and footer text, and swaps the content area for an
//! error message. It holds no business logic and never fails; a region the
//! host does not have is reported as `None` and callers skip it.
//!
//! Renderers describe what goes into a region as a small `Node` tree. Text
//! and attribute values go through askama's HTML escaper on serialization;
//! only `Node::Markup` is emitted verbatim.

use askama::Template;
use std::fmt;

/// Stable per-section region keys, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    Upcoming,
    About,
    Interests,
    Education,
    Experience,
    Publications,
    Contact,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Upcoming,
        SectionKey::About,
        SectionKey::Interests,
        SectionKey::Education,
        SectionKey::Experience,
        SectionKey::Publications,
        SectionKey::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Upcoming => "upcoming",
            SectionKey::About => "about",
            SectionKey::Interests => "interests",
            SectionKey::Education => "education",
            SectionKey::Experience => "experience",
            SectionKey::Publications => "publications",
            SectionKey::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-text slots in the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    SiteTitle,
    Subtitle,
    Eyebrow,
    FooterNote,
}

/// A named placeholder that a section's content is written into.
pub trait Region {
    fn clear(&mut self);
    fn append(&mut self, node: Node);
}

/// The host document, as seen by the render orchestrator and controller.
pub trait HostDocument {
    /// Locate a section's body region. `None` when the host has no such region.
    fn region(&mut self, key: SectionKey) -> Option<&mut dyn Region>;

    /// Override a section's static heading.
    fn set_section_title(&mut self, key: SectionKey, text: &str);

    fn set_slot_text(&mut self, slot: Slot, text: &str);

    /// Browser-level page title.
    fn set_page_title(&mut self, text: &str);

    /// Document-level language tag.
    fn set_language(&mut self, tag: &str);

    /// Language the host document declared before any render.
    fn declared_language(&self) -> Option<String>;

    /// Update the toggle's visible label and accessible name.
    fn set_toggle(&mut self, label: &str, accessible_label: &str);

    /// Replace the whole content area with a single visible message.
    fn show_error(&mut self, message: &str);
}

/// One text or attribute value, escaped by askama's HTML escaper.
#[derive(Template)]
#[template(source = "{{ value }}", ext = "html")]
struct Escaped<'a> {
    value: &'a str,
}

/// Escape text for inclusion in HTML text or a quoted attribute value.
fn escape_html(input: &str) -> String {
    Escaped { value: input }.to_string()
}

/// A fragment of view content.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Plain text, always escaped.
    Text(String),
    /// Pre-sanitized markup, emitted verbatim.
    Markup(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Markup(markup) => out.push_str(markup),
        }
    }

    /// Visible text with markup stripped of tags; mostly useful in tests.
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
            Node::Text(text) => text.clone(),
            Node::Markup(markup) => strip_tags(markup),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// An element with attributes and children, built fluently.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, Option<String>)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// A value-less attribute such as `open`.
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(attr, _)| *attr == name)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// A link that opens in a new browsing context without access to the opener
/// and without sending a referrer. Every externally-navigable link goes
/// through here. The label falls back to the URL.
pub fn external_link(url: &str, label: Option<&str>) -> Element {
    Element::new("a")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noreferrer noopener")
        .text(label.unwrap_or(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("山田 花子 / 2024"), "山田 花子 / 2024");
    }

    #[test]
    fn test_element_serialization() {
        let node: Node = Element::new("ul")
            .class("simple-list")
            .child(Element::new("li").text("a < b"))
            .into();
        assert_eq!(
            node.to_html(),
            "<ul class=\"simple-list\"><li>a &lt; b</li></ul>"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let node: Node = Element::new("a")
            .attr("title", r#""quoted" & <tagged>"#)
            .text("x")
            .into();
        assert_eq!(
            node.to_html(),
            "<a title=\"&quot;quoted&quot; &amp; &lt;tagged&gt;\">x</a>"
        );
    }

    #[test]
    fn test_flag_attribute_has_no_value() {
        let node: Node = Element::new("details").flag("open").into();
        assert_eq!(node.to_html(), "<details open></details>");
    }

    #[test]
    fn test_markup_is_verbatim() {
        let node: Node = Element::new("li").child(Node::Markup("<b>A</b>".into())).into();
        assert_eq!(node.to_html(), "<li><b>A</b></li>");
        assert_eq!(node.text_content(), "A");
    }

    #[test]
    fn test_external_link_policy() {
        let link = external_link("https://example.org/?a=1&b=2", None);
        assert_eq!(link.get_attr("target"), Some("_blank"));
        assert_eq!(link.get_attr("rel"), Some("noreferrer noopener"));
        assert_eq!(
            Node::from(link).to_html(),
            "<a href=\"https://example.org/?a=1&amp;b=2\" target=\"_blank\" \
             rel=\"noreferrer noopener\">https://example.org/?a=1&amp;b=2</a>"
        );
    }

    #[test]
    fn test_external_link_label() {
        let link = external_link("https://example.org", Some("Site"));
        assert_eq!(Node::from(link).text_content(), "Site");
    }

    #[test]
    fn test_section_keys_in_render_order() {
        let keys: Vec<_> = SectionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["upcoming", "about", "interests", "education", "experience", "publications", "contact"]
        );
    }

    proptest! {
        #[test]
        fn prop_escaped_text_never_opens_a_tag(input in ".*") {
            let html = Node::text(input).to_html();
            prop_assert!(!html.contains('<'));
            prop_assert!(!html.contains('>'));
            prop_assert!(!html.contains('"'));
        }

        #[test]
        fn prop_text_content_roundtrips_plain_text(input in ".*") {
            let node: Node = Element::new("p").text(input.clone()).into();
            prop_assert_eq!(node.text_content(), input);
        }
    }
}
