//! # Views
//!
//! A view is a [`Node`]: an element with a tag, classes, attributes and children, a run of
//! text, or nothing. Pages build their node trees once with the builders in
//! [`views`](crate::views) and the [`Decorators`](crate::views::Decorators) methods, and the
//! tree is written out as HTML when it is mounted.
//!
//! Anything that implements [`IntoView`] can be passed where a child is expected, including
//! plain strings and tuples of views (see [`ViewTuple`](crate::view_tuple::ViewTuple)).

use std::{borrow::Cow, fmt::Write};

use smallvec::SmallVec;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "meta", "link", "input"];

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Cow<'static, str>),
    #[default]
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: SmallVec<[Cow<'static, str>; 2]>,
    attrs: SmallVec<[(&'static str, Cow<'static, str>); 2]>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: SmallVec::new(),
            attrs: SmallVec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|class| class.as_ref())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_ref())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn push_class(&mut self, class: Cow<'static, str>) {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    pub(crate) fn set_attr(&mut self, name: &'static str, value: Cow<'static, str>) {
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        if !matches!(child, Node::Empty) {
            self.children.push(child);
        }
    }

    pub(crate) fn extend_children(&mut self, children: impl IntoIterator<Item = Node>) {
        for child in children {
            self.push_child(child);
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                escape_into(class, out);
            }
            out.push('"');
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"");
            escape_into(value, out);
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => escape_into(text, out),
            Node::Empty => {}
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// All text below this node, with runs from separate nodes joined by a space.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Text(text) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
            Node::Empty => {}
        }
    }

    /// Depth-first search for every element matching `predicate`, in document order.
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&predicate, &mut found);
        found
    }

    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.find_all(predicate).into_iter().next()
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|element| element.has_class(class))
    }

    fn walk<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if predicate(element) {
                found.push(element);
            }
            for child in &element.children {
                child.walk(predicate, found);
            }
        }
    }
}

impl Element {
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}

/// Converts a value into a [`Node`].
pub trait IntoView {
    fn into_view(self) -> Node;
}

impl IntoView for Node {
    fn into_view(self) -> Node {
        self
    }
}

impl IntoView for Element {
    fn into_view(self) -> Node {
        Node::Element(self)
    }
}

impl IntoView for &'static str {
    fn into_view(self) -> Node {
        Node::Text(Cow::Borrowed(self))
    }
}

impl IntoView for String {
    fn into_view(self) -> Node {
        Node::Text(Cow::Owned(self))
    }
}

impl<V: IntoView> IntoView for Option<V> {
    fn into_view(self) -> Node {
        self.map(IntoView::into_view).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_nested_markup() {
        let mut list = Element::new("ul");
        list.push_class("menu".into());
        let mut item = Element::new("li");
        item.push_child("Tacos".into_view());
        list.push_child(item.into_view());

        assert_eq!(
            Node::Element(list).to_html(),
            r#"<ul class="menu"><li>Tacos</li></ul>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let mut link = Element::new("a");
        link.set_attr("href", "mailto:wafels&dinges@gmail.com".into());
        link.push_child("Wafels & <Dinges>".into_view());

        assert_eq!(
            link.into_view().to_html(),
            r#"<a href="mailto:wafels&amp;dinges@gmail.com">Wafels &amp; &lt;Dinges&gt;</a>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut img = Element::new("img");
        img.set_attr("src", "logo.png".into());
        img.set_attr("src", "other.png".into());
        assert_eq!(img.into_view().to_html(), r#"<img src="other.png">"#);
    }

    #[test]
    fn empty_children_are_skipped() {
        let mut div = Element::new("div");
        div.push_child(Node::Empty);
        div.push_child(None::<&'static str>.into_view());
        assert!(div.children().is_empty());
    }
}
