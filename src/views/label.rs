use crate::view::{Element, IntoView};

/// Inline text in a `span`.
pub fn label(text: impl IntoView) -> Element {
    text_element("span", text)
}

/// A paragraph.
pub fn text(text: impl IntoView) -> Element {
    text_element("p", text)
}

/// A heading from `h1` to `h3`; deeper levels are clamped to `h3`.
pub fn heading(level: u8, text: impl IntoView) -> Element {
    let tag = match level {
        0 | 1 => "h1",
        2 => "h2",
        _ => "h3",
    };
    text_element(tag, text)
}

fn text_element(tag: &'static str, text: impl IntoView) -> Element {
    let mut element = Element::new(tag);
    element.push_child(text.into_view());
    element
}
