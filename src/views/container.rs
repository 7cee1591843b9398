use crate::view::{Element, IntoView};

/// A `div` wrapping a single child.
pub fn container(child: impl IntoView) -> Element {
    let mut element = Element::new("div");
    element.push_child(child.into_view());
    element
}
