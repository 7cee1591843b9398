use crate::{
    view::{Element, IntoView},
    view_tuple::ViewTuple,
};

/// A `div` holding a fixed tuple of children, in order.
///
/// ```rust
/// use bcbites::views::*;
///
/// let view = stack(("first", stack(("nested", empty())))).class("outer");
/// assert_eq!(view.children().len(), 2);
/// ```
pub fn stack(children: impl ViewTuple) -> Element {
    let mut element = Element::new("div");
    element.extend_children(children.into_views());
    element
}

/// A `div` holding one child per item of `iter`.
pub fn stack_from_iter<V: IntoView>(iter: impl IntoIterator<Item = V>) -> Element {
    let mut element = Element::new("div");
    element.extend_children(iter.into_iter().map(IntoView::into_view));
    element
}

/// An element of any tag holding a fixed tuple of children.
pub fn element(tag: &'static str, children: impl ViewTuple) -> Element {
    let mut element = Element::new(tag);
    element.extend_children(children.into_views());
    element
}
