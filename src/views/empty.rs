use crate::view::Node;

/// A view that renders nothing. Stacks drop it from their children.
pub fn empty() -> Node {
    Node::Empty
}
