//! # Built-in views
//!
//! Small builders for the elements the site's pages are made of. Each returns an
//! [`Element`](crate::view::Element) that can be refined with the
//! [`Decorators`] methods and nested inside other views.

mod container;
pub use container::*;

mod decorator;
pub use decorator::*;

mod empty;
pub use empty::*;

mod img;
pub use img::*;

mod label;
pub use label::*;

mod link;
pub use link::*;

mod stack;
pub use stack::*;
