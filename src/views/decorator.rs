use std::borrow::Cow;

use crate::view::Element;

/// Builder methods shared by every element view.
pub trait Decorators: Sized {
    fn element_mut(&mut self) -> &mut Element;

    /// Add a CSS class. Adding the same class twice has no effect.
    fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.element_mut().push_class(class.into());
        self
    }

    fn classes<I, C>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cow<'static, str>>,
    {
        for class in classes {
            self.element_mut().push_class(class.into());
        }
        self
    }

    /// Set an attribute, replacing any earlier value.
    fn attr(mut self, name: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.element_mut().set_attr(name, value.into());
        self
    }

    fn id(self, id: impl Into<Cow<'static, str>>) -> Self {
        self.attr("id", id)
    }

    fn role(self, role: &'static str) -> Self {
        self.attr("role", role)
    }
}

impl Decorators for Element {
    fn element_mut(&mut self) -> &mut Element {
        self
    }
}
