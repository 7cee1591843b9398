use std::borrow::Cow;

use crate::{view::Element, views::Decorators};

/// An image. Set its alternative text with [`Img::alt`].
pub fn img(src: impl Into<Cow<'static, str>>) -> Element {
    Element::new("img").attr("src", src)
}

pub trait Img: Decorators {
    fn alt(self, alt: impl Into<Cow<'static, str>>) -> Self {
        self.attr("alt", alt)
    }
}

impl Img for Element {}
