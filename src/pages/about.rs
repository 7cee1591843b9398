use crate::{
    data::{ABOUT, ABOUT_IMAGE},
    pages::page_frame,
    view::Node,
    views::{Decorators, Img, heading, img, stack, text},
};

pub fn about() -> Node {
    page_frame(
        stack((
            heading(1, "About BC Bites"),
            text(ABOUT),
            img(ABOUT_IMAGE)
                .alt("Brooklyn College students")
                .class("about-us-image"),
        ))
        .class("about-content"),
    )
}
