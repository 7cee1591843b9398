use strum::IntoEnumIterator;

use crate::{
    data::SITE_LOGO,
    pages::Page,
    view::Element,
    views::{Decorators, Img, container, element, img, route_link, stack_from_iter},
};

/// Logo and navigation bar shown at the top of every page.
pub fn header() -> Element {
    let nav = stack_from_iter(
        Page::iter().map(|page| route_link(&page.route(), page.nav_label()).class("nav-link")),
    );

    element(
        "header",
        (
            container(img(SITE_LOGO).alt("BC BITES Logo").class("bc-logo"))
                .class("logo-container"),
            element("nav", (nav,)).class("bc-nav"),
        ),
    )
    .class("bc-header")
}
