use std::borrow::Cow;

use bcbites_router::Route;

use crate::{
    view::{Element, IntoView},
    views::Decorators,
};

/// An anchor to an arbitrary address.
pub fn link(href: impl Into<Cow<'static, str>>, child: impl IntoView) -> Element {
    let mut element = Element::new("a").attr("href", href);
    element.push_child(child.into_view());
    element
}

/// An in-page link. Following it sets the address-bar fragment to `route`, which the
/// location source reports like any other navigation.
pub fn route_link(route: &Route, child: impl IntoView) -> Element {
    link(route.to_fragment(), child).attr("data-route", route.to_string())
}

pub fn mailto(email: &'static str) -> Element {
    link(format!("mailto:{email}"), email)
}

/// A `tel:` link showing `display` (for example `718.951.5074`), dialling the same digits
/// with the US country code.
pub fn tel(display: &'static str) -> Element {
    let digits: String = display.chars().filter(char::is_ascii_digit).collect();
    link(format!("tel:+1{digits}"), display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_link_dials_digits_only() {
        let phone = tel("718.951.5074");
        assert_eq!(Element::attr(&phone, "href"), Some("tel:+17189515074"));
        assert_eq!(phone.text_content(), "718.951.5074");
    }

    #[test]
    fn route_link_targets_fragment() {
        let link = route_link(&Route::from("/schedule"), "SCHEDULE");
        assert_eq!(Element::attr(&link, "href"), Some("#/schedule"));
        assert_eq!(Element::attr(&link, "data-route"), Some("/schedule"));
    }
}
