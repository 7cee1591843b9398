//! The site's pages and the route table that selects between them.
//!
//! Every page is a zero-argument view function. [`Page`] names them and carries their route,
//! navigation label and document title.

mod about;
mod contact;
mod food_trucks;
mod header;
mod home;
mod schedule;

pub use header::header;
pub use schedule::schedule_for;

use bcbites_router::{Route, RouteTable};
use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    view::{IntoView, Node},
    views::{Decorators, stack},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    FoodTrucks,
    Schedule,
    Contact,
    About,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::FoodTrucks => "/food-trucks",
            Page::Schedule => "/schedule",
            Page::Contact => "/contact",
            Page::About => "/about",
        }
    }

    pub fn route(self) -> Route {
        Route::from(self.path())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "HOME",
            Page::FoodTrucks => "FOOD TRUCK INFO",
            Page::Schedule => "SCHEDULE",
            Page::Contact => "CONTACT US",
            Page::About => "ABOUT US",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "BC Bites",
            Page::FoodTrucks => "Food Trucks | BC Bites",
            Page::Schedule => "Schedule | BC Bites",
            Page::Contact => "Contact | BC Bites",
            Page::About => "About | BC Bites",
        }
    }

    /// The page's view function.
    pub fn view_fn(self) -> fn() -> Node {
        match self {
            Page::Home => home::home,
            Page::FoodTrucks => food_trucks::food_trucks,
            Page::Schedule => schedule::schedule,
            Page::Contact => contact::contact,
            Page::About => about::about,
        }
    }

    pub fn render(self) -> Node {
        (self.view_fn())()
    }
}

/// The fixed route table: one exact pattern per page.
pub fn routes() -> RouteTable<Page> {
    Page::iter().map(|page| (page.path(), page)).collect()
}

/// Common frame of every page: the header followed by the page's own content.
fn page_frame(content: impl IntoView) -> Node {
    stack((header(), content))
        .class("bc-bites-container")
        .into_view()
}

#[cfg(test)]
mod tests {
    use bcbites_router::Resolution;

    use super::*;

    #[test]
    fn table_matches_every_page_exactly() {
        let table = routes();
        assert_eq!(table.len(), 5);
        for page in Page::iter() {
            assert_eq!(table.resolve(&page.route()), Resolution::View(page));
        }
        assert!(table.resolve(&Route::from("/unknown")).is_not_found());
        assert!(table.resolve(&Route::from("food-trucks")).is_not_found());
    }

    #[test]
    fn every_page_renders_inside_the_frame() {
        for page in Page::iter() {
            let node = page.render();
            let frame = node.as_element().expect("page is an element");
            assert!(frame.has_class("bc-bites-container"), "{page:?}");
            assert_eq!(node.find_by_class("bc-header").len(), 1, "{page:?}");
        }
    }
}
