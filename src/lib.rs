//! # BC Bites
//! The food-truck guide for the Brooklyn College campus: which trucks park where, when they
//! are open and how to reach them, as a single page that switches between its five pages on
//! the address-bar fragment.
//!
//! ## Pages
//! Each page is a view function returning a [`Node`](view::Node) tree, built once from the
//! builders in [`views`]:
//!
//! ```rust
//! use bcbites::views::*;
//!
//! let card = stack((
//!     heading(3, "Sammy's Halal"),
//!     text("Time: 10:00 am - 5:00 pm"),
//! ))
//! .class("truck-schedule");
//! assert_eq!(
//!     bcbites::IntoView::into_view(card).to_html(),
//!     r#"<div class="truck-schedule"><h3>Sammy's Halal</h3><p>Time: 10:00 am - 5:00 pm</p></div>"#,
//! );
//! ```
//!
//! [`Page`] names the pages and [`routes`](pages::routes) maps each to its route:
//!
//! | Route | Page |
//! |---|---|
//! | `/` | Home |
//! | `/food-trucks` | Food Truck Info |
//! | `/schedule` | Schedule |
//! | `/contact` | Contact |
//! | `/about` | About |
//!
//! ## Routing
//! Routing lives in the [`router`] crate. A [`LocationSource`](router::LocationSource) reports
//! the current route and its changes, and a [`Dispatcher`](router::Dispatcher) keeps the
//! matching page mounted. [`App`] wires the two to the site's pages, rendering each mounted
//! page into the shell:
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use bcbites::{App, Page, SiteConfig, router::MemoryLocation};
//!
//! let location = Rc::new(MemoryLocation::new());
//! let app = App::new(location.clone(), SiteConfig::default()).unwrap();
//! assert_eq!(app.page(), Some(Page::Home));
//!
//! app.navigate("/contact");
//! assert_eq!(app.page(), Some(Page::Contact));
//!
//! location.back();
//! assert_eq!(app.page(), Some(Page::Home));
//! ```
//!
//! Addresses that match no page are handled by the configured
//! [`FallbackPolicy`]; by default the home page is shown and the address bar is left alone.
//!
//! In the browser the site starts from `web::run`, which follows `window.location.hash`.

mod app;
mod config;
pub mod data;
mod error;
pub mod map;
pub mod pages;
pub mod view;
pub mod view_tuple;
pub mod views;
#[cfg(target_arch = "wasm32")]
pub mod web;
pub mod week;

pub use app::{App, shell};
pub use bcbites_router as router;
pub use config::{FallbackPolicy, SiteConfig};
pub use error::Error;
pub use pages::Page;
pub use view::{Element, IntoView, Node};

pub mod prelude {
    pub use crate::view_tuple::ViewTuple;
    pub use crate::views::*;
    pub use crate::{App, IntoView, Node, Page, SiteConfig};
    pub use bcbites_router::{LocationSource, MemoryLocation, Route};
}
