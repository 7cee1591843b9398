//! Testing utilities for the BC Bites site.
//!
//! This crate drives the site without a browser: a [`TestHarness`] runs an [`App`] on an
//! in-memory address bar, so tests can navigate, press back and forward, type into the
//! address bar and follow links, then inspect what was mounted.
//!
//! # Example
//!
//! ```rust
//! use bcbites_test::prelude::*;
//!
//! let mut harness = TestHarness::new();
//! assert_eq!(harness.page(), Some(Page::Home));
//!
//! assert!(harness.click_link("SCHEDULE"));
//! assert_eq!(harness.page(), Some(Page::Schedule));
//!
//! harness.back();
//! assert_eq!(harness.page(), Some(Page::Home));
//! assert_eq!(harness.mounts(), [Some(Page::Home), Some(Page::Schedule), Some(Page::Home)]);
//! ```
//!
//! # Recording route changes
//!
//! ```rust
//! use bcbites_test::prelude::*;
//!
//! let location = MemoryLocation::new();
//! let recorder = RouteRecorder::attach(&location);
//!
//! location.navigate(&Route::from("/about"));
//! location.edit_address_bar("#/contact");
//!
//! assert_eq!(recorder.routes(), ["/about", "/contact"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use bcbites::{App, Error, Node, Page, SiteConfig};
use bcbites_router::{LocationSource, MemoryLocation, Route, Subscription};

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{RouteRecorder, TestHarness};
    pub use bcbites::prelude::*;
    pub use bcbites::{FallbackPolicy, Page, SiteConfig};
    pub use bcbites_router::{Fallback, LocationSource, MemoryLocation, Resolution, Route};
}

/// Runs the site on a [`MemoryLocation`] and keeps track of every mount.
pub struct TestHarness {
    location: Rc<MemoryLocation>,
    app: App,
    mounts: Rc<RefCell<Vec<Option<Page>>>>,
}

impl TestHarness {
    /// A harness opened with an empty fragment and the default config.
    pub fn new() -> Self {
        Self::with_fragment("")
    }

    /// A harness whose address bar starts on `fragment`.
    pub fn with_fragment(fragment: &str) -> Self {
        Self::with_config(fragment, SiteConfig::default())
    }

    /// Panics if the app can't start, as a test would.
    pub fn with_config(fragment: &str, config: SiteConfig) -> Self {
        match Self::try_with_config(fragment, config) {
            Ok(harness) => harness,
            Err(err) => panic!("site failed to start: {err}"),
        }
    }

    pub fn try_with_config(fragment: &str, config: SiteConfig) -> Result<Self, Error> {
        let location = Rc::new(
            MemoryLocation::with_fragment(fragment).with_redirect_limit(config.redirect_limit),
        );
        let mounts = Rc::new(RefCell::new(Vec::new()));
        let app = App::with_mount(location.clone(), config, {
            let mounts = mounts.clone();
            move |page, _| mounts.borrow_mut().push(page)
        })?;
        Ok(Self {
            location,
            app,
            mounts,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn location(&self) -> &Rc<MemoryLocation> {
        &self.location
    }

    pub fn page(&self) -> Option<Page> {
        self.app.page()
    }

    pub fn route(&self) -> Route {
        self.app.route()
    }

    /// The address bar's fragment, without the `#`.
    pub fn fragment(&self) -> String {
        self.location.fragment()
    }

    pub fn view(&self) -> Node {
        self.app.view()
    }

    /// Every page handed to the mount callback so far, in order.
    pub fn mounts(&self) -> Vec<Option<Page>> {
        self.mounts.borrow().clone()
    }

    pub fn navigate(&mut self, target: impl Into<Route>) -> &mut Self {
        self.app.navigate(target);
        self
    }

    pub fn back(&mut self) -> bool {
        self.location.back()
    }

    pub fn forward(&mut self) -> bool {
        self.location.forward()
    }

    pub fn edit_address_bar(&mut self, fragment: &str) -> &mut Self {
        self.location.edit_address_bar(fragment);
        self
    }

    /// Follow the first in-page link in the mounted view whose text is `label`, the way a
    /// browser does: its `href` becomes the new fragment.
    ///
    /// Returns `false` if no such link is mounted.
    pub fn click_link(&mut self, label: &str) -> bool {
        let view = self.app.view();
        let href = view
            .find(|element| {
                element.tag() == "a"
                    && element.attr("data-route").is_some()
                    && element.text_content() == label
            })
            .and_then(|link| link.attr("href"))
            .map(str::to_string);

        match href {
            Some(href) => {
                self.location.edit_address_bar(&href);
                true
            }
            None => false,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Records every route a location reports, for as long as it is alive.
pub struct RouteRecorder {
    routes: Rc<RefCell<Vec<Route>>>,
    subscription: Subscription,
}

impl RouteRecorder {
    pub fn attach(location: &dyn LocationSource) -> Self {
        let routes = Rc::new(RefCell::new(Vec::new()));
        let subscription = location.subscribe(Box::new({
            let routes = routes.clone();
            move |route: &Route| routes.borrow_mut().push(route.clone())
        }));
        Self {
            routes,
            subscription,
        }
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.routes.borrow().len()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.borrow().last().cloned()
    }

    pub fn reset(&self) {
        self.routes.borrow_mut().clear();
    }

    /// Stop recording. Routes recorded so far are kept.
    pub fn detach(&self) {
        self.subscription.unsubscribe();
    }
}
