use std::{cell::RefCell, rc::Rc};

use bcbites_router::{Dispatcher, LocationSource, Route};

use crate::{
    config::SiteConfig,
    error::Error,
    pages::{Page, routes},
    view::{IntoView, Node},
    views::{Decorators, container, element, stack},
};

/// The running site: a dispatcher following a location, and the view it last mounted.
///
/// Every time the dispatcher selects a different page, the page is rendered into the site
/// shell and handed to the mount callback. The browser entry uses the callback to write the
/// markup into the document; tests read it back with [`App::view`].
pub struct App {
    config: SiteConfig,
    outlet: Rc<RefCell<Node>>,
    dispatcher: Dispatcher<Page>,
}

impl App {
    pub fn new(location: Rc<dyn LocationSource>, config: SiteConfig) -> Result<Self, Error> {
        Self::with_mount(location, config, |_, _| {})
    }

    pub fn with_mount(
        location: Rc<dyn LocationSource>,
        config: SiteConfig,
        on_mount: impl Fn(Option<Page>, &Node) + 'static,
    ) -> Result<Self, Error> {
        let outlet = Rc::new(RefCell::new(shell(Node::Empty)));

        let dispatcher = Dispatcher::new(location, routes(), config.fallback.to_fallback(), {
            let outlet = outlet.clone();
            move |page: Option<&Page>| {
                let page = page.copied();
                tracing::debug!(?page, "mounting");
                let view = shell(page.map(Page::render).unwrap_or_default());
                on_mount(page, &view);
                *outlet.borrow_mut() = view;
            }
        })?;

        Ok(Self {
            config,
            outlet,
            dispatcher,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The mounted page, if any.
    pub fn page(&self) -> Option<Page> {
        self.dispatcher.view()
    }

    pub fn route(&self) -> Route {
        self.dispatcher.current_route()
    }

    pub fn navigate(&self, target: impl Into<Route>) {
        self.dispatcher.navigate(target);
    }

    /// The mounted shell and page.
    pub fn view(&self) -> Node {
        self.outlet.borrow().clone()
    }

    pub fn to_html(&self) -> String {
        self.outlet.borrow().to_html()
    }

    /// Title for the mounted page. The home title stands in while nothing is mounted.
    pub fn title(&self) -> &'static str {
        self.page().unwrap_or(Page::Home).title()
    }

    pub fn dispatcher(&self) -> &Dispatcher<Page> {
        &self.dispatcher
    }
}

/// The markup around every page: a `main` landmark holding the content, then the footer.
pub fn shell(content: impl IntoView) -> Node {
    stack((
        element("main", (container(content).class("content"),))
            .class("wrapper")
            .role("main"),
        element("footer", ()).class("footer"),
    ))
    .into_view()
}
