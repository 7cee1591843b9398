use crate::{listeners::Subscription, location::LocationSource, route::Route};

/// A location pinned to one route.
///
/// Used where no address bar exists: rendering a page for a known route, or running outside
/// a browser. Subscriptions are inert and navigation is ignored.
#[derive(Clone, Debug, Default)]
pub struct StaticLocation {
    route: Route,
}

impl StaticLocation {
    pub fn new(route: impl Into<Route>) -> Self {
        Self {
            route: route.into(),
        }
    }
}

impl LocationSource for StaticLocation {
    fn current_route(&self) -> Route {
        self.route.clone()
    }

    fn subscribe(&self, _on_change: Box<dyn Fn(&Route)>) -> Subscription {
        Subscription::inert()
    }

    fn navigate(&self, target: &Route) {
        tracing::trace!(%target, "navigation ignored by static location");
    }

    fn is_available(&self) -> bool {
        false
    }
}
