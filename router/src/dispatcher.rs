use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    error::RouterError,
    listeners::Subscription,
    location::LocationSource,
    route::Route,
    table::{Resolution, RouteTable},
};

/// What the dispatcher shows for a route that matches no pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fallback<V> {
    /// Mount nothing.
    Blank,
    /// Ask the location to go to another route, which must itself match a pattern.
    Redirect(Route),
    /// Mount this view and leave the address bar as it is.
    View(V),
}

impl<V> Default for Fallback<V> {
    fn default() -> Self {
        Fallback::Blank
    }
}

/// Keeps exactly one view of a [`RouteTable`] mounted for the current route.
///
/// The dispatcher resolves the location's route once when it is created and again on every
/// change the location reports. Each resolution depends on the route alone. Only the selected
/// view is handed to the mount callback, and only when the selection actually changes.
///
/// Dropping the dispatcher drops its subscription.
pub struct Dispatcher<V: 'static> {
    location: Rc<dyn LocationSource>,
    state: Rc<DispatchState<V>>,
    subscription: Subscription,
}

struct DispatchState<V> {
    table: RouteTable<V>,
    fallback: Fallback<V>,
    location: Weak<dyn LocationSource>,
    route: RefCell<Route>,
    resolution: RefCell<Resolution<V>>,
    mounted: RefCell<Option<V>>,
    mounts: Cell<usize>,
    mount: Box<dyn Fn(Option<&V>)>,
}

impl<V> Dispatcher<V>
where
    V: Clone + PartialEq + fmt::Debug + 'static,
{
    pub fn new(
        location: Rc<dyn LocationSource>,
        table: RouteTable<V>,
        fallback: Fallback<V>,
        mount: impl Fn(Option<&V>) + 'static,
    ) -> Result<Self, RouterError> {
        if table.is_empty() {
            return Err(RouterError::EmptyTable);
        }
        if let Fallback::Redirect(target) = &fallback {
            if table.resolve(target).is_not_found() {
                return Err(RouterError::UnmatchedRedirect(target.clone()));
            }
        }

        let state = Rc::new(DispatchState {
            table,
            fallback,
            location: Rc::downgrade(&location),
            route: RefCell::new(Route::root()),
            resolution: RefCell::new(Resolution::NotFound),
            mounted: RefCell::new(None),
            mounts: Cell::new(0),
            mount: Box::new(mount),
        });

        // Subscribe before the first resolution so a redirect issued by it is observed.
        let subscription = location.subscribe(Box::new({
            let state = Rc::downgrade(&state);
            move |route: &Route| {
                if let Some(state) = state.upgrade() {
                    state.apply(route.clone());
                }
            }
        }));
        state.apply(location.current_route());

        Ok(Self {
            location,
            state,
            subscription,
        })
    }

    /// Look `route` up without touching what is mounted.
    pub fn resolve(&self, route: &Route) -> Resolution<V> {
        self.state.table.resolve(route)
    }

    /// The view currently mounted, after the fallback policy was applied.
    pub fn view(&self) -> Option<V> {
        self.state.mounted.borrow().clone()
    }

    /// The resolution of the last route seen, before the fallback policy.
    pub fn resolution(&self) -> Resolution<V> {
        self.state.resolution.borrow().clone()
    }

    pub fn current_route(&self) -> Route {
        self.state.route.borrow().clone()
    }

    /// How many times the mount callback ran.
    pub fn mount_count(&self) -> usize {
        self.state.mounts.get()
    }

    pub fn navigate(&self, target: impl Into<Route>) {
        self.location.navigate(&target.into());
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.state.table
    }

    pub fn location(&self) -> &Rc<dyn LocationSource> {
        &self.location
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stop following the location. The mounted view stays as it is.
    pub fn dispose(self) {
        self.subscription.unsubscribe();
    }
}

impl<V> DispatchState<V>
where
    V: Clone + PartialEq + fmt::Debug + 'static,
{
    fn apply(&self, route: Route) {
        let resolution = self.table.resolve(&route);
        *self.route.borrow_mut() = route.clone();
        *self.resolution.borrow_mut() = resolution.clone();

        let selected = match resolution {
            Resolution::View(view) => Some(view),
            Resolution::NotFound => match &self.fallback {
                Fallback::Blank => None,
                Fallback::View(view) => Some(view.clone()),
                Fallback::Redirect(target) => {
                    tracing::debug!(%route, %target, "unmatched route, redirecting");
                    // The redirected change comes back through the subscription.
                    if let Some(location) = self.location.upgrade() {
                        location.navigate(target);
                    }
                    return;
                }
            },
        };

        if self.mounts.get() > 0 && *self.mounted.borrow() == selected {
            tracing::trace!(%route, "view unchanged");
            return;
        }

        tracing::debug!(%route, view = ?selected, "mounting view");
        *self.mounted.borrow_mut() = selected.clone();
        self.mounts.set(self.mounts.get() + 1);
        (self.mount)(selected.as_ref());
    }
}

impl<V: fmt::Debug + 'static> fmt::Debug for Dispatcher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("route", &*self.state.route.borrow())
            .field("mounted", &*self.state.mounted.borrow())
            .field("subscription", &self.subscription)
            .finish()
    }
}
