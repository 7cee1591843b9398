use std::{fmt, rc::Rc};

use crate::{
    listeners::{DEFAULT_REDIRECT_LIMIT, Listeners, Subscription},
    location::{LocationSource, shows_route},
    route::Route,
};

/// The browser's `window.location.hash`.
///
/// Listens for the window's `hashchange` event for as long as it is alive, so back/forward
/// and manual edits reach subscribers the same way [`LocationSource::navigate`] does.
///
/// Without a browser window (native targets, workers, pre-rendering) the source degrades:
/// the route is always `"/"`, subscriptions are inert and navigation does nothing.
pub struct HashLocation {
    address_bar: Option<AddressBar>,
    listeners: Rc<Listeners>,
}

impl HashLocation {
    pub fn new() -> Self {
        Self::with_redirect_limit(DEFAULT_REDIRECT_LIMIT)
    }

    pub fn with_redirect_limit(limit: u32) -> Self {
        let listeners = Listeners::new(limit);
        let address_bar = AddressBar::connect(&listeners);
        if address_bar.is_none() {
            tracing::info!("no address bar available, routing stays on \"/\"");
        }
        Self {
            address_bar,
            listeners,
        }
    }
}

impl Default for HashLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSource for HashLocation {
    fn current_route(&self) -> Route {
        self.address_bar
            .as_ref()
            .and_then(AddressBar::fragment)
            .map(|fragment| Route::from_fragment(&fragment))
            .unwrap_or_default()
    }

    fn subscribe(&self, on_change: Box<dyn Fn(&Route)>) -> Subscription {
        if self.address_bar.is_none() {
            return Subscription::inert();
        }
        self.listeners.subscribe(Rc::from(on_change))
    }

    fn navigate(&self, target: &Route) {
        let Some(address_bar) = &self.address_bar else {
            return;
        };
        if address_bar
            .fragment()
            .is_some_and(|hash| shows_route(&hash, target))
        {
            return;
        }
        if !self.listeners.admit_navigation(target) {
            return;
        }
        tracing::debug!(%target, "navigate");
        // The browser answers with `hashchange`, which is what notifies subscribers.
        address_bar.set_fragment(target);
    }

    fn is_available(&self) -> bool {
        self.address_bar.is_some()
    }
}

impl fmt::Debug for HashLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashLocation")
            .field("available", &self.address_bar.is_some())
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(target_arch = "wasm32")]
use browser::AddressBar;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, closure::Closure};

    use crate::{listeners::Listeners, route::Route};

    const HASH_CHANGE: &str = "hashchange";

    pub(super) struct AddressBar {
        window: web_sys::Window,
        on_hash_change: Closure<dyn FnMut()>,
    }

    impl AddressBar {
        pub(super) fn connect(listeners: &Rc<Listeners>) -> Option<Self> {
            let window = web_sys::window()?;
            window.location().hash().ok()?;

            let on_hash_change = {
                let listeners = Rc::downgrade(listeners);
                let window = window.clone();
                Closure::<dyn FnMut()>::new(move || {
                    let Some(listeners) = listeners.upgrade() else {
                        return;
                    };
                    let hash = window.location().hash().unwrap_or_default();
                    listeners.emit(Route::from_fragment(&hash));
                })
            };
            if let Err(err) = window.add_event_listener_with_callback(
                HASH_CHANGE,
                on_hash_change.as_ref().unchecked_ref(),
            ) {
                tracing::warn!(?err, "failed to listen for hashchange");
                return None;
            }

            Some(Self {
                window,
                on_hash_change,
            })
        }

        pub(super) fn fragment(&self) -> Option<String> {
            self.window.location().hash().ok()
        }

        pub(super) fn set_fragment(&self, route: &Route) {
            if let Err(err) = self.window.location().set_hash(route.as_str()) {
                tracing::warn!(?err, %route, "failed to set location hash");
            }
        }
    }

    impl Drop for AddressBar {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                HASH_CHANGE,
                self.on_hash_change.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
use native::AddressBar;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::rc::Rc;

    use crate::{listeners::Listeners, route::Route};

    /// No address bar exists off the web.
    pub(super) enum AddressBar {}

    impl AddressBar {
        pub(super) fn connect(_listeners: &Rc<Listeners>) -> Option<Self> {
            None
        }

        pub(super) fn fragment(&self) -> Option<String> {
            match *self {}
        }

        pub(super) fn set_fragment(&self, _route: &Route) {
            match *self {}
        }
    }
}
