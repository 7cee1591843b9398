//! Sources of the current route.
//!
//! A [`LocationSource`] owns the address bar: it reports the current [`Route`], notifies
//! subscribers when the fragment changes, and accepts navigation requests. Navigation never
//! calls subscribers directly; the change reaches them through the same path as a change
//! made by the user (back/forward buttons, editing the address bar).
//!
//! - [`HashLocation`] reads and writes the browser's `window.location.hash`.
//! - [`MemoryLocation`] keeps the fragment and its history in memory.
//! - [`StaticLocation`] pins a single route and ignores navigation.

mod fixed;
mod hash;
mod memory;

pub use fixed::StaticLocation;
pub use hash::HashLocation;
pub use memory::MemoryLocation;

use crate::{listeners::Subscription, route::Route};

pub trait LocationSource {
    /// The route derived from the fragment currently in the address bar.
    fn current_route(&self) -> Route;

    /// Register `on_change` to be called with the new route after every fragment change.
    fn subscribe(&self, on_change: Box<dyn Fn(&Route)>) -> Subscription;

    /// Ask for the address bar to show `target`.
    fn navigate(&self, target: &Route);

    /// Whether a live address bar backs this source.
    fn is_available(&self) -> bool {
        true
    }
}

impl dyn LocationSource {
    /// Convenience over [`LocationSource::subscribe`] taking an unboxed closure.
    pub fn on_change(&self, on_change: impl Fn(&Route) + 'static) -> Subscription {
        self.subscribe(Box::new(on_change))
    }
}

/// Whether the address bar showing `fragment` already shows `target`.
///
/// The raw fragment is compared, as a browser does: an empty fragment does not show `#/`,
/// so navigating there is a change even though both normalize to `/`.
pub(crate) fn shows_route(fragment: &str, target: &Route) -> bool {
    fragment.trim_start_matches('#') == target.as_str()
}
