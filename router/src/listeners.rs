use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt,
    rc::{Rc, Weak},
};

use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::route::Route;

/// How many navigations change callbacks may chain off a single outside change before
/// further navigations from inside callbacks are dropped.
pub const DEFAULT_REDIRECT_LIMIT: u32 = 25;

slotmap::new_key_type! {
    pub(crate) struct ListenerId;
}

pub(crate) type Callback = Rc<dyn Fn(&Route)>;

/// The change-notification core shared by every location source.
///
/// Delivery is FIFO. A change emitted while another one is still being delivered is queued
/// and delivered once every subscriber has seen the current one, so a callback that
/// navigates never re-enters the callbacks synchronously.
pub(crate) struct Listeners {
    callbacks: RefCell<SlotMap<ListenerId, Callback>>,
    /// Live ids in registration order. Slot order is not registration order once keys are
    /// reused.
    order: RefCell<SmallVec<[ListenerId; 4]>>,
    queue: RefCell<VecDeque<Route>>,
    delivering: Cell<bool>,
    /// Navigations issued from inside callbacks since the last outside change.
    chain: Cell<u32>,
    /// A navigation was issued from a callback and its change has not been delivered yet.
    chained_pending: Cell<bool>,
    redirect_limit: Cell<u32>,
}

impl Listeners {
    pub(crate) fn new(redirect_limit: u32) -> Rc<Self> {
        Rc::new(Self {
            callbacks: RefCell::new(SlotMap::with_key()),
            order: RefCell::new(SmallVec::new()),
            queue: RefCell::new(VecDeque::new()),
            delivering: Cell::new(false),
            chain: Cell::new(0),
            chained_pending: Cell::new(false),
            redirect_limit: Cell::new(redirect_limit),
        })
    }

    pub(crate) fn subscribe(self: &Rc<Self>, callback: Callback) -> Subscription {
        let id = self.callbacks.borrow_mut().insert(callback);
        self.order.borrow_mut().push(id);
        tracing::trace!(?id, "location subscriber added");
        Subscription {
            listeners: Rc::downgrade(self),
            id: Cell::new(Some(id)),
        }
    }

    fn remove(&self, id: ListenerId) {
        if self.callbacks.borrow_mut().remove(id).is_some() {
            self.order.borrow_mut().retain(|live| *live != id);
            tracing::trace!(?id, "location subscriber removed");
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub(crate) fn is_delivering(&self) -> bool {
        self.delivering.get()
    }

    pub(crate) fn set_redirect_limit(&self, limit: u32) {
        self.redirect_limit.set(limit);
    }

    /// Decide whether a navigation request may proceed.
    ///
    /// Requests from outside a callback always proceed and start a fresh chain. Requests from
    /// inside a callback extend the current chain and are refused past the redirect limit.
    pub(crate) fn admit_navigation(&self, target: &Route) -> bool {
        if !self.delivering.get() {
            self.chain.set(0);
            self.chained_pending.set(false);
            return true;
        }

        let next = self.chain.get() + 1;
        if next > self.redirect_limit.get() {
            tracing::warn!(
                %target,
                limit = self.redirect_limit.get(),
                "navigation from a change callback dropped: redirect limit reached"
            );
            return false;
        }
        self.chain.set(next);
        self.chained_pending.set(true);
        true
    }

    /// Deliver a change to every subscriber, or queue it if a delivery is in progress.
    pub(crate) fn emit(&self, route: Route) {
        if self.delivering.get() {
            tracing::trace!(%route, "change queued behind current delivery");
            self.queue.borrow_mut().push_back(route);
            return;
        }

        if !self.chained_pending.replace(false) {
            self.chain.set(0);
        }

        self.delivering.set(true);
        self.deliver(&route);
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(next) = next else {
                break;
            };
            self.chained_pending.set(false);
            self.deliver(&next);
        }
        self.delivering.set(false);
    }

    fn deliver(&self, route: &Route) {
        // Snapshot first so callbacks are free to subscribe and unsubscribe.
        let snapshot: SmallVec<[(ListenerId, Callback); 4]> = {
            let callbacks = self.callbacks.borrow();
            self.order
                .borrow()
                .iter()
                .filter_map(|id| Some((*id, callbacks.get(*id)?.clone())))
                .collect()
        };

        tracing::trace!(%route, subscribers = snapshot.len(), "delivering route change");
        for (id, callback) in snapshot {
            // Skip anything unsubscribed by an earlier callback of this same delivery.
            if self.callbacks.borrow().contains_key(id) {
                callback(route);
            }
        }
    }
}

/// Handle for a registered change callback.
///
/// [`Subscription::unsubscribe`] removes the callback; calling it again is a no-op, and it
/// is safe to call from inside the callback itself. Dropping the handle unsubscribes too.
#[must_use = "dropping a Subscription unsubscribes its callback"]
pub struct Subscription {
    listeners: Weak<Listeners>,
    id: Cell<Option<ListenerId>>,
}

impl Subscription {
    /// A handle that is not connected to anything, handed out when no address bar exists.
    pub fn inert() -> Self {
        Self {
            listeners: Weak::new(),
            id: Cell::new(None),
        }
    }

    pub fn unsubscribe(&self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.remove(id);
        }
    }

    pub fn is_active(&self) -> bool {
        match (self.id.get(), self.listeners.upgrade()) {
            (Some(id), Some(listeners)) => listeners.callbacks.borrow().contains_key(id),
            _ => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
