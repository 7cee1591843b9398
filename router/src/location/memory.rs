use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use crate::{
    listeners::{DEFAULT_REDIRECT_LIMIT, Listeners, Subscription},
    location::{LocationSource, shows_route},
    route::Route,
};

/// An address bar kept in memory.
///
/// Behaves like a browser's fragment handling: every change pushes a history entry, going
/// back or forward moves through that history, and setting the fragment to the one already
/// shown changes nothing and notifies no one.
pub struct MemoryLocation {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
    listeners: Rc<Listeners>,
}

impl MemoryLocation {
    /// An address bar with no fragment.
    pub fn new() -> Self {
        Self::with_fragment("")
    }

    /// An address bar opened on `fragment`, with or without its leading `#`.
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            entries: RefCell::new(vec![fragment.trim_start_matches('#').to_string()]),
            index: Cell::new(0),
            listeners: Listeners::new(DEFAULT_REDIRECT_LIMIT),
        }
    }

    pub fn with_redirect_limit(self, limit: u32) -> Self {
        self.listeners.set_redirect_limit(limit);
        self
    }

    /// The raw fragment as the address bar shows it, without the marker.
    pub fn fragment(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    /// Simulate the user typing a fragment into the address bar.
    pub fn edit_address_bar(&self, fragment: &str) {
        let fragment = fragment.trim_start_matches('#');
        if self.push(fragment) {
            tracing::debug!(fragment, "address bar edited");
            self.listeners.emit(Route::from_fragment(fragment));
        }
    }

    /// Step back one history entry. Returns `false` at the start of history.
    pub fn back(&self) -> bool {
        let index = self.index.get();
        if index == 0 {
            return false;
        }
        self.move_to(index - 1);
        true
    }

    /// Step forward one history entry. Returns `false` at the end of history.
    pub fn forward(&self) -> bool {
        let index = self.index.get();
        if index + 1 >= self.entries.borrow().len() {
            return false;
        }
        self.move_to(index + 1);
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.index.get() > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index.get() + 1 < self.entries.borrow().len()
    }

    pub fn history_len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn move_to(&self, index: usize) {
        self.index.set(index);
        let route = self.current_route();
        tracing::debug!(%route, index, "history traversal");
        self.listeners.emit(route);
    }

    /// Push `fragment` as a new entry, dropping any forward history. Returns `false` when it
    /// is already the current entry.
    fn push(&self, fragment: &str) -> bool {
        let index = self.index.get();
        let mut entries = self.entries.borrow_mut();
        if entries[index] == fragment {
            return false;
        }
        entries.truncate(index + 1);
        entries.push(fragment.to_string());
        self.index.set(index + 1);
        true
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSource for MemoryLocation {
    fn current_route(&self) -> Route {
        Route::from_fragment(&self.entries.borrow()[self.index.get()])
    }

    fn subscribe(&self, on_change: Box<dyn Fn(&Route)>) -> Subscription {
        self.listeners.subscribe(Rc::from(on_change))
    }

    fn navigate(&self, target: &Route) {
        if shows_route(&self.entries.borrow()[self.index.get()], target) {
            return;
        }
        if !self.listeners.admit_navigation(target) {
            return;
        }
        self.push(target.as_str());
        tracing::debug!(%target, "navigate");
        self.listeners.emit(target.clone());
    }
}

impl fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryLocation")
            .field("fragment", &self.fragment())
            .field("index", &self.index.get())
            .field("history_len", &self.history_len())
            .finish()
    }
}
