use smallvec::SmallVec;

use crate::route::Route;

/// Outcome of looking a route up in a [`RouteTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<V> {
    View(V),
    NotFound,
}

impl<V> Resolution<V> {
    pub fn view(self) -> Option<V> {
        match self {
            Resolution::View(view) => Some(view),
            Resolution::NotFound => None,
        }
    }

    pub fn as_ref(&self) -> Resolution<&V> {
        match self {
            Resolution::View(view) => Resolution::View(view),
            Resolution::NotFound => Resolution::NotFound,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

/// Ordered exact-match patterns, each mapped to a view identifier.
///
/// Patterns carry no parameters or wildcards. When a pattern is registered twice the first
/// registration wins.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    entries: SmallVec<[(Route, V); 8]>,
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    pub fn route(mut self, pattern: impl Into<Route>, view: V) -> Self {
        self.insert(pattern, view);
        self
    }

    pub fn insert(&mut self, pattern: impl Into<Route>, view: V) {
        let pattern = pattern.into();
        if self.entries.iter().any(|(existing, _)| *existing == pattern) {
            tracing::warn!(%pattern, "duplicate route pattern, the first registration wins");
        }
        self.entries.push((pattern, view));
    }

    pub fn lookup(&self, route: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(pattern, _)| pattern.as_str() == route)
            .map(|(_, view)| view)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Route, &V)> {
        self.entries.iter().map(|(pattern, view)| (pattern, view))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().map(|(pattern, _)| pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> RouteTable<V> {
    pub fn resolve(&self, route: &Route) -> Resolution<V> {
        match self.lookup(route.as_str()) {
            Some(view) => Resolution::View(view.clone()),
            None => Resolution::NotFound,
        }
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Into<Route>, V> FromIterator<(R, V)> for RouteTable<V> {
    fn from_iter<I: IntoIterator<Item = (R, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (pattern, view) in iter {
            table.insert(pattern, view);
        }
        table
    }
}
