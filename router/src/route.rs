use std::{borrow::Borrow, fmt, ops::Deref, rc::Rc};

/// A normalized address fragment.
///
/// A `Route` never starts with the `#` fragment marker, and an empty fragment is always the
/// root route `"/"`. Values are immutable and cheap to clone; every change of the address bar
/// produces a fresh one.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Route(Rc<str>);

impl Route {
    pub const ROOT: &'static str = "/";

    /// The default route, used when the address bar carries no fragment.
    pub fn root() -> Self {
        Route(Rc::from(Self::ROOT))
    }

    /// Normalize a raw fragment, as read from the address bar, into a route.
    ///
    /// Every leading `#` is stripped so that normalizing an already normalized route is a
    /// no-op. Anything else is kept verbatim: `"about"` stays `"about"` and will not match
    /// a `"/about"` pattern.
    pub fn from_fragment(fragment: &str) -> Self {
        let stripped = fragment.trim_start_matches('#');
        if stripped.is_empty() {
            Self::root()
        } else {
            Route(Rc::from(stripped))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == Self::ROOT
    }

    /// The fragment to write into the address bar, including the marker.
    pub fn to_fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::root()
    }
}

impl Deref for Route {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Route {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Route {
    fn from(fragment: &str) -> Self {
        Route::from_fragment(fragment)
    }
}

impl From<String> for Route {
    fn from(fragment: String) -> Self {
        Route::from_fragment(&fragment)
    }
}

impl PartialEq<str> for Route {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Route {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route({:?})", &*self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Route {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fragment = String::deserialize(deserializer)?;
        Ok(Route::from_fragment(&fragment))
    }
}
