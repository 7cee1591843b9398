//! # Hash routing for BC Bites
//!
//! The two halves of client-side navigation:
//!
//! - a [`LocationSource`] turns the address-bar fragment into a [`Route`], tells subscribers
//!   when it changes and accepts navigation requests;
//! - a [`Dispatcher`] resolves each route against a fixed [`RouteTable`] and keeps exactly
//!   one view mounted, or a [`Fallback`] when nothing matches.
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use bcbites_router::{Dispatcher, Fallback, LocationSource, MemoryLocation, RouteTable};
//!
//! let location: Rc<dyn LocationSource> = Rc::new(MemoryLocation::new());
//! let table = RouteTable::new().route("/", "home").route("/about", "about");
//! let dispatcher = Dispatcher::new(location.clone(), table, Fallback::Blank, |_| {}).unwrap();
//! assert_eq!(dispatcher.view(), Some("home"));
//!
//! dispatcher.navigate("/about");
//! assert_eq!(dispatcher.view(), Some("about"));
//! ```
//!
//! Everything here is single-threaded and `Rc` based, meant to live on the UI thread.

mod dispatcher;
mod error;
mod listeners;
mod route;
mod table;

pub mod location;

pub use dispatcher::{Dispatcher, Fallback};
pub use error::RouterError;
pub use listeners::{DEFAULT_REDIRECT_LIMIT, Subscription};
pub use location::{HashLocation, LocationSource, MemoryLocation, StaticLocation};
pub use route::Route;
pub use table::{Resolution, RouteTable};
