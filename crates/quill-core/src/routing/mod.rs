//! Path-based view routing and navigation state.

mod route;
mod router;

pub use route::{Route, View};
pub use router::{Location, Router};
