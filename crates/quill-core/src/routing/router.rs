use std::sync::Arc;

use tokio::sync::watch;

use super::Route;
use crate::ports::History;

/// The current path together with the route derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub route: Route,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let route = Route::resolve(&path);
        Self { path, route }
    }
}

/// Navigation state machine.
///
/// In-app navigation and host-reported back/forward both go through
/// [`Route::resolve`], so they always land on the same route for the same
/// path. Observers receive every change on a watch channel. Navigation does
/// no data loading; views react to the new location.
pub struct Router {
    history: Arc<dyn History>,
    state: watch::Sender<Location>,
}

impl Router {
    /// Start at the host's current path.
    pub fn new(history: Arc<dyn History>) -> Self {
        let (state, _) = watch::channel(Location::new(history.current()));
        Self { history, state }
    }

    pub fn location(&self) -> Location {
        self.state.borrow().clone()
    }

    pub fn route(&self) -> Route {
        self.state.borrow().route.clone()
    }

    /// In-app navigation: record the path in history, then update state.
    pub fn navigate(&self, path: &str) -> Route {
        self.history.push(path);
        self.apply(path)
    }

    /// Back/forward reported by the host. History already moved.
    pub fn sync_external(&self, path: &str) -> Route {
        self.apply(path)
    }

    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.state.subscribe()
    }

    fn apply(&self, path: &str) -> Route {
        let location = Location::new(path);
        let route = location.route.clone();
        tracing::debug!(path = %path, route = ?route, "Location changed");
        self.state.send_replace(location);
        route
    }
}
