//! In-process navigation history with back/forward.

use std::sync::Mutex;

use quill_core::ports::History;

struct Entries {
    paths: Vec<String>,
    cursor: usize,
}

/// Browser-style history stack. Pushing discards any forward entries.
pub struct InMemoryHistory {
    entries: Mutex<Entries>,
}

impl InMemoryHistory {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(Entries {
                paths: vec![initial_path.into()],
                cursor: 0,
            }),
        }
    }

    /// Step back; the new current path, if there was one to go to.
    pub fn back(&self) -> Option<String> {
        let mut entries = self.lock();
        if entries.cursor == 0 {
            return None;
        }
        entries.cursor -= 1;
        Some(entries.paths[entries.cursor].clone())
    }

    /// Step forward; the new current path, if there was one to go to.
    pub fn forward(&self) -> Option<String> {
        let mut entries = self.lock();
        if entries.cursor + 1 >= entries.paths.len() {
            return None;
        }
        entries.cursor += 1;
        Some(entries.paths[entries.cursor].clone())
    }

    pub fn len(&self) -> usize {
        self.lock().paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().paths.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        // Entries stay consistent even if a holder panicked.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for InMemoryHistory {
    fn push(&self, path: &str) {
        let mut entries = self.lock();
        let keep = entries.cursor + 1;
        entries.paths.truncate(keep);
        entries.paths.push(path.to_string());
        entries.cursor = keep;
    }

    fn current(&self) -> String {
        let entries = self.lock();
        entries.paths[entries.cursor].clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quill_core::{Route, Router};

    use super::*;

    #[test]
    fn test_back_and_forward() {
        let history = InMemoryHistory::new("/");
        history.push("/blog/a");
        history.push("/blog/b");

        assert_eq!(history.back().as_deref(), Some("/blog/a"));
        assert_eq!(history.back().as_deref(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward().as_deref(), Some("/blog/a"));
        assert_eq!(history.current(), "/blog/a");
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let history = InMemoryHistory::new("/");
        history.push("/blog/a");
        history.back();
        history.push("/admin");

        assert_eq!(history.len(), 2);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_router_follows_back_navigation() {
        let history = Arc::new(InMemoryHistory::new("/"));
        let router = Router::new(history.clone());

        router.navigate("/blog/first-post");
        router.navigate("/admin");

        let previous = history.back().unwrap();
        let route = router.sync_external(&previous);

        assert_eq!(
            route,
            Route::PublicPost {
                slug: "first-post".to_string()
            }
        );
        assert_eq!(history.len(), 3);
    }
}
