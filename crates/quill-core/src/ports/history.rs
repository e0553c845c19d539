/// Navigation history owned by the host (the browser in a client build).
pub trait History: Send + Sync {
    /// Record a new entry and make it current.
    fn push(&self, path: &str);

    /// The path of the current entry.
    fn current(&self) -> String;
}
