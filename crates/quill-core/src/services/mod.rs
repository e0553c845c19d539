//! Application services built on the ports.

mod context;
mod posts;
mod views;

pub use context::AppContext;
pub use posts::PostRepository;
pub use views::{ViewData, load_view};
