//! Domain entities - the core business objects.

mod page;
mod post;
mod session;

pub use page::{PageMeta, SiteInfo};
pub use post::{META_DESCRIPTION_MAX, NewPostRecord, Post, PostChanges, PostFields};
pub use session::Session;
