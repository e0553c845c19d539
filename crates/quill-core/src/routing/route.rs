use serde::{Deserialize, Serialize};

const ADMIN_PREFIX: &str = "/admin";
const POST_PREFIX: &str = "/blog/";

/// The branch a path resolves to. Derived from the path alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Admin,
    PublicPost { slug: String },
    PublicList,
}

/// The screen to show once authentication state is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    AdminPanel,
    AdminLogin,
    PublicPost { slug: String },
    PublicList,
}

impl Route {
    /// Resolve a path. First match wins:
    /// `/admin*` is the admin branch, `/blog/<slug>` a single post, and
    /// everything else (including `/` and bare `/blog`) the post list.
    ///
    /// `/blog/` resolves to a post with an empty slug, which never matches
    /// a stored post.
    pub fn resolve(path: &str) -> Self {
        if path.starts_with(ADMIN_PREFIX) {
            return Route::Admin;
        }
        if let Some(slug) = path.strip_prefix(POST_PREFIX) {
            return Route::PublicPost {
                slug: slug.to_string(),
            };
        }
        Route::PublicList
    }

    /// Gate the admin branch on authentication.
    pub fn view(&self, authenticated: bool) -> View {
        match self {
            Route::Admin if authenticated => View::AdminPanel,
            Route::Admin => View::AdminLogin,
            Route::PublicPost { slug } => View::PublicPost { slug: slug.clone() },
            Route::PublicList => View::PublicList,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Admin => ADMIN_PREFIX.to_string(),
            Route::PublicPost { slug } => format!("{POST_PREFIX}{slug}"),
            Route::PublicList => "/blog".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_prefix_wins_regardless_of_suffix() {
        assert_eq!(Route::resolve("/admin"), Route::Admin);
        assert_eq!(Route::resolve("/admin/anything"), Route::Admin);
        assert_eq!(Route::resolve("/admin/blog/x"), Route::Admin);
        assert_eq!(Route::resolve("/administrator"), Route::Admin);
    }

    #[test]
    fn test_blog_slug_is_extracted() {
        assert_eq!(
            Route::resolve("/blog/my-post"),
            Route::PublicPost {
                slug: "my-post".to_string()
            }
        );
    }

    #[test]
    fn test_everything_else_is_the_list() {
        assert_eq!(Route::resolve("/"), Route::PublicList);
        assert_eq!(Route::resolve("/blog"), Route::PublicList);
        assert_eq!(Route::resolve(""), Route::PublicList);
        assert_eq!(Route::resolve("/about"), Route::PublicList);
    }

    #[test]
    fn test_bare_blog_slash_has_empty_slug() {
        assert_eq!(
            Route::resolve("/blog/"),
            Route::PublicPost {
                slug: String::new()
            }
        );
    }

    #[test]
    fn test_admin_view_depends_on_session() {
        assert_eq!(Route::Admin.view(true), View::AdminPanel);
        assert_eq!(Route::Admin.view(false), View::AdminLogin);
        assert_eq!(Route::PublicList.view(true), View::PublicList);
    }

    #[test]
    fn test_path_resolves_back_to_route() {
        let route = Route::PublicPost {
            slug: "herbal-teas".to_string(),
        };
        assert_eq!(Route::resolve(&route.path()), route);
        assert_eq!(Route::resolve(&Route::PublicList.path()), Route::PublicList);
    }
}
