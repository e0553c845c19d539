//! HTML pages: the public blog and the admin panel.
//!
//! Every GET that no other route claims is resolved by path into a view.
//! The admin forms post back to dedicated routes and redirect to `/admin`.

use actix_web::{
    HttpRequest, HttpResponse,
    cookie::{Cookie, SameSite, time::Duration},
    http::{Method, StatusCode, header},
    web,
};
use askama::Template;
use serde::Deserialize;
use uuid::Uuid;

use quill_core::domain::PostFields;
use quill_core::error::DomainError;
use quill_core::ports::AuthError;
use quill_core::routing::Route;
use quill_core::services::{PostRepository, ViewData, load_view};

use crate::middleware::auth::{OptionalAdmin, SESSION_COOKIE};
use crate::state::AppState;
use crate::views::UnavailableTemplate;
use crate::views::admin::{LoginTemplate, PanelTemplate, PostForm};
use crate::views::public::{PostListTemplate, PostNotFoundTemplate, PostTemplate};

const ADMIN_HOME: &str = "/admin";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

fn html(status: StatusCode, page: impl Template) -> HttpResponse {
    match page.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            tracing::error!("Template rendering failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn unavailable(state: &AppState) -> HttpResponse {
    html(
        StatusCode::SERVICE_UNAVAILABLE,
        UnavailableTemplate::new(&state.site),
    )
}

/// Resolve the request path into a view and render it.
pub async fn dispatch(
    req: HttpRequest,
    admin: OptionalAdmin,
    state: web::Data<AppState>,
) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::MethodNotAllowed()
            .insert_header((header::ALLOW, "GET, HEAD"))
            .finish();
    }

    let OptionalAdmin(admin) = admin;
    let view = Route::resolve(req.path()).view(admin.is_some());

    let data = {
        let mut repo = state.posts.lock().await;
        load_view(&mut repo, view, &state.site).await
    };

    let site = &state.site;
    match data {
        Ok(ViewData::AdminLogin) => html(StatusCode::OK, LoginTemplate::new(site, None)),
        Ok(ViewData::AdminPanel { posts }) => {
            let email = admin.map(|a| a.email).unwrap_or_default();
            let form = PostForm::blank(&state.default_author);
            html(
                StatusCode::OK,
                PanelTemplate::new(site, &email, &posts, form),
            )
        }
        Ok(ViewData::PublicList { posts, meta }) => html(
            StatusCode::OK,
            PostListTemplate::new(site, &meta, &posts),
        ),
        Ok(ViewData::PublicPost { post, body, meta }) => {
            html(StatusCode::OK, PostTemplate::new(&meta, &post, body))
        }
        Ok(ViewData::PostNotFound { slug }) => html(
            StatusCode::NOT_FOUND,
            PostNotFoundTemplate::new(site, &slug),
        ),
        Err(_) => unavailable(&state),
    }
}

/// POST /admin/login
pub async fn admin_login(state: web::Data<AppState>, form: web::Form<LoginForm>) -> HttpResponse {
    let LoginForm { email, password } = form.into_inner();

    match state.identity.authenticate(&email, &password) {
        Ok(session) => {
            tracing::info!(email = %session.email, "Admin signed in");
            let cookie = Cookie::build(SESSION_COOKIE, session.token)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(Duration::seconds(state.identity.token_lifetime_seconds()))
                .finish();

            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, ADMIN_HOME))
                .cookie(cookie)
                .finish()
        }
        Err(AuthError::HashingError(msg)) => {
            tracing::error!("Password verification failed: {}", msg);
            unavailable(&state)
        }
        Err(err) => {
            tracing::warn!(email = %email, error = %err, "Rejected admin sign-in");
            html(
                StatusCode::UNAUTHORIZED,
                LoginTemplate::new(&state.site, Some("Failed to log in. Check your credentials.")),
            )
        }
    }
}

/// POST /admin/logout
pub async fn admin_logout() -> HttpResponse {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, ADMIN_HOME))
        .cookie(cookie)
        .finish()
}

/// Re-render the panel around `form`, with a fresh post list.
async fn panel(
    state: &AppState,
    repo: &mut PostRepository,
    email: &str,
    form: PostForm,
    status: StatusCode,
) -> HttpResponse {
    match repo.list().await {
        Ok(posts) => html(status, PanelTemplate::new(&state.site, email, posts, form)),
        Err(_) => unavailable(state),
    }
}

/// Map a failed mutation onto a page. Validation keeps the submitted form.
async fn mutation_failed(
    state: &AppState,
    repo: &mut PostRepository,
    email: &str,
    form: PostForm,
    err: DomainError,
) -> HttpResponse {
    match err {
        DomainError::Validation(validation) => {
            let form = form.with_error(format!("Please fix the post: {validation}."));
            panel(state, repo, email, form, StatusCode::UNPROCESSABLE_ENTITY).await
        }
        DomainError::NotFound { .. } => {
            let form = PostForm::blank(&state.default_author).with_error("That post no longer exists.");
            panel(state, repo, email, form, StatusCode::NOT_FOUND).await
        }
        _ => unavailable(state),
    }
}

/// POST /admin/posts
pub async fn create_post(
    state: web::Data<AppState>,
    admin: OptionalAdmin,
    form: web::Form<PostFields>,
) -> HttpResponse {
    let Some(admin) = admin.0 else {
        return see_other(ADMIN_HOME);
    };
    let fields = form.into_inner();

    let mut repo = state.posts.lock().await;
    match repo.create(fields.clone()).await {
        Ok(_) => see_other(ADMIN_HOME),
        Err(err) => {
            let form = PostForm {
                fields,
                ..PostForm::default()
            };
            mutation_failed(&state, &mut repo, &admin.email, form, err).await
        }
    }
}

/// GET /admin/posts/{id}/edit
pub async fn edit_post(
    state: web::Data<AppState>,
    admin: OptionalAdmin,
    id: web::Path<Uuid>,
) -> HttpResponse {
    let Some(admin) = admin.0 else {
        return see_other(ADMIN_HOME);
    };

    let mut repo = state.posts.lock().await;
    match repo.get(id.into_inner()).await {
        Ok(post) => {
            let form = PostForm::editing(&post);
            panel(&state, &mut repo, &admin.email, form, StatusCode::OK).await
        }
        Err(err) => {
            let form = PostForm::blank(&state.default_author);
            mutation_failed(&state, &mut repo, &admin.email, form, err).await
        }
    }
}

/// POST /admin/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    admin: OptionalAdmin,
    id: web::Path<Uuid>,
    form: web::Form<PostFields>,
) -> HttpResponse {
    let Some(admin) = admin.0 else {
        return see_other(ADMIN_HOME);
    };
    let id = id.into_inner();
    let fields = form.into_inner();

    let mut repo = state.posts.lock().await;
    match repo.update(id, fields.clone()).await {
        Ok(_) => see_other(ADMIN_HOME),
        Err(err) => {
            let form = PostForm {
                editing: Some(id),
                fields,
                error: None,
            };
            mutation_failed(&state, &mut repo, &admin.email, form, err).await
        }
    }
}

/// POST /admin/posts/{id}/delete
pub async fn delete_post(
    state: web::Data<AppState>,
    admin: OptionalAdmin,
    id: web::Path<Uuid>,
) -> HttpResponse {
    if admin.0.is_none() {
        return see_other(ADMIN_HOME);
    }

    match state.posts.lock().await.delete(id.into_inner()).await {
        Ok(()) => see_other(ADMIN_HOME),
        Err(_) => unavailable(&state),
    }
}
