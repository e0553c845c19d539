//! HTTP handlers and route configuration.

mod auth;
mod health;
mod pages;
mod posts;

use actix_web::web;

/// Upper bound for post bodies, form or JSON.
pub const POST_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/auth/login", web::post().to(auth::login))
            .service(
                web::scope("/posts")
                    .app_data(web::JsonConfig::default().limit(POST_BODY_LIMIT))
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{slug}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    )
    .service(
        web::scope("/admin")
            .app_data(web::FormConfig::default().limit(POST_BODY_LIMIT))
            .route("/login", web::post().to(pages::admin_login))
            .route("/logout", web::post().to(pages::admin_logout))
            .route("/posts", web::post().to(pages::create_post))
            .route("/posts/{id}", web::post().to(pages::update_post))
            .route("/posts/{id}/edit", web::get().to(pages::edit_post))
            .route("/posts/{id}/delete", web::post().to(pages::delete_post))
            // Remaining /admin paths resolve through the view router.
            .default_service(web::to(pages::dispatch)),
    )
    .default_service(web::to(pages::dispatch));
}
