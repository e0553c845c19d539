//! JSON post endpoints.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_shared::dto::{PostPayload, PostResponse};

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts - newest first.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut repo = state.posts.lock().await;
    let posts: Vec<PostResponse> = repo
        .list()
        .await?
        .iter()
        .cloned()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.lock().await.get_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    admin: AdminIdentity,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .lock()
        .await
        .create(body.into_inner().into())
        .await?;

    tracing::debug!(admin_id = %admin.user_id, post_id = %post.id, "Created via API");
    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    _admin: AdminIdentity,
    id: web::Path<Uuid>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .lock()
        .await
        .update(id.into_inner(), body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    _admin: AdminIdentity,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.posts.lock().await.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;

    use crate::handlers::configure_routes;
    use crate::state::testing;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(actix_web::web::Data::new($state.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn payload(title: &str) -> serde_json::Value {
        json!({
            "title": title,
            "content": "# Hello",
            "author": "Cynthia",
            "metaDescription": "A greeting.",
        })
    }

    #[actix_rt::test]
    async fn test_create_requires_token() {
        let state = testing::state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(payload("Hello"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_create_then_fetch_by_slug() {
        let state = testing::state();
        let token = testing::admin_token(&state);
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(payload("Hello World"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri("/api/posts/hello-world")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["title"], "Hello World");
        assert_eq!(body["slug"], "hello-world");
        assert!(body.get("updatedAt").is_none());
    }

    #[actix_rt::test]
    async fn test_missing_fields_are_named() {
        let state = testing::state();
        let token = testing::admin_token(&state);
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "title": "Only a title" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["fields"], json!(["content", "author", "meta_description"]));
    }

    #[actix_rt::test]
    async fn test_unknown_slug_is_404() {
        let state = testing::state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/posts/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_delete_removes_post_from_list() {
        let state = testing::state();
        let token = testing::admin_token(&state);
        let post = state
            .posts
            .lock()
            .await
            .create(quill_core::domain::PostFields {
                title: "Doomed".to_string(),
                content: "x".to_string(),
                author: "A".to_string(),
                image_url: None,
                meta_description: "d".to_string(),
            })
            .await
            .unwrap();
        let app = app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));
    }

    async fn seed(state: &crate::state::AppState, title: &str) -> quill_core::domain::Post {
        state
            .posts
            .lock()
            .await
            .create(quill_core::domain::PostFields {
                title: title.to_string(),
                content: "Draft".to_string(),
                author: "Cynthia".to_string(),
                image_url: None,
                meta_description: "First pass.".to_string(),
            })
            .await
            .unwrap()
    }

    #[actix_rt::test]
    async fn test_update_rewrites_slug_and_keeps_created_at() {
        let state = testing::state();
        let token = testing::admin_token(&state);
        let post = seed(&state, "Rough Notes").await;
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(payload("Polished Notes"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let created_at: chrono::DateTime<chrono::Utc> =
            serde_json::from_value(body["createdAt"].clone()).unwrap();
        assert_eq!(body["id"], json!(post.id));
        assert_eq!(body["slug"], "polished-notes");
        assert_eq!(created_at, post.created_at);
        assert!(body.get("updatedAt").is_some());
    }

    #[actix_rt::test]
    async fn test_update_unknown_id_is_404() {
        let state = testing::state();
        let token = testing::admin_token(&state);
        let app = app!(state);

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(payload("Nowhere"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_long_json_post_is_accepted() {
        let state = testing::state();
        let token = testing::admin_token(&state);
        let app = app!(state);
        let mut body = payload("Long Read");
        body["content"] = json!("word ".repeat(40_000));

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}
