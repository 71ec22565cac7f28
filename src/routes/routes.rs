//! Defines routes for catalog content and health probes.
//!
//! ## Structure
//! - **Collection**
//!   - `GET    /contents` — list every item
//!   - `POST   /contents` — create an item
//!
//! - **Item**
//!   - `GET    /contents/{id}` — fetch one item
//!   - `PATCH  /contents/{id}` — full replace of one item
//!   - `DELETE /contents/{id}` — hard delete
//!
//! - **Genres**
//!   - `POST   /contents/{id}/genre` — add tags (JSON array body)
//!   - `DELETE /contents/{id}/genre` — remove tags (JSON array body)

use crate::{
    handlers::{
        content_handlers::{
            add_genres, create_content, delete_content, get_content, list_contents,
            remove_genres, update_content,
        },
        health_handlers::{healthz, readyz},
    },
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the router for every endpoint, wrapped in request tracing.
///
/// The router carries shared state (`AppState`) to all handlers.
pub fn routes() -> Router<AppState> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/contents", get(list_contents).post(create_content))
        .route(
            "/contents/{id}",
            get(get_content).patch(update_content).delete(delete_content),
        )
        .route(
            "/contents/{id}/genre",
            post(add_genres).delete(remove_genres),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::content::Content, test_support::memory_service};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn app_with(empty_list_not_found: bool) -> (Router, AppState) {
        let state = AppState::new(memory_service().await, empty_list_not_found);
        (routes().with_state(state.clone()), state)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    fn json_of(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    async fn create(app: &Router, body: Value) -> Content {
        let (status, bytes) = send(app, Method::POST, "/contents", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_probes_respond() {
        let (app, _) = app_with(false).await;

        let (status, bytes) = send(&app, Method::GET, "/healthz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&bytes)["status"], "ok");

        let (status, bytes) = send(&app, Method::GET, "/readyz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&bytes)["checks"]["sqlite"]["ok"], true);
    }

    #[tokio::test]
    async fn readyz_reports_unavailable_when_pool_closed() {
        let (app, state) = app_with(false).await;
        state.contents.store().db.close().await;

        let (status, bytes) = send(&app, Method::GET, "/readyz", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_of(&bytes)["status"], "error");
    }

    #[tokio::test]
    async fn empty_listing_is_ok_by_default() {
        let (app, _) = app_with(false).await;

        let (status, bytes) = send(&app, Method::GET, "/contents", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&bytes), json!([]));
    }

    #[tokio::test]
    async fn empty_listing_is_not_found_in_legacy_mode() {
        let (app, _) = app_with(true).await;

        let (status, bytes) = send(&app, Method::GET, "/contents", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_of(&bytes)["error"], "not_found");

        create(&app, json!({ "title": "Only one" })).await;
        let (status, bytes) = send(&app, Method::GET, "/contents", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&bytes).as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_get_and_list() {
        let (app, _) = app_with(false).await;
        let created = create(
            &app,
            json!({
                "title": "Coastline",
                "subtitle": "S01E02",
                "imageUrl": "https://img.example/c.png",
                "durationMinutes": 44,
                "startTime": "2026-07-01T18:00:00Z",
                "genres": ["documentary"]
            }),
        )
        .await;
        assert_eq!(created.title.as_deref(), Some("Coastline"));
        assert_eq!(created.genres, vec!["documentary"]);

        let (status, bytes) =
            send(&app, Method::GET, &format!("/contents/{}", created.id), None).await;
        assert_eq!(status, StatusCode::OK);
        let body = json_of(&bytes);
        assert_eq!(body["imageUrl"], "https://img.example/c.png");
        assert_eq!(body["durationMinutes"], 44);
        assert!(body["endTime"].is_null());

        let (status, bytes) = send(&app, Method::GET, "/contents", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&bytes)[0]["id"], created.id.to_string());
    }

    #[tokio::test]
    async fn negative_duration_is_bad_request() {
        let (app, _) = app_with(false).await;

        let (status, bytes) = send(
            &app,
            Method::POST,
            "/contents",
            Some(json!({ "durationMinutes": -10 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&bytes)["error"], "validation_error");

        let created = create(&app, json!({ "durationMinutes": 10 })).await;
        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/contents/{}", created.id),
            Some(json!({ "durationMinutes": -1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn patch_replaces_the_whole_record() {
        let (app, _) = app_with(false).await;
        let created = create(
            &app,
            json!({ "title": "Old", "description": "kept?", "genres": ["a"] }),
        )
        .await;

        let (status, bytes) = send(
            &app,
            Method::PATCH,
            &format!("/contents/{}", created.id),
            Some(json!({ "title": "New" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body = json_of(&bytes);
        assert_eq!(body["id"], created.id.to_string());
        assert_eq!(body["title"], "New");
        assert!(body["description"].is_null());
        assert_eq!(body["genres"], json!([]));
    }

    #[tokio::test]
    async fn delete_returns_id_then_not_found() {
        let (app, _) = app_with(false).await;
        let created = create(&app, json!({ "title": "Gone soon" })).await;
        let uri = format!("/contents/{}", created.id);

        let (status, bytes) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&bytes), json!(created.id.to_string()));

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn genre_endpoints_mutate_the_set() {
        let (app, _) = app_with(false).await;
        let created = create(&app, json!({ "genres": ["a"] })).await;
        let genre_uri = format!("/contents/{}/genre", created.id);
        let item_uri = format!("/contents/{}", created.id);

        let (status, bytes) =
            send(&app, Method::POST, &genre_uri, Some(json!(["b", "a", "b"]))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(bytes.is_empty());

        let (_, bytes) = send(&app, Method::GET, &item_uri, None).await;
        assert_eq!(json_of(&bytes)["genres"], json!(["a", "b"]));

        let (status, bytes) =
            send(&app, Method::DELETE, &genre_uri, Some(json!(["a", "z"]))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(bytes.is_empty());

        let (_, bytes) = send(&app, Method::GET, &item_uri, None).await;
        assert_eq!(json_of(&bytes)["genres"], json!(["b"]));
    }

    #[tokio::test]
    async fn missing_content_is_not_found_on_every_item_route() {
        let (app, _) = app_with(false).await;
        let id = Uuid::new_v4();
        let item_uri = format!("/contents/{id}");
        let genre_uri = format!("/contents/{id}/genre");

        let cases = [
            (Method::GET, item_uri.as_str(), None),
            (Method::PATCH, item_uri.as_str(), Some(json!({ "title": "x" }))),
            (Method::DELETE, item_uri.as_str(), None),
            (Method::POST, genre_uri.as_str(), Some(json!(["x"]))),
            (Method::DELETE, genre_uri.as_str(), Some(json!(["x"]))),
        ];
        for (method, uri, body) in cases {
            let (status, bytes) = send(&app, method.clone(), uri, body).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
            assert_eq!(json_of(&bytes)["error"], "not_found");
        }

        let (_, bytes) = send(&app, Method::GET, "/contents", None).await;
        assert_eq!(json_of(&bytes), json!([]));
    }

    #[tokio::test]
    async fn storage_failure_is_500_without_driver_detail() {
        let (app, state) = app_with(false).await;
        state.contents.store().db.close().await;

        let (status, bytes) = send(&app, Method::GET, "/contents", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_of(&bytes);
        assert_eq!(body["error"], "storage_error");
        assert_eq!(body["detail"], "storage operation failed");
        assert_eq!(body["status"], 500);
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let (app, _) = app_with(false).await;
        let (status, _) = send(&app, Method::GET, "/contents/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
