#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use batepapo::store::Store;
use batepapo::{AppState, app};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub store: Store,
    _dir: TempDir,
}

/// Router plus its store over a throwaway SQLite file.
pub async fn spawn() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("chat.db").display());
    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .unwrap();
    let store = Store::new(pool);
    store.ensure_schema().await.unwrap();
    TestApp {
        app: app(AppState {
            store: store.clone(),
        }),
        store,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn register(&self, name: &str) {
        let (status, _) = self
            .request(post_json("/participants", None, json!({ "name": name })))
            .await;
        assert_eq!(status, StatusCode::CREATED, "registering {name}");
    }

    pub async fn send(&self, user: &str, to: &str, text: &str, kind: &str) {
        let (status, _) = self
            .request(post_json(
                "/messages",
                Some(user),
                json!({ "to": to, "text": text, "type": kind }),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{user} sending {text:?}");
    }

    /// Messages as `user` sees them.
    pub async fn visible(&self, user: &str) -> Vec<Value> {
        let (status, body) = self.request(get("/messages", Some(user))).await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().unwrap().clone()
    }
}

pub fn post_json(path: &str, user: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header("user", user);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn put_json(path: &str, user: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri(path)
        .header(CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header("user", user);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get(path: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(user) = user {
        builder = builder.header("user", user);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn delete(path: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(path);
    if let Some(user) = user {
        builder = builder.header("user", user);
    }
    builder.body(Body::empty()).unwrap()
}
