use std::sync::Arc;

use axum::{middleware, routing::post, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod image_fetch;
pub mod handlers {
    pub mod api_logging;
    pub mod contact;
}
pub mod assets {
    pub mod dev_proxy;
    pub mod spa;
}

use assets::{dev_proxy, spa};
use config::{AppConfig, Environment};
use error::AppError;
use handlers::{api_logging, contact};

pub struct AppState {
    pub config: AppConfig,
    /// Shared client for the development asset bridge.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

async fn api_not_found() -> AppError {
    AppError::NotFound
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/contact", post(contact::submit_contact))
        .fallback(api_not_found);

    let app = Router::new().nest("/api", api_routes);

    // API routes first so the catch-all never shadows them.
    let app = match state.config.environment {
        Environment::Development => {
            tracing::info!(
                "development mode: forwarding page requests to {}",
                state.config.dev_server_url
            );
            app.fallback(dev_proxy::forward_to_dev_server)
        }
        Environment::Production => match spa::resolve_dist_root(&state.config.dist_dir) {
            Some(root) => app.fallback_service(spa::serve_spa(&root)),
            None => app,
        },
    };

    app.layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(middleware::from_fn(api_logging::log_api_requests))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the debug frontend runs on trunk's own port
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
    };
    use std::fs;
    use std::path::Path;
    use tower::ServiceExt; // for `oneshot`

    fn production_config(dist_dir: &Path) -> AppConfig {
        AppConfig {
            port: 0,
            environment: Environment::Production,
            dist_dir: dist_dir.to_path_buf(),
            dev_server_url: config::DEFAULT_DEV_SERVER_URL.to_string(),
            sentry_dsn: None,
        }
    }

    fn site_fixture() -> tempfile::TempDir {
        let dist = tempfile::tempdir().unwrap();
        let public = dist.path().join("public");
        fs::create_dir(&public).unwrap();
        fs::write(public.join("index.html"), "<html>shell</html>").unwrap();
        fs::write(public.join("app.js"), "console.log('app')").unwrap();
        dist
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn contact_round_trip_through_full_router() {
        let dist = site_fixture();
        let app = build_router(Arc::new(AppState::new(production_config(dist.path()))));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"A","email":"a@b.com","message":"hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn deep_links_get_the_page_shell() {
        let dist = site_fixture();
        let app = build_router(Arc::new(AppState::new(production_config(dist.path()))));

        let (status, body) = fetch(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>shell</html>");

        let (status, body) = fetch(app.clone(), "/how-it-works/anything").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>shell</html>");

        let (status, body) = fetch(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('app')");
    }

    #[tokio::test]
    async fn unknown_api_routes_are_json_404s() {
        let dist = site_fixture();
        let app = build_router(Arc::new(AppState::new(production_config(dist.path()))));

        let (status, body) = fetch(app, "/api/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["message"], "Not Found");
    }

    #[tokio::test]
    async fn missing_dist_does_not_stop_the_api() {
        let dist = tempfile::tempdir().unwrap();
        let app = build_router(Arc::new(AppState::new(production_config(
            &dist.path().join("missing"),
        ))));

        let (status, _) = fetch(app.clone(), "/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"A"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    async fn explode() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn panicking_handler_is_answered_and_server_keeps_going() {
        let app: Router = Router::new()
            .route("/boom", get(explode))
            .route("/ok", get(|| async { "ok" }))
            .layer(CatchPanicLayer::custom(error::handle_panic));

        let (status, body) = fetch(app.clone(), "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains(error::INTERNAL_SERVER_ERROR));

        let (status, body) = fetch(app, "/ok").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
