//! HTTP surface: the server-rendered page plus its embedded assets.
//!
//! `GET /` renders the same `App` tree the wasm client mounts, wrapped in a
//! document shell that carries the initial `data-theme` attribute and the
//! `#main` mount point. Without the client the page is complete but static;
//! a `<noscript>` rule keeps every section visible in that case.

pub mod assets;

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use dioxus::prelude::*;
use serde_json::json;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::app::content::OWNER_NAME;
use crate::app::{App, MOUNT_POINT_ID};
use crate::config::Config;
use crate::view_state::theme::THEME_ATTRIBUTE;
use crate::view_state::Theme;
use assets::{FAVICON_DATA_URL, FAVICON_SVG, STYLESHEET_CSS};

/// Shared state for handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let client_dir = state.config.client_dir.clone();
    if !client_dir.is_dir() {
        tracing::info!(
            "Client bundle dir {} not found, serving static page only",
            client_dir.display()
        );
    }

    Router::new()
        // Page
        .route("/", get(index_page))
        // Health check
        .route("/status", get(status_handler))
        // Embedded assets
        .route("/assets/portfolio.css", get(stylesheet_handler))
        .route("/favicon.svg", get(favicon_handler))
        // Compiled web client (dx build output)
        .nest_service("/assets/client", ServeDir::new(client_dir))
        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Render the full HTML document for the page.
pub fn render_document(config: &Config) -> String {
    let body = dioxus::ssr::render_element(rsx! { App {} });
    let theme = Theme::default();
    let favicon = FAVICON_DATA_URL.as_str();
    let client_script = config
        .client_script
        .as_deref()
        .map(|src| format!(r#"<script type="module" src="{src}"></script>"#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" {THEME_ATTRIBUTE}="{theme}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{OWNER_NAME} - Portfolio</title>
    <link rel="icon" type="image/svg+xml" href="{favicon}">
    <link rel="stylesheet" href="/assets/portfolio.css">
    <noscript><style>section {{ opacity: 1; transform: none; }}</style></noscript>
    {client_script}
</head>
<body>
    <div id="{MOUNT_POINT_ID}">{body}</div>
</body>
</html>"#
    )
}

/// GET / - The portfolio page
pub async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_document(&state.config))
}

/// GET /status - Health check with build metadata
pub async fn status_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("PORTFOLIO_VERSION"),
        "git_sha": env!("PORTFOLIO_GIT_SHA"),
    }))
}

/// GET /assets/portfolio.css
pub async fn stylesheet_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET_CSS,
    )
}

/// GET /favicon.svg
pub async fn favicon_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], FAVICON_SVG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::content::{NAV_LINKS, SECTION_IDS};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        router(AppState::new(Config::default()))
    }

    async fn get_body(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_document_shell() {
        let html = render_document(&Config::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(html.contains(r#"<div id="main">"#));
        assert!(html.contains(r#"href="/assets/portfolio.css""#));
        assert!(html.contains("data:image/svg+xml;base64,"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_document_includes_client_script_when_configured() {
        let config = Config {
            client_script: Some("/assets/client/portfolio.js".to_string()),
            ..Config::default()
        };
        let html = render_document(&config);
        assert!(html.contains(r#"<script type="module" src="/assets/client/portfolio.js"></script>"#));
    }

    #[test]
    fn test_rendered_page_has_every_section_and_anchor() {
        let html = render_document(&Config::default());
        for id in SECTION_IDS {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section #{id}");
        }
        for link in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href)));
        }
        assert!(html.contains("href=\"#home\""));
        assert!(html.contains("mailto:akhilesh@example.com"));
        assert!(html.contains("Switch to dark mode"));
    }

    #[test]
    fn test_only_home_rendered_revealed() {
        let html = render_document(&Config::default());
        assert!(html.contains(r#"class="hero visible""#));
        assert_eq!(html.matches("visible").count(), 1);
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, content_type, body) = get_body("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Crafting Digital Solutions"));
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let (status, _, body) = get_body("/status").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["version"].is_string());
        assert!(json["git_sha"].is_string());
    }

    #[tokio::test]
    async fn test_stylesheet_served_as_css() {
        let (status, content_type, body) = get_body("/assets/portfolio.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/css; charset=utf-8"));
        assert_eq!(body, STYLESHEET_CSS);
    }

    #[tokio::test]
    async fn test_favicon_served_as_svg() {
        let (status, content_type, _) = get_body("/favicon.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _, _) = get_body("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
