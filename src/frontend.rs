use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Chat page and its assets, embedded at build time
#[derive(RustEmbed)]
#[folder = "public"]
pub struct Assets;

pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = Assets::get(path) {
        return serve_asset(path, content.data.into_owned());
    }

    // Directory index
    let index_path = if path.is_empty() {
        "index.html".to_string()
    } else {
        format!("{}/index.html", path.trim_end_matches('/'))
    };
    if let Some(content) = Assets::get(&index_path) {
        return serve_asset(&index_path, content.data.into_owned());
    }

    // Missing assets are a real 404; other paths get the chat page
    if !looks_like_asset(path) {
        if let Some(content) = Assets::get("index.html") {
            return serve_asset("index.html", content.data.into_owned());
        }
    }

    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

fn serve_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    (
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, cache_control_value(path).to_string()),
        ],
        data,
    )
        .into_response()
}

fn cache_control_value(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "public, max-age=0, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

fn looks_like_asset(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .map(|segment| segment.contains('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().fallback(get(serve_frontend))
    }

    async fn get_path(path: &str) -> Response {
        app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn root_serves_chat_page() {
        let response = get_path("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    #[tokio::test]
    async fn unknown_page_falls_back_to_index() {
        assert_eq!(get_path("/some/page").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_asset_is_not_found() {
        assert_eq!(get_path("/missing.js").await.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_cache_control() {
        assert_eq!(cache_control_value("index.html"), "public, max-age=0, must-revalidate");
        assert_eq!(cache_control_value("app.js"), "public, max-age=3600");
    }
}
