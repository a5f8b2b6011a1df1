use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::{error::AppError, AppState};

const MAX_FORWARDED_BODY: usize = 2 * 1024 * 1024;

pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path_and_query)
}

/// Forwards a non-API request to the trunk dev server and relays the
/// answer, so the page and its wasm bundle come from trunk. Trunk's
/// websocket reload channel is not bridged; open trunk's own port for
/// live reload.
pub async fn forward_to_dev_server(
    State(state): State<Arc<AppState>>,
    req: Request,
) -> Result<Response, AppError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| "/".to_string());
    let url = upstream_url(&state.config.dev_server_url, &path_and_query);
    let method = req.method().clone();
    let content_type = req.headers().get(CONTENT_TYPE).cloned();

    let body = to_bytes(req.into_body(), MAX_FORWARDED_BODY)
        .await
        .map_err(|e| AppError::Validation(format!("Request body too large: {}", e)))?;

    tracing::debug!("proxying {} {} to dev server", method, url);

    let mut upstream = state.http.request(method, &url).body(body);
    if let Some(content_type) = content_type {
        upstream = upstream.header(CONTENT_TYPE, content_type);
    }
    let upstream = upstream.send().await?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/octet-stream"));
    let bytes = upstream.bytes().await?;

    Ok((status, [(CONTENT_TYPE, content_type)], Body::from(bytes)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        assert_eq!(
            upstream_url("http://127.0.0.1:8080/", "/index.html?v=2"),
            "http://127.0.0.1:8080/index.html?v=2"
        );
        assert_eq!(upstream_url("http://localhost:8080", "/"), "http://localhost:8080/");
    }
}
