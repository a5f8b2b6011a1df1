use std::time::{Duration, Instant};

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    middleware::Next,
    response::Response,
};

const MAX_LOG_LINE: usize = 80;
const MAX_CAPTURED_BODY: usize = 64 * 1024;

pub fn is_api_path(path: &str) -> bool {
    path.starts_with("/api")
}

/// `POST /api/contact 200 in 3ms :: {"success":true,...}`, cut to 80 chars.
pub fn format_log_line(
    method: &Method,
    path: &str,
    status: StatusCode,
    elapsed: Duration,
    json_body: Option<&str>,
) -> String {
    let mut line = format!(
        "{} {} {} in {}ms",
        method,
        path,
        status.as_u16(),
        elapsed.as_millis()
    );
    if let Some(body) = json_body {
        line.push_str(" :: ");
        line.push_str(body);
    }

    if line.chars().count() > MAX_LOG_LINE {
        let mut cut: String = line.chars().take(MAX_LOG_LINE - 1).collect();
        cut.push('…');
        return cut;
    }
    line
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

/// Logs one line per `/api` request once the response is ready, including
/// the JSON body that was sent back.
pub async fn log_api_requests(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    if !is_api_path(&path) {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed = start.elapsed();

    if !is_json(&response) {
        tracing::info!("{}", format_log_line(&method, &path, response.status(), elapsed, None));
        return response;
    }

    let (parts, body) = response.into_parts();
    let (body, captured) = match to_bytes(body, MAX_CAPTURED_BODY).await {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            (Body::from(bytes), Some(text))
        }
        Err(e) => {
            tracing::warn!("could not buffer response body for {}: {}", path, e);
            (Body::empty(), None)
        }
    };

    tracing::info!(
        "{}",
        format_log_line(&method, &path, parts.status, elapsed, captured.as_deref())
    );
    Response::from_parts(parts, body)
}
