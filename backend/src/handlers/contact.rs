use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

pub const MISSING_FIELDS_MESSAGE: &str = "Please provide name, email and message";
pub const RECEIVED_MESSAGE: &str = "Message received successfully";

/// A contact form submission. Every field is optional on the wire so that
/// missing and empty values get the same validation message.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "any_text")]
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Accepts any JSON value for a free-text field that is never validated.
/// Non-strings keep their JSON rendering; null is absent.
fn any_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(text)) => Some(text),
            Some(other) => Some(other.to_string()),
        },
    )
}

fn is_missing(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), AppError> {
        if is_missing(&self.name) || is_missing(&self.email) || is_missing(&self.message) {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }
}

fn is_form_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form_encoded(&req) {
            let Form(submission) = Form::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
            return Ok(submission);
        }

        match Json::<ContactSubmission>::from_request(req, state).await {
            Ok(Json(submission)) => Ok(submission),
            // No body type we understand: treat it as an empty form.
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(ContactSubmission::default()),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

/// Acknowledges a contact submission. Nothing is stored or forwarded.
pub async fn submit_contact(
    submission: ContactSubmission,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    submission.validate()?;

    tracing::info!(
        name = submission.name.as_deref().unwrap_or_default(),
        subject = submission.subject.as_deref().unwrap_or("-"),
        "contact message received"
    );
    tracing::debug!(
        email = submission.email.as_deref().unwrap_or_default(),
        "contact reply address"
    );

    Ok((
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: RECEIVED_MESSAGE.to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        routing::post,
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    fn app() -> Router {
        Router::new().route("/api/contact", post(submit_contact))
    }

    async fn send(content_type: Option<&str>, body: &str) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method("POST").uri("/api/contact");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let response = app()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn accepts_complete_json_submission() {
        let (status, body) = send(
            Some("application/json"),
            r#"{"name":"A","email":"a@b.com","message":"hi"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], RECEIVED_MESSAGE);
    }

    #[tokio::test]
    async fn rejects_missing_email_and_message() {
        let (status, body) = send(Some("application/json"), r#"{"name":"A"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], MISSING_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn empty_strings_count_as_missing() {
        let (status, body) = send(
            Some("application/json"),
            r#"{"name":"A","email":"","message":"hi","subject":"general"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn accepts_form_encoded_submission() {
        let (status, body) = send(
            Some("application/x-www-form-urlencoded"),
            "name=A&email=a%40b.com&message=hello+there",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn body_without_content_type_is_an_empty_submission() {
        let (status, body) = send(None, r#"{"name":"A","email":"a@b.com","message":"hi"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], MISSING_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let (status, body) = send(Some("application/json"), r#"{"name": "A""#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn non_string_subject_is_accepted() {
        let (status, body) = send(
            Some("application/json"),
            r#"{"name":"A","email":"a@b.com","message":"hi","subject":5}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn form_subject_is_kept_as_text() {
        let (status, _) = send(
            Some("application/x-www-form-urlencoded"),
            "name=A&email=a%40b.com&message=hi&subject=farmer",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn subject_keeps_its_json_rendering() {
        let parse = |json: &str| serde_json::from_str::<ContactSubmission>(json).unwrap().subject;
        assert_eq!(parse(r#"{"subject":"farmer"}"#).as_deref(), Some("farmer"));
        assert_eq!(parse(r#"{"subject":5}"#).as_deref(), Some("5"));
        assert_eq!(parse(r#"{"subject":null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn subject_is_optional() {
        let submission = ContactSubmission {
            name: Some("A".into()),
            email: Some("a@b.com".into()),
            subject: None,
            message: Some("hi".into()),
        };
        assert!(submission.validate().is_ok());
    }
}
