use super::handlers::error_response;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use serde::de::DeserializeOwned;
use tracing::warn;

/// JSON request body, or `T::default()` when the request carries no JSON
///
/// A missing or non-JSON `Content-Type`, or a blank body, yields the default
/// so field validation in the handler decides the response.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            warn!("Rejected request body: {}", rejection.body_text());
            error_response(rejection.status(), rejection.body_text())
        })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            warn!("Rejected request body: {}", e);
            error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e))
        })
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(has_json_content_type(&headers(Some("application/json"))));
        assert!(has_json_content_type(&headers(Some("Application/JSON; charset=utf-8"))));
        assert!(has_json_content_type(&headers(Some("application/merge-patch+json"))));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!has_json_content_type(&headers(None)));
        assert!(!has_json_content_type(&headers(Some("text/plain"))));
        assert!(!has_json_content_type(&headers(Some("application/x-www-form-urlencoded"))));
    }
}
