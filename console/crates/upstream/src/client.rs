//! Envelope-Normalizing HTTP Client
//!
//! One call, one typed result. The client performs the HTTP exchange,
//! unwraps the backend envelope and always returns an
//! [`ApiResult`](crate::envelope::ApiResult); ordinary request failures are
//! data, not errors to catch.

use std::collections::HashMap;
use std::time::Duration;

use http::HeaderMap;
use http::header::{self, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::envelope::{ApiError, ApiResult, Envelope, UNKNOWN_ERROR_MESSAGE};

/// Per-call ceiling; anything slower is treated as a transport failure
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Last-resort message when no better description can be resolved
const FALLBACK_ERROR_MESSAGE: &str = "Unable to complete request call.";

/// HTTP methods the backend API is consumed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Request payload
pub enum RequestBody {
    Json(serde_json::Value),
    /// Multipart form; the transport sets its own boundary-bearing
    /// `Content-Type`, so any explicit one is stripped before dispatch
    Multipart(reqwest::multipart::Form),
}

/// One outbound backend call
///
/// Built with the chained helpers, consumed by
/// [`UpstreamClient::execute`] / [`UpstreamClient::execute_with_headers`].
pub struct UpstreamRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<RequestBody>,
    pub params: Vec<(String, String)>,
    pub headers: HeaderMap,
}

impl UpstreamRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            params: Vec::new(),
            headers: HeaderMap::new(),
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Patch, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    /// Attach a JSON body
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attach a multipart form body
    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Add a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add a request header; invalid names/values are silently dropped
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Forward the caller's cookie header, when present
    pub fn cookie_header(self, cookies: Option<&str>) -> Self {
        match cookies {
            Some(cookies) => self.header(header::COOKIE.as_str(), cookies),
            None => self,
        }
    }

    /// Present a token as a bearer credential
    pub fn bearer(self, token: &str) -> Self {
        self.header(header::AUTHORIZATION.as_str(), &format!("Bearer {token}"))
    }
}

/// Response headers flattened to a string map
///
/// Multi-valued headers are joined with `", "`. Needed so the login flow can
/// read `Set-Cookie` values the transport would otherwise hide.
pub type HeaderBag = HashMap<String, String>;

/// HTTP client for the backend API
///
/// Wraps a [`reqwest::Client`] with the base origin and the fixed
/// [`REQUEST_TIMEOUT`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client for the given backend origin
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Backend origin this client resolves endpoints against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one call and unwrap the envelope
    pub async fn execute<T: DeserializeOwned>(&self, request: UpstreamRequest) -> ApiResult<T> {
        self.dispatch(request).await.0
    }

    /// Like [`execute`](Self::execute), but also returns the flattened
    /// response headers so the caller can inspect `Set-Cookie`
    pub async fn execute_with_headers<T: DeserializeOwned>(
        &self,
        request: UpstreamRequest,
    ) -> (ApiResult<T>, HeaderBag) {
        self.dispatch(request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: UpstreamRequest,
    ) -> (ApiResult<T>, HeaderBag) {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            request.endpoint.trim_start_matches('/')
        );

        let mut headers = request.headers;
        if matches!(request.body, Some(RequestBody::Multipart(_))) {
            // The transport must pick the boundary-bearing content type.
            headers.remove(header::CONTENT_TYPE);
        }

        let mut builder = self
            .http
            .request(request.method.as_reqwest(), &url)
            .headers(headers);

        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }

        builder = match request.body {
            Some(RequestBody::Json(body)) => builder.json(&body),
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                // Never reached the server: network failure or timeout.
                return (Err(log_failure(ApiError::no_response(err.to_string()), &url)), HeaderBag::new());
            }
        };

        let status = response.status().as_u16();
        let headers = flatten_headers(response.headers());

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                return (Err(log_failure(ApiError::no_response(err.to_string()), &url)), headers);
            }
        };

        let result = normalize(status, &body);
        let result = match result {
            Ok(ok) => Ok(ok),
            Err(err) => Err(log_failure(err, &url)),
        };

        (result, headers)
    }
}

/// Unwrap the envelope from one response
fn normalize<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if (200..300).contains(&status) {
        match serde_json::from_str::<Envelope<T>>(body) {
            Ok(envelope) => envelope.into_result(status),
            // 2xx with a body the envelope contract cannot explain.
            Err(_) => Err(ApiError::with_status(UNKNOWN_ERROR_MESSAGE, status)),
        }
    } else {
        Err(ApiError::with_status(resolve_error_message(body), status))
    }
}

/// Resolve the best failure description a non-2xx body offers
///
/// Priority: nested envelope error message, then a top-level message, then
/// the fixed fallback.
fn resolve_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value["error"]["message"].as_str() {
            return message.to_string();
        }
        if let Some(message) = value["message"].as_str() {
            return message.to_string();
        }
    }
    FALLBACK_ERROR_MESSAGE.to_string()
}

fn flatten_headers(headers: &HeaderMap) -> HeaderBag {
    let mut bag = HeaderBag::new();
    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join(", ");
        if !joined.is_empty() {
            bag.insert(name.as_str().to_string(), joined);
        }
    }
    bag
}

/// Diagnostic side effect: every failure is logged before being returned
fn log_failure(err: ApiError, url: &str) -> ApiError {
    tracing::error!(
        url = %url,
        status = err.status_code.unwrap_or(0),
        message = %err.message,
        "upstream call failed"
    );
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::extract::Multipart;
    use axum::http::HeaderMap as AxumHeaderMap;
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use serde_json::json;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_success_envelope_unwrapped() {
        let router = Router::new().route(
            "/admin/translators",
            get(|| async {
                axum::Json(json!({
                    "success": true,
                    "data": [{"id": "t1", "username": "mira"}]
                }))
            }),
        );
        let base = spawn_stub(router).await;

        let client = UpstreamClient::new(base).unwrap();
        let result: ApiResult<serde_json::Value> = client
            .execute(UpstreamRequest::get("/admin/translators"))
            .await;

        assert_eq!(result.unwrap(), json!([{"id": "t1", "username": "mira"}]));
    }

    #[tokio::test]
    async fn test_leading_slash_normalized() {
        let router = Router::new().route(
            "/category",
            get(|| async { axum::Json(json!({"success": true, "data": ["fantasy"]})) }),
        );
        let base = spawn_stub(router).await;

        let client = UpstreamClient::new(base).unwrap();
        // No leading slash on the endpoint
        let result: ApiResult<Vec<String>> =
            client.execute(UpstreamRequest::get("category")).await;

        assert_eq!(result.unwrap(), vec!["fantasy".to_string()]);
    }

    #[tokio::test]
    async fn test_declared_failure_is_typed() {
        let router = Router::new().route(
            "/admin/series/s9",
            get(|| async {
                axum::Json(json!({
                    "success": false,
                    "error": {"message": "Series not found", "statusCode": 404}
                }))
            }),
        );
        let base = spawn_stub(router).await;

        let client = UpstreamClient::new(base).unwrap();
        let err = client
            .execute::<serde_json::Value>(UpstreamRequest::get("/admin/series/s9"))
            .await
            .unwrap_err();

        assert_eq!(err.message, "Series not found");
        assert_eq!(err.status_code, Some(404));
    }

    #[tokio::test]
    async fn test_non_2xx_with_envelope_message() {
        let router = Router::new().route(
            "/account/me",
            get(|| async {
                (
                    axum::http::StatusCode::UNAUTHORIZED,
                    axum::Json(json!({
                        "success": false,
                        "error": {"message": "Token expired"}
                    })),
                )
            }),
        );
        let base = spawn_stub(router).await;

        let client = UpstreamClient::new(base).unwrap();
        let err = client
            .execute::<serde_json::Value>(UpstreamRequest::get("/account/me"))
            .await
            .unwrap_err();

        assert_eq!(err.message, "Token expired");
        assert_eq!(err.status_code, Some(401));
    }

    #[tokio::test]
    async fn test_non_2xx_without_parseable_body() {
        let router = Router::new().route(
            "/boom",
            get(|| async { (axum::http::StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
        );
        let base = spawn_stub(router).await;

        let client = UpstreamClient::new(base).unwrap();
        let err = client
            .execute::<serde_json::Value>(UpstreamRequest::get("/boom"))
            .await
            .unwrap_err();

        assert_eq!(err.message, FALLBACK_ERROR_MESSAGE);
        assert_eq!(err.status_code, Some(502));
    }

    #[tokio::test]
    async fn test_network_failure_yields_zero_status() {
        // Nothing is listening on this port.
        let client = UpstreamClient::new("http://127.0.0.1:1").unwrap();
        let err = client
            .execute::<serde_json::Value>(UpstreamRequest::get("/anything"))
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.status_code, Some(0));
    }

    #[tokio::test]
    async fn test_headers_flattened_with_set_cookie() {
        let router = Router::new().route(
            "/account/admin/login",
            post(|| async {
                let mut headers = AxumHeaderMap::new();
                headers.insert(
                    axum::http::header::SET_COOKIE,
                    "adminAccessToken=abc123; HttpOnly; Path=/".parse().unwrap(),
                );
                (
                    headers,
                    axum::Json(json!({"success": true, "data": {"user": {"id": "u1"}}})),
                )
                    .into_response()
            }),
        );
        let base = spawn_stub(router).await;

        let client = UpstreamClient::new(base).unwrap();
        let (result, headers) = client
            .execute_with_headers::<serde_json::Value>(
                UpstreamRequest::post("/account/admin/login").json(json!({"email": "a@b.c"})),
            )
            .await;

        assert!(result.is_ok());
        assert_eq!(
            headers.get("set-cookie").map(String::as_str),
            Some("adminAccessToken=abc123; HttpOnly; Path=/")
        );
    }

    #[tokio::test]
    async fn test_multipart_drops_explicit_content_type() {
        async fn capture(headers: AxumHeaderMap, mut multipart: Multipart) -> impl IntoResponse {
            let content_type = headers
                .get(axum::http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            // Drain the form so the body is fully read.
            while let Ok(Some(field)) = multipart.next_field().await {
                let _ = field.bytes().await;
            }
            axum::Json(json!({"success": true, "data": {"contentType": content_type}}))
        }

        let router = Router::new().route("/upload", post(capture));
        let base = spawn_stub(router).await;

        let form = reqwest::multipart::Form::new().text("cover", "image-bytes");
        let client = UpstreamClient::new(base).unwrap();
        let data = client
            .execute::<serde_json::Value>(
                UpstreamRequest::post("/upload")
                    .header("Content-Type", "application/json")
                    .multipart(form),
            )
            .await
            .unwrap();

        let seen = data["contentType"].as_str().unwrap();
        assert!(
            seen.starts_with("multipart/form-data; boundary="),
            "explicit Content-Type must not survive: {seen}"
        );
    }

    #[tokio::test]
    async fn test_query_params_forwarded() {
        let router = Router::new().route(
            "/admin/series",
            get(
                |axum::extract::Query(q): axum::extract::Query<
                    std::collections::HashMap<String, String>,
                >| async move {
                    axum::Json(json!({"success": true, "data": {"page": q.get("page")}}))
                },
            ),
        );
        let base = spawn_stub(router).await;

        let client = UpstreamClient::new(base).unwrap();
        let data = client
            .execute::<serde_json::Value>(
                UpstreamRequest::get("/admin/series").query("page", "3"),
            )
            .await
            .unwrap();

        assert_eq!(data["page"], "3");
    }
}
