use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use smartedu_auth::SessionContext;
use smartedu_config::ApiConfig;
use smartedu_core::{ApiError, Envelope};
use tracing::{debug, instrument, warn};

use crate::MultipartBody;

/// Typed client for the SmartEdu backend.
///
/// Cheap to clone: the connection pool and config are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
    token: Option<Arc<str>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

enum Body {
    Empty,
    Json(Value),
    Multipart(MultipartBody),
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build HTTP client with timeout, using defaults");
                reqwest::Client::new()
            });

        Self {
            http,
            config: Arc::new(config),
            token: None,
        }
    }

    /// Client carrying the access token of `context`, if signed in.
    pub fn for_session(config: ApiConfig, context: &SessionContext) -> Self {
        let client = Self::new(config);
        match context.access_token() {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    /// Attaches `Authorization: Bearer <token>` to every request.
    pub fn with_token(mut self, token: impl AsRef<str>) -> Self {
        self.token = Some(Arc::from(token.as_ref()));
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(Method::GET, path, &[], Body::Empty).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        self.send(Method::GET, path, query, Body::Empty).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, &[], json_body(body)?).await
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(Method::POST, path, &[], Body::Empty).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, path, &[], json_body(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(Method::DELETE, path, &[], Body::Empty).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        body: MultipartBody,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(Method::POST, path, &[], Body::Multipart(body))
            .await
    }

    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        body: MultipartBody,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(Method::PATCH, path, &[], Body::Multipart(body))
            .await
    }

    /// GET and unwrap the envelope payload.
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        require_data(self.get(path).await?)
    }

    pub async fn get_data_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        require_data(self.get_with_query(path, query).await?)
    }

    #[instrument(skip(self, query, body), fields(http.method = %method, http.path = %path))]
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Body,
    ) -> Result<Envelope<T>, ApiError> {
        let url = self.config.url_for(path).map_err(|e| {
            warn!(error = %e, "API client is not configured");
            ApiError::configuration(e.to_string())
        })?;

        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        request = self.authorize(request);
        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Multipart(body) => request.multipart(body.into_form()?),
        };

        let start = Instant::now();
        let response = request.send().await;
        let latency = start.elapsed();

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Request failed without a response");
                track_request(&method, "network");
                return Err(ApiError::network());
            }
        };

        let status = response.status();
        histogram!("api_request_duration_seconds", "method" => method.to_string())
            .record(latency.as_secs_f64());
        track_request(&method, status.as_str());
        debug!(
            http.status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "Response received"
        );

        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read response body");
            ApiError::network()
        })?;

        decode_response(status, &bytes)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_value(body)
        .map(Body::Json)
        .map_err(|e| ApiError::failure(0, format!("Failed to encode request body: {e}")))
}

fn track_request(method: &Method, status: &str) {
    counter!(
        "api_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Turns a raw response into a typed envelope or an `ApiError`.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    bytes: &[u8],
) -> Result<Envelope<T>, ApiError> {
    if status.is_success() && bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Envelope {
            success: true,
            data: None,
            message: None,
            status_code: Some(status.as_u16()),
        });
    }

    let envelope: Option<Envelope<Value>> = serde_json::from_slice(bytes).ok();

    if !status.is_success() {
        warn!(http.status = status.as_u16(), "Request rejected");
        return Err(ApiError::from_status(status.as_u16(), envelope));
    }

    let Some(envelope) = envelope else {
        return Err(ApiError::failure(
            status.as_u16(),
            "Invalid response from server",
        ));
    };

    if !envelope.success {
        let code = envelope.status_code.unwrap_or(status.as_u16());
        warn!(status_code = code, "Backend reported failure");
        return Err(ApiError::from_status(code, Some(envelope)));
    }

    let Envelope {
        success,
        data,
        message,
        status_code,
    } = envelope;

    let data = match data {
        Some(Value::Null) | None => None,
        Some(value) => Some(serde_json::from_value(value).map_err(|e| {
            ApiError::failure(status.as_u16(), format!("Unexpected response shape: {e}"))
        })?),
    };

    Ok(Envelope {
        success,
        data,
        message,
        status_code,
    })
}

/// Extracts the payload of a successful envelope.
///
/// # Errors
///
/// Returns a failure when the backend answered without data.
pub fn require_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    let status = envelope.status_code.unwrap_or(200);
    envelope
        .data
        .ok_or_else(|| ApiError::failure(status, "Response did not include data"))
}
