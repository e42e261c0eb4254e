use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::domain::{
    ApiResponse, InterceptorRegistry, OutgoingRequest, RequestInterceptor, ResponseError,
    ResponseErrorInterceptor,
};

// Thin wrapper around reqwest that runs interceptor chains around every call.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_error_interceptors: Vec<Arc<dyn ResponseErrorInterceptor>>,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            request_interceptors: Vec::new(),
            response_error_interceptors: Vec::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, ResponseError> {
        self.send(OutgoingRequest::new("GET", path)).await
    }

    pub async fn post_json<T>(&self, path: &str, body: &T) -> Result<ApiResponse, ResponseError>
    where
        T: Serialize + ?Sized,
    {
        let mut request = OutgoingRequest::new("POST", path);
        match serde_json::to_string(body) {
            Ok(encoded) => {
                request
                    .headers
                    .insert("Content-Type".to_string(), "application/json".to_string());
                request.body = Some(encoded);
            }
            Err(e) => {
                let error = ResponseError::network(format!("failed to encode request body: {e}"));
                return Err(self.reject(error).await);
            }
        }
        self.send(request).await
    }

    /// Runs the request interceptors, sends the request and, on any failure,
    /// threads the error through every response-error interceptor before
    /// returning it.
    ///
    /// `request.url` is resolved against the base URL, so both relative paths
    /// and absolute URLs are accepted.
    pub async fn send(&self, mut request: OutgoingRequest) -> Result<ApiResponse, ResponseError> {
        for interceptor in &self.request_interceptors {
            interceptor.on_request(&mut request).await;
        }

        match self.dispatch(request).await {
            Ok(response) => Ok(response),
            Err(error) => Err(self.reject(error).await),
        }
    }

    async fn dispatch(&self, request: OutgoingRequest) -> Result<ApiResponse, ResponseError> {
        let url = self.base_url.join(&request.url).map_err(|e| {
            ResponseError::network(format!("invalid request url {}: {e}", request.url))
        })?;
        let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            ResponseError::network(format!("invalid request method {}", request.method))
        })?;

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ResponseError::network(format!("invalid header name {name}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| ResponseError::network(format!("invalid value for header {name}")))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let res = builder
            .send()
            .await
            .map_err(|e| ResponseError::network(format!("transport error: {e}")))?;
        let status = res.status();

        // Keep the upstream status even when the error body cannot be read.
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ResponseError::from_status(status.as_u16(), body));
        }

        let body = res
            .text()
            .await
            .map_err(|e| ResponseError::network(format!("failed to read response body: {e}")))?;
        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }

    async fn reject(&self, mut error: ResponseError) -> ResponseError {
        tracing::debug!(status = ?error.status(), error = %error, "request failed.");
        for interceptor in &self.response_error_interceptors {
            error = interceptor.on_response_error(error).await;
        }
        error
    }
}

impl InterceptorRegistry for ApiClient {
    fn add_request_interceptor(&mut self, interceptor: Arc<dyn RequestInterceptor>) {
        self.request_interceptors.push(interceptor);
    }

    fn add_response_error_interceptor(&mut self, interceptor: Arc<dyn ResponseErrorInterceptor>) {
        self.response_error_interceptors.push(interceptor);
    }
}
