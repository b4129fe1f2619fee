//! HTTP transport seam
//!
//! Everything that leaves the process goes through [`HttpTransport`], so
//! the loader and the geocoder can be driven by a fake in tests.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::{UpstreamError, UpstreamResult};

/// Status and body of a completed GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// A 200 response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Minimal GET-only HTTP client
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request with extra headers and return the raw response.
    ///
    /// Non-200 statuses are not errors at this level.
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> UpstreamResult<HttpResponse>;
}

/// [`HttpTransport`] backed by reqwest
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport, optionally bounding every request by `timeout`
    pub fn new(timeout: Option<Duration>) -> UpstreamResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> UpstreamResult<HttpResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(url, status, bytes = body.len(), "GET completed");
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Canned-response transport for tests

    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves preset responses per URL and counts requests.
    ///
    /// Unknown URLs answer 404.
    #[derive(Default)]
    pub struct FakeTransport {
        routes: Mutex<HashMap<String, UpstreamResult<HttpResponse>>>,
        calls: Mutex<HashMap<String, usize>>,
        headers: Mutex<Vec<(String, String)>>,
        delay: Option<Duration>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every request sleeps for `delay` before answering
        pub fn with_delay(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::default()
            }
        }

        pub fn respond(&self, url: &str, response: UpstreamResult<HttpResponse>) {
            self.routes
                .lock()
                .unwrap()
                .insert(url.to_string(), response);
        }

        pub fn respond_json(&self, url: &str, body: impl Into<String>) {
            self.respond(url, Ok(HttpResponse::ok(body)));
        }

        /// Requests seen for a URL
        pub fn calls(&self, url: &str) -> usize {
            self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
        }

        /// Requests seen across all URLs
        pub fn total_calls(&self) -> usize {
            self.calls.lock().unwrap().values().sum()
        }

        /// Every header sent so far
        pub fn seen_headers(&self) -> Vec<(String, String)> {
            self.headers.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn get(&self, url: &str, headers: &[(&str, &str)]) -> UpstreamResult<HttpResponse> {
            *self
                .calls
                .lock()
                .unwrap()
                .entry(url.to_string())
                .or_insert(0) += 1;
            self.headers
                .lock()
                .unwrap()
                .extend(headers.iter().map(|(k, v)| (k.to_string(), v.to_string())));

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            self.routes
                .lock()
                .unwrap()
                .get(url)
                .cloned()
                .unwrap_or_else(|| {
                    Ok(HttpResponse {
                        status: 404,
                        body: "not found".to_string(),
                    })
                })
        }
    }
}
