//! Backend transport trait and reqwest-based HTTP implementation.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::{Action, BackendRequest, ClientError, ClientFuture, ENDPOINT_PATH, HttpMethod};

pub const API_KEY_HEADER: &str = "X-API-Key";

pub trait ProntTransport: Send + Sync + std::fmt::Debug {
    /// Sends one request and returns the decoded JSON body.
    fn send<'a>(
        &'a self,
        request: BackendRequest,
        api_key: &'a str,
    ) -> ClientFuture<'a, Result<Value, ClientError>>;
}

#[derive(Debug, Clone)]
pub struct ProntHttpTransport {
    client: Client,
    base_url: String,
}

impl ProntHttpTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// A reqwest client that keeps no idle connections, so every call opens
    /// and releases its own connection.
    pub fn default_client() -> Result<Client, ClientError> {
        Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|err| ClientError::transport(err.to_string()))
    }

    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self::new(Self::default_client()?, base_url))
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), ENDPOINT_PATH)
    }

    pub fn build_request(
        &self,
        request: &BackendRequest,
        api_key: &str,
    ) -> Result<reqwest::Request, ClientError> {
        let mut builder = self
            .client
            .request(to_method(request.method), self.endpoint())
            .query(&request.query_pairs())
            .header(API_KEY_HEADER, api_key)
            .header(CONTENT_TYPE, "application/json")
            .timeout(request.timeout);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .build()
            .map_err(|err| ClientError::transport(err.to_string()))
    }
}

impl ProntTransport for ProntHttpTransport {
    fn send<'a>(
        &'a self,
        request: BackendRequest,
        api_key: &'a str,
    ) -> ClientFuture<'a, Result<Value, ClientError>> {
        Box::pin(async move {
            let http_request = self.build_request(&request, api_key)?;
            let response = self
                .client
                .execute(http_request)
                .await
                .map_err(|err| map_send_error(err, request.timeout))?;

            let status = response.status();
            if request.action == Action::Health && !status.is_success() {
                return Err(ClientError::transport(format!(
                    "health check failed with status {status}"
                )));
            }

            let body = response
                .text()
                .await
                .map_err(|err| map_send_error(err, request.timeout))?;

            serde_json::from_str(&body).map_err(|err| {
                ClientError::malformed_response(format!(
                    "backend returned a non-JSON body (status {status}): {err}"
                ))
            })
        })
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}

fn map_send_error(err: reqwest::Error, timeout: Duration) -> ClientError {
    if err.is_timeout() {
        ClientError::timeout(format!(
            "request timed out after {}ms: {err}",
            timeout.as_millis()
        ))
    } else {
        ClientError::transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn transport() -> ProntHttpTransport {
        ProntHttpTransport::new(Client::new(), "http://localhost:81/pront/api/")
    }

    #[test]
    fn endpoint_joins_base_url_and_path() {
        assert_eq!(
            transport().endpoint(),
            "http://localhost:81/pront/api/fluxi_api.php"
        );
    }

    #[test]
    fn built_request_carries_headers_query_and_timeout() {
        let request = BackendRequest::new(HttpMethod::Get, Action::Patient, Duration::from_secs(15))
            .with_query("cpf", "12345678900");

        let built = transport()
            .build_request(&request, "secret-key")
            .expect("request should build");

        assert_eq!(built.method(), Method::GET);
        assert_eq!(
            built.url().as_str(),
            "http://localhost:81/pront/api/fluxi_api.php?action=paciente&cpf=12345678900"
        );
        assert_eq!(
            built.headers().get(API_KEY_HEADER).and_then(|v| v.to_str().ok()),
            Some("secret-key")
        );
        assert_eq!(
            built.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(built.timeout(), Some(&Duration::from_secs(15)));
        assert!(built.body().is_none());
    }

    #[test]
    fn json_body_is_attached_without_duplicating_content_type() {
        let request = BackendRequest::new(HttpMethod::Post, Action::Schedule, Duration::from_secs(15))
            .with_body(json!({"paciente_numero": 7}));

        let built = transport()
            .build_request(&request, "secret-key")
            .expect("request should build");

        assert_eq!(built.method(), Method::POST);
        assert_eq!(built.headers().get_all(CONTENT_TYPE).iter().count(), 1);
        let body = built
            .body()
            .and_then(|body| body.as_bytes())
            .expect("body should be buffered");
        let decoded: Value = serde_json::from_slice(body).expect("body should be JSON");
        assert_eq!(decoded, json!({"paciente_numero": 7}));
    }
}
