//! Single entry point for talking to the release API.
//!
//! Every call goes through [`ApiClient::execute`], which attaches auth,
//! records the exchange in the debug log, and surfaces failures (and
//! non-GET successes) on the toast bus. Callers only see the typed result.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::request::{ApiRequest, Method};
use super::transport::{FetchTransport, HttpRequest, HttpTransport, TransportError};
use super::ApiError;
use crate::shared::debug::{DebugLog, DebugLogEntry};
use crate::shared::toast::ToastBus;
use crate::system::auth::storage::TokenStore;

#[derive(Clone)]
pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    transport: T,
    tokens: TokenStore,
    debug: DebugLog,
    toasts: ToastBus,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(
        base_url: impl Into<String>,
        transport: T,
        tokens: TokenStore,
        debug: DebugLog,
        toasts: ToastBus,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            tokens,
            debug,
            toasts,
        }
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn toasts(&self) -> &ToastBus {
        &self.toasts
    }

    pub fn debug(&self) -> &DebugLog {
        &self.debug
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.send(ApiRequest::get(endpoint)).await
    }

    /// Executes `request` and decodes the 2xx body into `R`.
    pub async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let value = self.execute(request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Executes `request` and returns the parsed body as JSON.
    ///
    /// An unparseable body is treated as `{}`. Exactly two debug entries are
    /// written per call, both carrying the same timestamp.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let ApiRequest {
            method,
            endpoint,
            body,
            authenticated,
            log_body,
            error_fallback,
            success_toast,
        } = request;

        let url = self.url(&endpoint);
        let mut headers = BTreeMap::new();
        // The browser sets the multipart boundary itself.
        if !body.is_multipart() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if authenticated {
            if let Some(token) = self.tokens.access_token() {
                headers.insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }

        let timestamp = Utc::now();
        let shown_body = log_body.or_else(|| body.log_value());
        self.debug.append(
            DebugLogEntry::new(method.as_str(), &url, headers.clone(), timestamp)
                .with_body(shown_body.clone()),
        );
        let resolved = || {
            DebugLogEntry::new(method.as_str(), &url, headers.clone(), timestamp)
                .with_body(shown_body.clone())
        };

        let outcome = self
            .transport
            .send(HttpRequest {
                method,
                url: url.clone(),
                headers: headers.clone(),
                body,
            })
            .await;

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                log::error!("{} {} failed: {}", method.as_str(), url, err);
                self.debug.append(resolved().with_error(err.to_string()));
                return Err(match err {
                    TransportError::Network(detail) => {
                        self.toasts.error(
                            "Connection error",
                            Some("Unable to reach the server".to_string()),
                        );
                        ApiError::Network(detail)
                    }
                    TransportError::Other(detail) => {
                        self.toasts.error("Error", Some(detail.clone()));
                        ApiError::Transport(detail)
                    }
                });
            }
        };

        let data: Value = serde_json::from_str(&response.body).unwrap_or_else(|_| json!({}));

        if !response.is_success() {
            let message = body_message(&data)
                .or(error_fallback)
                .unwrap_or_else(|| format!("HTTP {}", response.status));
            let details = json!({
                "status": response.status,
                "statusText": response.status_text,
                "response": data,
            });
            let details = serde_json::to_string_pretty(&details).unwrap_or_default();

            log::warn!("{} {} -> {}: {}", method.as_str(), url, response.status, message);
            self.toasts.error(message.clone(), Some(details));
            self.debug.append(
                resolved()
                    .with_response(response.status, &response.status_text, data.clone())
                    .with_error(message.clone()),
            );
            return Err(ApiError::Http {
                status: response.status,
                message,
                body: data,
            });
        }

        self.debug
            .append(resolved().with_response(response.status, &response.status_text, data.clone()));

        if method != Method::Get && success_toast {
            let message =
                body_message(&data).unwrap_or_else(|| format!("{} succeeded", method.as_str()));
            self.toasts.success(message);
        }

        Ok(data)
    }
}

fn body_message(data: &Value) -> Option<String> {
    data.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
