//! Scripted transport for service tests.

use serde_json::Value;
use std::collections::VecDeque;
use std::future::{ready, Future};
use std::sync::{Arc, Mutex};

use super::client::ApiClient;
use super::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::shared::debug::DebugLog;
use crate::shared::storage::MemoryStorage;
use crate::shared::toast::{ToastBus, ToastMessage};
use crate::system::auth::storage::TokenStore;

type Outcome = Result<HttpResponse, TransportError>;

/// Replays queued outcomes in order and records every request it receives.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, status_text: &str, body: Value) -> &Self {
        self.respond_raw(status, status_text, &body.to_string())
    }

    pub fn respond_raw(&self, status: u16, status_text: &str, body: &str) -> &Self {
        self.outcomes.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
        self
    }

    pub fn fail_network(&self, detail: &str) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Network(detail.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Outcome> {
        self.requests.lock().unwrap().push(request);
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_string())));
        ready(outcome)
    }
}

/// Client wired to a scripted transport, with every published toast
/// captured for assertions.
pub struct Harness {
    pub client: ApiClient<ScriptedTransport>,
    pub transport: ScriptedTransport,
    toasts: Arc<Mutex<Vec<ToastMessage>>>,
}

impl Harness {
    pub fn new() -> Self {
        let transport = ScriptedTransport::new();
        let bus = ToastBus::new();
        let toasts = Arc::new(Mutex::new(Vec::new()));
        let sink = toasts.clone();
        bus.subscribe(move |t| sink.lock().unwrap().push(t.clone()));
        let client = ApiClient::new(
            "/api",
            transport.clone(),
            TokenStore::new(Arc::new(MemoryStorage::new())),
            DebugLog::new(false),
            bus,
        );
        Self {
            client,
            transport,
            toasts,
        }
    }

    pub fn toasts(&self) -> Vec<ToastMessage> {
        self.toasts.lock().unwrap().clone()
    }
}
