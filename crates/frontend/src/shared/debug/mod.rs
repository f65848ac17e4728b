//! In-memory HTTP debug log.
//!
//! Every request the API client sends is captured here twice (dispatch and
//! resolution) regardless of the debug toggle, so the inspection panel always
//! has data. The toggle only controls mirroring to the browser console.

pub mod panel;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::shared::storage::SharedStore;

/// Number of entries kept before the oldest is evicted.
pub const MAX_DEBUG_ENTRIES: usize = 50;

const DEBUG_MODE_KEY: &str = "debug_mode";

/// Snapshot of one side (dispatch or resolution) of an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugLogEntry {
    pub url: String,
    pub method: String,
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Shared by the dispatch and resolution entries of one request.
    pub timestamp: DateTime<Utc>,
}

impl DebugLogEntry {
    pub fn new(
        method: &str,
        url: &str,
        headers: BTreeMap<String, String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            url: url.to_string(),
            method: method.to_string(),
            headers,
            body: None,
            status: None,
            status_text: None,
            response: None,
            error: None,
            timestamp,
        }
    }

    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }

    pub fn with_response(mut self, status: u16, status_text: &str, response: Value) -> Self {
        self.status = Some(status);
        self.status_text = Some(status_text.to_string());
        self.response = Some(response);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// CSS modifier for the method/status badge.
    pub fn status_class(&self) -> &'static str {
        match self.status.unwrap_or(0) {
            200..=299 => "success",
            400..=499 => "warning",
            500..=u16::MAX => "danger",
            _ => "neutral",
        }
    }
}

/// Bounded FIFO of debug entries plus the console-mirroring flag.
#[derive(Clone, Debug)]
pub struct DebugLog {
    entries: Arc<Mutex<VecDeque<DebugLogEntry>>>,
    mirror_to_console: bool,
}

impl DebugLog {
    pub fn new(mirror_to_console: bool) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_DEBUG_ENTRIES))),
            mirror_to_console,
        }
    }

    /// Records an entry, evicting the oldest one past capacity.
    pub fn append(&self, entry: DebugLogEntry) {
        if self.mirror_to_console {
            mirror(&entry);
        }
        if let Ok(mut entries) = self.entries.lock() {
            entries.push_front(entry);
            if entries.len() > MAX_DEBUG_ENTRIES {
                entries.pop_back();
            }
        }
    }

    /// Current snapshot, newest first.
    pub fn list(&self) -> Vec<DebugLogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

fn mirror(entry: &DebugLogEntry) {
    log::debug!("[DEBUG] {} {}", entry.method, entry.url);
    log::debug!("  headers: {:?}", entry.headers);
    if let Some(body) = &entry.body {
        log::debug!("  body: {}", body);
    }
    if let Some(status) = entry.status {
        log::debug!(
            "  status: {} {}",
            status,
            entry.status_text.as_deref().unwrap_or_default()
        );
    }
    if let Some(response) = &entry.response {
        log::debug!("  response: {}", response);
    }
    if let Some(error) = &entry.error {
        log::error!("  error: {}", error);
    }
    log::debug!("  timestamp: {}", entry.timestamp.to_rfc3339());
}

/// Persisted debug toggle.
///
/// The value in effect is fixed at load time. Changing it writes the new
/// value to storage and reports that a reload is needed to apply it.
#[derive(Clone)]
pub struct DebugMode {
    store: SharedStore,
    enabled: bool,
}

impl DebugMode {
    /// Reads the flag; `build_default` applies until the user has chosen.
    pub fn load(store: SharedStore, build_default: bool) -> Self {
        let enabled = match store.get(DEBUG_MODE_KEY).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => build_default,
        };
        Self { store, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Persists `enabled`; returns `true` when the page must reload.
    pub fn set(&self, enabled: bool) -> bool {
        self.store.set(DEBUG_MODE_KEY, if enabled { "true" } else { "false" });
        enabled != self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    fn entry(n: usize) -> DebugLogEntry {
        DebugLogEntry::new("GET", &format!("/api/releases/{n}"), BTreeMap::new(), Utc::now())
    }

    #[test]
    fn test_keeps_fifty_most_recent_newest_first() {
        let log = DebugLog::new(false);
        for n in 0..137 {
            log.append(entry(n));
        }

        let entries = log.list();
        assert_eq!(entries.len(), MAX_DEBUG_ENTRIES);
        assert_eq!(entries[0].url, "/api/releases/136");
        assert_eq!(entries[49].url, "/api/releases/87");
    }

    #[test]
    fn test_below_capacity_keeps_everything() {
        let log = DebugLog::new(false);
        for n in 0..3 {
            log.append(entry(n));
        }
        let urls: Vec<_> = log.list().into_iter().map(|e| e.url).collect();
        assert_eq!(
            urls,
            vec!["/api/releases/2", "/api/releases/1", "/api/releases/0"]
        );
    }

    #[test]
    fn test_clear() {
        let log = DebugLog::new(true);
        log.append(entry(1));
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
        assert!(log.list().is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let log = DebugLog::new(false);
        let panel_view = log.clone();
        log.append(entry(1));
        assert_eq!(panel_view.len(), 1);
    }

    #[test]
    fn test_status_class() {
        let base = entry(0);
        assert_eq!(base.status_class(), "neutral");
        assert_eq!(base.clone().with_response(201, "Created", Value::Null).status_class(), "success");
        assert_eq!(base.clone().with_response(404, "Not Found", Value::Null).status_class(), "warning");
        assert_eq!(base.with_response(503, "Unavailable", Value::Null).status_class(), "danger");
    }

    #[test]
    fn test_debug_mode_persists_across_reload() {
        let store: SharedStore = Arc::new(MemoryStorage::new());

        let mode = DebugMode::load(store.clone(), false);
        assert!(!mode.is_enabled());
        assert!(mode.set(true), "changing the flag requires a reload");
        assert_eq!(store.get(DEBUG_MODE_KEY).as_deref(), Some("true"));

        let reloaded = DebugMode::load(store.clone(), false);
        assert!(reloaded.is_enabled());
        assert!(!reloaded.set(true), "same value, no reload");

        assert!(reloaded.set(false));
        assert!(!DebugMode::load(store, false).is_enabled());
    }

    #[test]
    fn test_debug_mode_build_default_until_chosen() {
        let store: SharedStore = Arc::new(MemoryStorage::new());
        assert!(DebugMode::load(store.clone(), true).is_enabled());
        store.set(DEBUG_MODE_KEY, "false");
        assert!(!DebugMode::load(store, true).is_enabled());
    }
}
