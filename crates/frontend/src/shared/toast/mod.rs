//! Application-wide notification channel.
//!
//! Any code holding a `ToastBus` handle can publish; the single mounted
//! `ToastContainer` subscribes and owns the visible queue.

pub mod container;

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// How long the toast stays up before it dismisses itself.
    pub fn lifetime(&self) -> Duration {
        match self {
            ToastKind::Error => Duration::from_secs(10),
            _ => Duration::from_secs(5),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Warning => "⚠️",
            ToastKind::Info => "ℹ️",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            id: format!("toast-{}", Uuid::new_v4()),
            kind,
            message: message.into(),
            details,
            timestamp: Utc::now(),
        }
    }
}

type Listener = Arc<dyn Fn(&ToastMessage) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Handle returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Clone, Default)]
pub struct ToastBus {
    listeners: Arc<Mutex<Listeners>>,
}

impl ToastBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&ToastMessage) + Send + Sync + 'static) -> SubscriptionId {
        let mut listeners = match self.listeners.lock() {
            Ok(l) => l,
            Err(poisoned) => poisoned.into_inner(),
        };
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.entries.push((id, Arc::new(listener)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.entries.retain(|(entry_id, _)| *entry_id != id.0);
        }
    }

    /// Builds a toast and delivers it to every subscriber in subscription
    /// order. Listeners run after the lock is released, so they may publish.
    pub fn publish(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        details: Option<String>,
    ) -> ToastMessage {
        let toast = ToastMessage::new(kind, message, details);
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .map(|l| l.entries.iter().map(|(_, f)| f.clone()).collect())
            .unwrap_or_default();
        if listeners.is_empty() {
            log::debug!("toast dropped, no listener mounted: {}", toast.message);
        }
        for listener in listeners {
            listener(&toast);
        }
        toast
    }

    pub fn success(&self, message: impl Into<String>) -> ToastMessage {
        self.publish(ToastKind::Success, message, None)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastMessage {
        self.publish(ToastKind::Info, message, None)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastMessage {
        self.publish(ToastKind::Warning, message, None)
    }

    pub fn error(&self, message: impl Into<String>, details: Option<String>) -> ToastMessage {
        self.publish(ToastKind::Error, message, details)
    }
}

/// Visible toasts in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<ToastMessage>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: ToastMessage) {
        self.items.push(toast);
    }

    /// Removes the toast with `id`; returns whether it was still queued.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[ToastMessage] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetimes() {
        assert!(ToastKind::Error.lifetime() >= Duration::from_secs(10));
        for kind in [ToastKind::Success, ToastKind::Warning, ToastKind::Info] {
            assert!(kind.lifetime() >= Duration::from_secs(5));
            assert!(kind.lifetime() < ToastKind::Error.lifetime());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ToastMessage::new(ToastKind::Info, "same", None);
        let b = ToastMessage::new(ToastKind::Info, "same", None);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("toast-"));
    }

    #[test]
    fn test_publish_reaches_subscribers_in_order() {
        let bus = ToastBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = seen.clone();
        bus.subscribe(move |t| first.lock().unwrap().push(format!("a:{}", t.message)));
        let second = seen.clone();
        bus.subscribe(move |t| second.lock().unwrap().push(format!("b:{}", t.message)));

        bus.success("saved");
        assert_eq!(*seen.lock().unwrap(), vec!["a:saved", "b:saved"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = ToastBus::new();
        let count = Arc::new(Mutex::new(0));
        let counter = count.clone();
        let id = bus.subscribe(move |_| *counter.lock().unwrap() += 1);

        bus.info("one");
        bus.unsubscribe(id);
        bus.info("two");
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_listener_may_publish() {
        let bus = ToastBus::new();
        let inner = bus.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(move |t| {
            sink.lock().unwrap().push(t.message.clone());
            if t.kind == ToastKind::Error {
                inner.info("follow-up");
            }
        });

        bus.error("boom", None);
        assert_eq!(*seen.lock().unwrap(), vec!["boom", "follow-up"]);
    }

    #[test]
    fn test_queue_arrival_order_and_remove_by_id() {
        let mut queue = ToastQueue::default();
        let a = ToastMessage::new(ToastKind::Success, "a", None);
        let b = ToastMessage::new(ToastKind::Error, "b", Some("{}".into()));
        let c = ToastMessage::new(ToastKind::Info, "c", None);
        queue.push(a.clone());
        queue.push(b.clone());
        queue.push(c.clone());

        assert!(queue.remove(&b.id));
        assert!(!queue.remove(&b.id));
        let left: Vec<_> = queue.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["a", "c"]);
    }
}
