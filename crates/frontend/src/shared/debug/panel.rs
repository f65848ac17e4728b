//! Floating inspector over the HTTP debug log.

use leptos::prelude::*;
use serde_json::Value;
use std::time::Duration;
use thaw::*;

use super::{DebugLog, DebugLogEntry, DebugMode};
use crate::shared::date_utils::format_time;

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

fn pretty(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

fn badge_color(entry: &DebugLogEntry) -> BadgeColor {
    match entry.status_class() {
        "success" => BadgeColor::Success,
        "warning" => BadgeColor::Warning,
        "danger" => BadgeColor::Danger,
        _ => BadgeColor::Informative,
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[component]
pub fn DebugPanel() -> impl IntoView {
    let log = use_context::<DebugLog>().expect("DebugLog not provided");
    let mode = use_context::<DebugMode>().expect("DebugMode not provided");

    let is_open = RwSignal::new(false);
    let enabled = RwSignal::new(mode.is_enabled());
    let entries = RwSignal::new(log.list());
    let log = StoredValue::new(log);

    if let Ok(handle) = set_interval_with_handle(
        move || entries.set(log.with_value(|l| l.list())),
        REFRESH_INTERVAL,
    ) {
        on_cleanup(move || handle.clear());
    }

    // A changed flag only applies after a reload.
    Effect::new(move |previous: Option<bool>| {
        let now = enabled.get();
        if previous.is_some_and(|p| p != now) && mode.set(now) {
            reload_page();
        }
        now
    });

    let clear = move |_| {
        log.with_value(|l| l.clear());
        entries.set(Vec::new());
    };

    view! {
        <Show
            when=move || is_open.get()
            fallback=move || view! {
                <button
                    class="debug-panel__launcher"
                    title="Open debug panel"
                    on:click=move |_| is_open.set(true)
                >
                    "🔍 Debug"
                </button>
            }
        >
            <div class="debug-panel">
                <div class="debug-panel__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h5>"🔍 Debug panel"</h5>
                    <Space>
                        <Switch checked=enabled label="Enable" />
                        <Button size=ButtonSize::Small on_click=clear>"Clear"</Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| is_open.set(false)
                        >
                            "✕"
                        </Button>
                    </Space>
                </Flex>
                </div>
                <div class="debug-panel__body">
                    {move || {
                        let list = entries.get();
                        if list.is_empty() {
                            view! { <div class="debug-panel__empty">"No requests logged"</div> }.into_any()
                        } else {
                            list.into_iter().map(|entry| view! { <DebugEntryView entry=entry /> }).collect_view().into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn DebugEntryView(entry: DebugLogEntry) -> impl IntoView {
    let color = badge_color(&entry);
    let status = entry
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "?".to_string());
    let time = format_time(&entry.timestamp);
    let header_count = entry.headers.len();
    let headers = serde_json::to_string_pretty(&entry.headers).unwrap_or_default();
    let http_warning = match (entry.status, &entry.error) {
        (Some(code), None) if code >= 400 => Some(format!(
            "HTTP {}: {}",
            code,
            entry.status_text.clone().unwrap_or_else(|| "Error".to_string())
        )),
        _ => None,
    };

    view! {
        <div class="debug-entry">
            <Flex justify=FlexJustify::SpaceBetween>
                <div>
                    <Badge appearance=BadgeAppearance::Filled color=color>
                        {format!("{} {}", entry.method, status)}
                    </Badge>
                    {entry.status_text.clone().map(|t| view! { <Badge appearance=BadgeAppearance::Tint>{t}</Badge> })}
                    <code class="debug-entry__url">{entry.url.clone()}</code>
                </div>
                <small class="debug-entry__time">{time}</small>
            </Flex>
            {(header_count > 0).then(|| view! {
                <details>
                    <summary>{format!("Headers ({})", header_count)}</summary>
                    <pre>{headers}</pre>
                </details>
            })}
            {entry.body.as_ref().map(|body| {
                let body = pretty(body);
                view! {
                    <details>
                        <summary>"Body"</summary>
                        <pre>{body}</pre>
                    </details>
                }
            })}
            {entry.response.as_ref().map(|response| {
                let response = pretty(response);
                let summary = match entry.status {
                    Some(code) => format!("Response ({})", code),
                    None => "Response".to_string(),
                };
                view! {
                    <details>
                        <summary>{summary}</summary>
                        <pre>{response}</pre>
                    </details>
                }
            })}
            {entry.error.clone().map(|error| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <strong>"Error: "</strong>{error}
                </MessageBar>
            })}
            {http_warning.map(|warning| view! {
                <MessageBar intent=MessageBarIntent::Warning>{warning}</MessageBar>
            })}
        </div>
    }
}
