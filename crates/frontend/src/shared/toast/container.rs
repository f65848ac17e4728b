use leptos::prelude::*;
use std::time::Duration;

use super::{ToastBus, ToastMessage, ToastQueue};
use crate::shared::date_utils::format_time;

const ENTER_DELAY: Duration = Duration::from_millis(10);
const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// The one subscriber of the toast bus; renders the visible queue.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let bus = use_context::<ToastBus>().expect("ToastBus not provided");
    let queue = RwSignal::new(ToastQueue::default());

    let subscription = bus.subscribe(move |toast| {
        let toast = toast.clone();
        queue.update(|q| q.push(toast));
    });
    on_cleanup(move || bus.unsubscribe(subscription));

    let on_close = Callback::new(move |id: String| {
        queue.update(|q| {
            q.remove(&id);
        });
    });

    view! {
        <Show when=move || queue.with(|q| !q.is_empty())>
            <div class="toast-container" aria-live="polite">
                <For
                    each=move || queue.with(|q| q.items().to_vec())
                    key=|toast| toast.id.clone()
                    children=move |toast| view! { <ToastItem toast=toast on_close=on_close /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ToastItem(toast: ToastMessage, on_close: Callback<String>) -> impl IntoView {
    let visible = RwSignal::new(false);
    let id = StoredValue::new(toast.id.clone());

    let dismiss = move || {
        visible.set(false);
        set_timeout(move || on_close.run(id.get_value()), EXIT_TRANSITION);
    };

    set_timeout(move || visible.set(true), ENTER_DELAY);
    if let Ok(handle) = set_timeout_with_handle(dismiss, toast.kind.lifetime()) {
        on_cleanup(move || handle.clear());
    }

    let class = format!("toast {}", toast.kind.css_modifier());
    let time = format_time(&toast.timestamp);

    view! {
        <div
            class=move || if visible.get() { format!("{} toast--visible", class) } else { class.clone() }
            role="alert"
        >
            <span class="toast__icon">{toast.kind.icon()}</span>
            <div class="toast__body">
                <strong>{toast.message}</strong>
                {toast.details.map(|details| view! {
                    <details class="toast__details">
                        <summary>"Details"</summary>
                        <pre>{details}</pre>
                    </details>
                })}
                <small class="toast__time">{time}</small>
            </div>
            <button
                type="button"
                class="toast__close"
                aria-label="Close"
                on:click=move |_| dismiss()
            >
                "×"
            </button>
        </div>
    }
}
