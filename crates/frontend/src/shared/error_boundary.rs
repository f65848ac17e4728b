use leptos::error::Errors;
use leptos::prelude::*;

/// Contains `Err` values rendered by `children` so one failing page does not
/// take the whole shell down.
#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback={|errors: ArcRwSignal<Errors>| {
            let messages = {
                let errors = errors.clone();
                move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| view! { <p class="mb-2">{e.to_string()}</p> })
                        .collect_view()
                }
            };
            view! {
                <div class="error-boundary" role="alert">
                    <h4>"Something went wrong"</h4>
                    {messages}
                    <div class="error-boundary__actions">
                        <button
                            type="button"
                            class="btn-primary"
                            on:click=move |_| errors.set(Errors::default())
                        >
                            "Try again"
                        </button>
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=|_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().set_href("/");
                                }
                            }
                        >
                            "Back to home"
                        </button>
                    </div>
                </div>
            }
        }}>
            {children()}
        </ErrorBoundary>
    }
}
