use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Previous/next controls over a server-side `Pagination` block (pages are
/// 1-based).
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    on_page_change: Callback<u32>,
    #[prop(optional)] on_page_size_change: Option<Callback<u32>>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !pagination.get().has_prev()
                title="First page"
            >
                "«"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_prev() {
                        on_page_change.run(p.page - 1);
                    }
                }
                disabled=move || !pagination.get().has_prev()
                title="Previous page"
            >
                "‹"
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("Page {} / {} ({} items)", p.page, p.pages.max(1), p.total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next() {
                        on_page_change.run(p.page + 1);
                    }
                }
                disabled=move || !pagination.get().has_next()
                title="Next page"
            >
                "›"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(pagination.get().pages.max(1))
                disabled=move || !pagination.get().has_next()
                title="Last page"
            >
                "»"
            </button>
            {on_page_size_change.map(|on_size| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_size.run(size);
                        }
                    }
                    prop:value=move || pagination.get().per_page.to_string()
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|&size| view! {
                        <option value=size.to_string() selected=move || pagination.get().per_page == size>
                            {size.to_string()}
                        </option>
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}
