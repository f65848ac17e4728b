//! PageLayout: standard root wrapper for every routed page.
//!
//! Renders the page title, an optional lead paragraph, then the content.
//!
//! ```rust,ignore
//! view! {
//!     <PageLayout title="Releases" description="Every packaged release">
//!         <ReleasesTable />
//!     </PageLayout>
//! }
//! ```

use leptos::prelude::*;

#[component]
pub fn PageLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div class=full_class>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                {description.map(|d| view! { <p class="page__description">{d}</p> })}
            </div>
            <div class="page__content">{children()}</div>
        </div>
    }
}
