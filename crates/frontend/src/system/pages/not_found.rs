use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::page_layout::PageLayout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageLayout title="Page not found">
            <div class="not-found">
                <p>"The page you are looking for does not exist."</p>
                <A href="/">"Back to home"</A>
            </div>
        </PageLayout>
    }
}
