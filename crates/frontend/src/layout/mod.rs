pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use crate::shared::debug::panel::DebugPanel;
use crate::shared::error_boundary::AppErrorBoundary;
use crate::shared::toast::container::ToastContainer;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |               Content                    |
/// +------------------------------------------+
/// ```
///
/// Toasts and the debug panel float above the page.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <main class="app-main">
                <AppErrorBoundary>
                    {children()}
                </AppErrorBoundary>
            </main>

            <ToastContainer />
            <DebugPanel />
        </div>
    }
}
