use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::routes::AppRoutes;
use crate::shared::api_utils::{api_base, debug_default};
use crate::shared::debug::{DebugLog, DebugMode};
use crate::shared::http::{ApiClient, FetchTransport};
use crate::shared::storage::default_store;
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::ToastBus;
use crate::system::auth::storage::TokenStore;
use crate::system::auth::AuthProvider;

/// Builds the services once and hands them down through context.
#[component]
pub fn App() -> impl IntoView {
    let store = default_store();

    let debug_mode = DebugMode::load(store.clone(), debug_default());
    let debug_log = DebugLog::new(debug_mode.is_enabled());
    let toasts = ToastBus::new();
    let client = ApiClient::new(
        api_base(),
        FetchTransport,
        TokenStore::new(store.clone()),
        debug_log.clone(),
        toasts.clone(),
    );
    log::info!(
        "API base {}, debug mode {}",
        api_base(),
        if debug_mode.is_enabled() { "on" } else { "off" }
    );

    provide_context(client);
    provide_context(toasts);
    provide_context(debug_log);
    provide_context(debug_mode);

    view! {
        <ConfigProvider>
            <ThemeProvider store=store>
                <AuthProvider>
                    <AppRoutes />
                </AuthProvider>
            </ThemeProvider>
        </ConfigProvider>
    }
}
