use contracts::dashboards::stats::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::dashboards::overview::api;
use crate::shared::components::StatCard;
use crate::shared::http::use_api;
use crate::shared::page_layout::PageLayout;
use crate::system::auth::use_auth;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let auth = use_auth();
    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        error.set(None);
        spawn_local(async move {
            match api::get_stats(&client.get_value()).await {
                Ok(data) => stats.set(Some(data)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };
    load();

    let stat = move |pick: fn(&DashboardStats) -> u64| Signal::derive(move || stats.with(|s| s.as_ref().map(pick)));

    let greeting = move || {
        auth.user()
            .map(|u| format!("Welcome back, {}", u.username))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <PageLayout title="Dashboard" description="Release and job activity">
            <h3 class="dashboard__greeting">{greeting}</h3>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {e}
                    " "
                    <Button size=ButtonSize::Small on_click=move |_| load()>"Retry"</Button>
                </MessageBar>
            })}

            <div class="stat-grid">
                <StatCard label="Total releases" icon_name="releases" value=stat(|s| s.total_releases) />
                <StatCard label="Total jobs" icon_name="dashboard" value=stat(|s| s.total_jobs) />
                <StatCard
                    label="My releases"
                    icon_name="user"
                    value=stat(|s| s.user_releases)
                    subtitle="Created by you"
                />
                <StatCard
                    label="My jobs"
                    icon_name="refresh"
                    value=stat(|s| s.user_jobs)
                    subtitle="Queued by you"
                />
            </div>

            <div class="dashboard__links">
                <A href="/releases">"Browse releases"</A>
                <A href="/rules">"Manage rules"</A>
            </div>
        </PageLayout>
    }
}
