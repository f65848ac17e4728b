use contracts::domain::release::{Release, ReleaseAction};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::parse_release_id;
use crate::domain::releases::api;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::http::{use_api, ApiClient, ApiError};
use crate::shared::page_layout::PageLayout;

#[component]
pub fn ReleaseDetails() -> impl IntoView {
    let params = use_params_map();
    let client = StoredValue::new(use_api());
    let release = RwSignal::new(None::<Result<Release, ApiError>>);

    Effect::new(move |_| {
        let raw_id = params.with(|p| p.get("id"));
        release.set(None);
        spawn_local(async move {
            let result = match parse_release_id(raw_id) {
                Ok(id) => api::get_release(&client.get_value(), id).await,
                Err(e) => Err(e),
            };
            release.set(Some(result));
        });
    });

    move || match release.get() {
        None => view! {
            <PageLayout title="Release details" description="Loading...">
                <div class="page-loading"><Spinner /></div>
            </PageLayout>
        }
        .into_any(),
        Some(Err(e)) => view! {
            <PageLayout title="Release details" description="Error">
                <MessageBar intent=MessageBarIntent::Error>{e.to_string()}</MessageBar>
            </PageLayout>
        }
        .into_any(),
        Some(Ok(release)) => view! { <ReleaseDetailsView release=release client=client /> }.into_any(),
    }
}

#[component]
fn ReleaseDetailsView(release: Release, client: StoredValue<ApiClient>) -> impl IntoView {
    let navigate = use_navigate();
    let id = release.id;
    let title = format!("Release: {}", release.title());
    let description = format!("Author: {}", release.author().unwrap_or("Not specified"));
    let metadata = serde_json::to_string_pretty(&release.release_metadata.clone().unwrap_or_default())
        .unwrap_or_default();

    let go_back = {
        let navigate = navigate.clone();
        move |_| navigate("/releases", Default::default())
    };
    let go_edit = move |_| navigate(&format!("/releases/{}/edit", id), Default::default());
    let action_error = RwSignal::new(None::<String>);

    view! {
        <PageLayout title=title description=description>
            <div class="detail-grid">
                <div class="card">
                    <div class="card__header"><h5>"General information"</h5></div>
                    <dl class="card__body detail-list">
                        <dt>"ID"</dt>
                        <dd>{id}</dd>
                        <dt>"Type"</dt>
                        <dd>
                            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                                {release.release_type.clone()}
                            </Badge>
                        </dd>
                        <dt>"Status"</dt>
                        <dd><StatusBadge status=release.status.clone() /></dd>
                        <dt>"Created"</dt>
                        <dd>{format_datetime(&release.created_at)}</dd>
                        {release.file_path.clone().map(|path| view! {
                            <dt>"File path"</dt>
                            <dd><code>{path}</code></dd>
                        })}
                    </dl>
                </div>
                <div class="card">
                    <div class="card__header"><h5>"Metadata"</h5></div>
                    <pre class="card__body json-block">{metadata}</pre>
                </div>
            </div>

            {move || action_error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <div class="detail-actions"><Space>
                <Button appearance=ButtonAppearance::Secondary on_click=go_back>"← Back"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=go_edit>"Edit"</Button>
                {ReleaseAction::all()
                    .into_iter()
                    .map(|action| view! { <ActionButton release_id=id action=action client=client error=action_error /> })
                    .collect_view()}
            </Space></div>
        </PageLayout>
    }
}

/// Queues one job. The button stays disabled while its request is in
/// flight so a double click cannot queue the job twice.
#[component]
fn ActionButton(
    release_id: i64,
    action: ReleaseAction,
    client: StoredValue<ApiClient>,
    /// Shared inline error of the details view.
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let busy = RwSignal::new(false);

    let run = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        spawn_local(async move {
            if let Err(e) = api::run_action(&client.get_value(), release_id, action).await {
                log::warn!("{} on release {} failed: {}", action.label(), release_id, e);
                let what = format!("run {}", action.label());
                error.set(Some(e.inline_message(&what)));
            }
            busy.set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=run
            disabled=busy
            attr:title=action.description()
            attr:aria-label=action.description()
        >
            {move || if busy.get() { format!("{}...", action.label()) } else { action.label().to_string() }}
        </Button>
    }
}
