use contracts::domain::rule::{
    Rule, ScenerulesDownloadRequest, ScenerulesEntry, ScenerulesListParams,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::rules::api;
use crate::domain::rules::validation::parse_year;
use crate::shared::components::NfoViewer;
use crate::shared::http::use_api;

/// Marks every entry matching the imported rule as downloaded.
pub fn mark_entries_downloaded(entries: &mut [ScenerulesEntry], rule: &Rule) {
    for entry in entries.iter_mut() {
        if rule.section.as_deref() == Some(entry.section.as_str()) && rule.year == Some(entry.year) {
            entry.is_downloaded = true;
            entry.local_rule_id = Some(rule.id);
        }
    }
}

/// Browses the rules published on scenerules.org and imports them.
///
/// The list loads on mount and again whenever a filter is committed.
#[component]
pub fn ScenerulesBrowser(on_downloaded: Callback<Rule>) -> impl IntoView {
    let client = StoredValue::new(use_api());
    let section = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let entries = RwSignal::new(Vec::<ScenerulesEntry>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    // Download keys of requests in flight.
    let downloading = RwSignal::new(Vec::<String>::new());

    let preview = RwSignal::new(None::<ScenerulesEntry>);
    let preview_text = RwSignal::new(String::new());
    let preview_loading = RwSignal::new(false);
    let preview_error = RwSignal::new(None::<String>);

    let load = move || {
        let params = match parse_year(&year.get_untracked()) {
            Ok(year) => ScenerulesListParams {
                section: Some(section.get_untracked().trim().to_string()).filter(|s| !s.is_empty()),
                year,
                ..Default::default()
            },
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::list_scenerules(&client.get_value(), &params).await {
                Ok(response) => entries.set(response.rules),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        section.track();
        year.track();
        load();
    });

    let download = Callback::new(move |entry: ScenerulesEntry| {
        let key = entry.download_key();
        if downloading.with_untracked(|keys| keys.contains(&key)) {
            return;
        }
        downloading.update(|keys| keys.push(key.clone()));
        error.set(None);
        let request = ScenerulesDownloadRequest::from(&entry);
        spawn_local(async move {
            match api::download_scenerule(&client.get_value(), &request).await {
                Ok(response) => {
                    let rule = response.rule;
                    entries.update(|list| mark_entries_downloaded(list, &rule));
                    preview.update(|open| {
                        if let Some(open) = open.as_mut() {
                            mark_entries_downloaded(std::slice::from_mut(open), &rule);
                        }
                    });
                    on_downloaded.run(rule);
                }
                Err(e) => error.set(Some(e.inline_message("download rule"))),
            }
            downloading.update(|keys| keys.retain(|k| *k != key));
        });
    });

    let open_preview = Callback::new(move |entry: ScenerulesEntry| {
        let url = entry.url_nfo.clone();
        preview.set(Some(entry));
        preview_text.set(String::new());
        preview_error.set(None);
        preview_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_scenerule_nfo(&url).await;
            // Another entry may have been opened meanwhile.
            if preview.with_untracked(|p| p.as_ref().map(|p| p.url_nfo.as_str()) != Some(url.as_str())) {
                return;
            }
            match result {
                Ok(text) => preview_text.set(text),
                Err(e) => {
                    log::warn!("Failed to load NFO preview from {}: {}", url, e);
                    preview_error.set(Some(e.to_string()));
                }
            }
            preview_loading.set(false);
        });
    });

    let close_preview = move |_| {
        preview.set(None);
        preview_text.set(String::new());
        preview_error.set(None);
        preview_loading.set(false);
    };

    let is_downloading = move |key: String| Signal::derive(move || downloading.with(|keys| keys.contains(&key)));

    view! {
        <div class="card scenerules">
            <div class="card__header"><h5>"scenerules.org"</h5></div>
            <div class="card__body">
                <div class="filters">
                    <div class="form-group">
                        <label for="sr-section">"Section"</label>
                        <input
                            type="text"
                            id="sr-section"
                            placeholder="EBOOK"
                            prop:value=move || section.get()
                            on:change=move |ev| section.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="sr-year">"Year"</label>
                        <input
                            type="text"
                            id="sr-year"
                            placeholder="2024"
                            prop:value=move || year.get()
                            on:change=move |ev| year.set(event_target_value(&ev))
                        />
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                        "Refresh"
                    </Button>
                </div>

                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}

                <Show when=move || loading.get()>
                    <Spinner />
                </Show>

                <Show when=move || !loading.get() && entries.with(|e| e.is_empty())>
                    <p class="text-muted">"No published rules match these filters."</p>
                </Show>

                <ul class="scenerules__list">
                    <For
                        each=move || entries.get()
                        key=|entry| (entry.download_key(), entry.is_downloaded)
                        let:entry
                    >
                        <ScenerulesRow
                            entry=entry
                            downloading=downloading
                            on_download=download
                            on_preview=open_preview
                        />
                    </For>
                </ul>

                {move || preview.get().map(|entry| {
                    let busy = is_downloading(entry.download_key());
                    let downloaded = entry.is_downloaded;
                    let target = entry.clone();
                    view! {
                        <div class="scenerules__preview" role="dialog" aria-label="Rule preview">
                            <div class="scenerules__preview-header">
                                <h6>{entry.name.clone()}</h6>
                                <a href=entry.url_html.clone() target="_blank" rel="noopener noreferrer">
                                    "Open on scenerules.org"
                                </a>
                                <Button size=ButtonSize::Small on_click=close_preview>"Close"</Button>
                            </div>
                            <Show when=move || preview_loading.get()>
                                <Spinner />
                            </Show>
                            {move || preview_error.get().map(|e| view! {
                                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                            })}
                            <Show when=move || preview_text.with(|t| !t.is_empty())>
                                <NfoViewer content=preview_text line_numbers=true />
                            </Show>
                            {(!downloaded).then(|| view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| download.run(target.clone())
                                    disabled=busy
                                >
                                    {move || if busy.get() { "Downloading..." } else { "Download" }}
                                </Button>
                            })}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn ScenerulesRow(
    entry: ScenerulesEntry,
    downloading: RwSignal<Vec<String>>,
    on_download: Callback<ScenerulesEntry>,
    on_preview: Callback<ScenerulesEntry>,
) -> impl IntoView {
    let key = entry.download_key();
    let busy = Signal::derive(move || downloading.with(|keys| keys.contains(&key)));
    let for_download = entry.clone();
    let for_preview = entry.clone();

    view! {
        <li class="scenerules__item">
            <span class="scenerules__name">{entry.name.clone()}</span>
            <span class="scenerules__meta">
                {format!("{} · {} · {}", entry.scene, entry.section, entry.year)}
            </span>
            <a href=entry.url_html.clone() target="_blank" rel="noopener noreferrer">"View"</a>
            <Button size=ButtonSize::Small on_click=move |_| on_preview.run(for_preview.clone())>
                "Preview"
            </Button>
            {if entry.is_downloaded {
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Downloaded"</Badge>
                }
                .into_any()
            } else {
                view! {
                    <Button
                        size=ButtonSize::Small
                        on_click=move |_| on_download.run(for_download.clone())
                        disabled=busy
                    >
                        {move || if busy.get() { "Downloading..." } else { "Download" }}
                    </Button>
                }
                .into_any()
            }}
        </li>
    }
}
