pub mod state;

use self::state::{create_state, ReleaseListState};
use crate::domain::releases::api;
use crate::shared::components::{PaginationControls, StatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::page_layout::PageLayout;
use contracts::domain::release::{RELEASE_STATUSES, RELEASE_TYPES};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn ReleaseList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let navigate = use_navigate();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        let params = state.with_untracked(|s| s.params());
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::list_releases(&client.get_value(), &params).await {
                Ok(response) => state.update(|s| {
                    s.items = response.releases;
                    s.pagination = response.pagination;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::warn!("Failed to fetch releases: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    // Any filter change restarts from the first page.
    let set_filter = move |apply: fn(&mut ReleaseListState, String), value: String| {
        state.update(|s| {
            apply(s, value);
            s.pagination.page = 1;
        });
        load();
    };

    let delete = move |id: i64| {
        if !confirm("Are you sure you want to delete this release?") {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            match api::delete_release(&client.get_value(), id).await {
                Ok(_) => load(),
                Err(e) => set_error.set(Some(e.inline_message("delete release"))),
            }
        });
    };

    let open = {
        let navigate = navigate.clone();
        move |id: i64| navigate(&format!("/releases/{}", id), Default::default())
    };

    view! {
        <PageLayout title="Releases" description="Manage every release">
            <div class="filters">
                <div class="form-group">
                    <label for="search">"Search"</label>
                    <input
                        type="text"
                        id="search"
                        placeholder="Title, author..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:change=move |ev| set_filter(|s, v| s.search = v, event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="filter-type">"Release type"</label>
                    <select
                        id="filter-type"
                        prop:value=move || state.with(|s| s.release_type.clone())
                        on:change=move |ev| set_filter(|s, v| s.release_type = v, event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        {RELEASE_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="filter-status">"Status"</label>
                    <select
                        id="filter-status"
                        prop:value=move || state.with(|s| s.status.clone())
                        on:change=move |ev| set_filter(|s, v| s.status = v, event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        {RELEASE_STATUSES.iter().map(|(value, label)| view! { <option value=*value>{*label}</option> }).collect_view()}
                    </select>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        state.update(|s| s.reset_filters());
                        load();
                    }
                >
                    "Reset"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 70px;">"ID"</TableHeaderCell>
                        <TableHeaderCell>"Title"</TableHeaderCell>
                        <TableHeaderCell>"Author"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 120px;">"Type"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 120px;">"Status"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 160px;">"Created"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px; text-align: center;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="7" attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        let items = state.with(|s| s.items.clone());
                        if items.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="7" attr:style="padding: 40px; text-align: center;">
                                        "No releases found"
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        items.into_iter().map(|release| {
                            let id = release.id;
                            let open_row = open.clone();
                            let open_btn = open.clone();
                            let title = release.title();
                            let author = release.author().unwrap_or("—").to_string();
                            let release_type = release.release_type.clone();
                            let status = release.status.clone();
                            let created_at = format_datetime(&release.created_at);
                            view! {
                                <TableRow on:dblclick=move |_| open_row(id) attr:style="cursor: pointer;">
                                    <TableCell>{id}</TableCell>
                                    <TableCell>{title}</TableCell>
                                    <TableCell>{author}</TableCell>
                                    <TableCell>
                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                            {release_type}
                                        </Badge>
                                    </TableCell>
                                    <TableCell><StatusBadge status=status /></TableCell>
                                    <TableCell>{created_at}</TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                appearance=ButtonAppearance::Transparent
                                                attr:title="Open"
                                                on_click=move |e: ev::MouseEvent| {
                                                    e.stop_propagation();
                                                    open_btn(id);
                                                }
                                            >
                                                {icon("eye")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Transparent
                                                attr:title="Delete"
                                                on_click=move |e: ev::MouseEvent| {
                                                    e.stop_propagation();
                                                    delete(id);
                                                }
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                pagination=Signal::derive(move || state.with(|s| s.pagination.clone()))
                on_page_change=Callback::new(move |page: u32| {
                    state.update(|s| s.pagination.page = page);
                    load();
                })
                on_page_size_change=Callback::new(move |size: u32| {
                    state.update(|s| {
                        s.pagination.per_page = size;
                        s.pagination.page = 1;
                    });
                    load();
                })
            />
        </PageLayout>
    }
}
