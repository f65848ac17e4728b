pub mod state;

use contracts::domain::rule::Rule;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, RuleListState};
use crate::domain::rules::api;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::http::use_api;
use crate::shared::icons::icon;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Local rules table. Bumping `reload` refetches the current page.
#[component]
pub fn RulesList(selected: RwSignal<Option<Rule>>, reload: RwSignal<u32>) -> impl IntoView {
    let client = StoredValue::new(use_api());
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        let params = match state.with_untracked(RuleListState::params) {
            Ok(params) => params,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::list_rules(&client.get_value(), &params).await {
                Ok(response) => state.update(|s| {
                    s.items = response.rules;
                    s.pagination = response.pagination;
                }),
                Err(e) => {
                    log::warn!("Failed to fetch rules: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        reload.track();
        load();
    });

    let set_filter = move |apply: fn(&mut RuleListState, String), value: String| {
        state.update(|s| {
            apply(s, value);
            s.pagination.page = 1;
        });
        load();
    };

    let delete = move |id: i64| {
        if !confirm("Are you sure you want to delete this rule?") {
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            match api::delete_rule(&client.get_value(), id).await {
                Ok(_) => {
                    if selected.with_untracked(|r| r.as_ref().map(|r| r.id) == Some(id)) {
                        selected.set(None);
                    }
                    load();
                }
                Err(e) => set_error.set(Some(e.inline_message("delete rule"))),
            }
        });
    };

    let filter_input = move |id: &'static str, label: &'static str, placeholder: &'static str, read: fn(&RuleListState) -> String, apply: fn(&mut RuleListState, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type="text"
                    id=id
                    placeholder=placeholder
                    prop:value=move || state.with(read)
                    on:change=move |ev| set_filter(apply, event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="rules-list">
            <div class="filters">
                {filter_input("rule-search", "Search", "Name or content", |s| s.search.clone(), |s, v| s.search = v)}
                {filter_input("rule-scene", "Scene", "English", |s| s.scene.clone(), |s, v| s.scene = v)}
                {filter_input("rule-section", "Section", "EBOOK", |s| s.section.clone(), |s, v| s.section = v)}
                {filter_input("rule-year", "Year", "2024", |s| s.year.clone(), |s, v| s.year = v)}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        state.update(|s| s.reset_filters());
                        load();
                    }
                >
                    "Reset"
                </Button>
            </div>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">"Scene"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">"Section"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 70px;">"Year"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 150px;">"Updated"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 100px; text-align: center;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6" attr:style="padding: 40px; text-align: center;">
                                        <Spinner />
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        let items = state.with(|s| s.items.clone());
                        if items.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6" attr:style="padding: 40px; text-align: center;">
                                        "No rules found"
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        items.into_iter().map(|rule| {
                            let id = rule.id;
                            let is_selected = move || selected.with(|r| r.as_ref().map(|r| r.id) == Some(id));
                            let name = rule.name.clone();
                            let scene = rule.scene.clone().unwrap_or_default();
                            let section = rule.section.clone().unwrap_or_default();
                            let year = rule.year.map(|y| y.to_string()).unwrap_or_default();
                            let updated = format_date(&rule.updated_at);
                            let rule = StoredValue::new(rule);
                            view! {
                                <TableRow
                                    on:click=move |_| selected.set(Some(rule.get_value()))
                                    attr:style="cursor: pointer;"
                                >
                                    <TableCell>
                                        <span class={move || if is_selected() { "rule-name rule-name--selected" } else { "rule-name" }}>
                                            {name}
                                        </span>
                                    </TableCell>
                                    <TableCell>{scene}</TableCell>
                                    <TableCell>{section}</TableCell>
                                    <TableCell>{year}</TableCell>
                                    <TableCell>{updated}</TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                appearance=ButtonAppearance::Transparent
                                                attr:title="View"
                                                on_click=move |e: ev::MouseEvent| {
                                                    e.stop_propagation();
                                                    selected.set(Some(rule.get_value()));
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
                pagination=Signal::derive(move || state.with(|s| s.pagination))
                on_page_change=Callback::new(move |page: u32| {
                    state.update(|s| s.pagination.page = page);
                    load();
                })
            />
        </div>
    }
}
