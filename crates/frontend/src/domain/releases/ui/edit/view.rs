use contracts::domain::release::{RELEASE_STATUSES, RELEASE_TYPES};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::view_model::{ReleaseEditViewModel, ReleaseForm};
use crate::domain::releases::ui::parse_release_id;
use crate::shared::http::{use_api, ApiError};
use crate::shared::page_layout::PageLayout;

/// An unparseable `:id` is surfaced to the error boundary.
#[component]
pub fn ReleaseEdit() -> Result<impl IntoView, ApiError> {
    let params = use_params_map();
    let id = parse_release_id(params.with_untracked(|p| p.get("id")))?;
    let navigate = use_navigate();

    let vm = ReleaseEditViewModel::new(id, use_api());
    vm.load();

    let details_path = format!("/releases/{}", id);
    let on_cancel = {
        let navigate = navigate.clone();
        let path = details_path.clone();
        move |_| navigate(&path, Default::default())
    };
    let save = move || {
        let navigate = navigate.clone();
        let path = details_path.clone();
        vm.save_command(move || navigate(&path, Default::default()));
    };
    let on_submit = {
        let save = save.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            save();
        }
    };

    let text_field = move |label: &'static str, name: &'static str, read: fn(&ReleaseForm) -> String, write: fn(&mut ReleaseForm, String)| {
        view! {
            <div class="form-group">
                <label for=name>{label}</label>
                <input
                    type="text"
                    id=name
                    prop:value=move || vm.form.with(|f| f.as_ref().map(read).unwrap_or_default())
                    on:input=move |ev| vm.update(|f| write(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    Ok(view! {
        <PageLayout title="Edit release" description=format!("Release #{}", id)>
            {move || vm.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show
                when=move || vm.form.with(Option::is_some)
                fallback=move || view! {
                    <Show when=move || vm.error.with(Option::is_none)>
                        <div class="page-loading"><Spinner /></div>
                    </Show>
                }
            >
                <form class="details-form" on:submit=on_submit.clone()>
                    {text_field("Title", "title", |f| f.title.clone(), |f, v| f.title = v)}
                    {text_field("Author", "author", |f| f.author.clone(), |f, v| f.author = v)}

                    <div class="form-group">
                        <label for="release_type">"Type"</label>
                        <select
                            id="release_type"
                            prop:value=move || vm.form.with(|f| f.as_ref().map(|f| f.release_type.clone()).unwrap_or_default())
                            on:change=move |ev| vm.update(|f| f.release_type = event_target_value(&ev))
                        >
                            {RELEASE_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            prop:value=move || vm.form.with(|f| f.as_ref().map(|f| f.status.clone()).unwrap_or_default())
                            on:change=move |ev| vm.update(|f| f.status = event_target_value(&ev))
                        >
                            {RELEASE_STATUSES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    {text_field("File path", "file_path", |f| f.file_path.clone(), |f, v| f.file_path = v)}

                    <div class="details-actions">
                        {
                        let save = save.clone();
                        let on_cancel = on_cancel.clone();
                        view! {
                        <Space>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=vm.saving
                                on_click={
                                    let save = save.clone();
                                    move |_| save()
                                }
                            >
                                {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=on_cancel.clone()>
                                "Cancel"
                            </Button>
                        </Space>
                        }
                        }
                    </div>
                </form>
            </Show>
        </PageLayout>
    })
}
