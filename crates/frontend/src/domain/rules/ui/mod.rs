pub mod list;
pub mod scenerules;
pub mod upload;

use contracts::domain::rule::Rule;
use leptos::prelude::*;
use thaw::*;

use self::list::RulesList;
use self::scenerules::ScenerulesBrowser;
use self::upload::RuleUploadPanel;
use crate::shared::components::NfoViewer;
use crate::shared::icons::icon;
use crate::shared::page_layout::PageLayout;

/// Local rules on the left with the selected rule's NFO below; upload and
/// scenerules.org import on the right.
#[component]
pub fn RulesPage() -> impl IntoView {
    let selected = RwSignal::new(None::<Rule>);
    let reload = RwSignal::new(0u32);

    // A new or imported rule shows up in the table and opens in the viewer.
    let on_new_rule = Callback::new(move |rule: Rule| {
        reload.update(|n| *n += 1);
        selected.set(Some(rule));
    });

    let selected_content =
        Signal::derive(move || selected.with(|r| r.as_ref().map(|r| r.content.clone()).unwrap_or_default()));

    view! {
        <PageLayout title="Rules" description="Scene packaging rules used to validate releases">
            <div class="rules-page">
                <div class="rules-page__main">
                    <RulesList selected=selected reload=reload />

                    <Show when=move || selected.with(Option::is_some)>
                        <div class="card rule-viewer">
                            <div class="card__header">
                                <h5>{move || selected.with(|r| r.as_ref().map(|r| r.name.clone()).unwrap_or_default())}</h5>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    attr:aria-label="Close"
                                    on_click=move |_| selected.set(None)
                                >
                                    {icon("close")}
                                </Button>
                            </div>
                            <NfoViewer content=selected_content line_numbers=true />
                        </div>
                    </Show>
                </div>
                <aside class="rules-page__side">
                    <RuleUploadPanel on_uploaded=on_new_rule />
                    <ScenerulesBrowser on_downloaded=on_new_rule />
                </aside>
            </div>
        </PageLayout>
    }
}
