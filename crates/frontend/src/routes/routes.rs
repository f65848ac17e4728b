use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::overview::ui::OverviewDashboard;
use crate::domain::releases::ui::details::ReleaseDetails;
use crate::domain::releases::ui::edit::ReleaseEdit;
use crate::domain::releases::ui::list::ReleaseList;
use crate::domain::rules::ui::RulesPage;
use crate::layout::Shell;
use crate::site::{AboutPage, DocsPage};
use crate::system::auth::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

/// `/login`, `/about` and `/docs` are public; everything else needs a session.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/docs") view=DocsPage />

                    <Route
                        path=path!("/")
                        view=|| view! { <RequireAuth><OverviewDashboard /></RequireAuth> }
                    />
                    <Route
                        path=path!("/releases")
                        view=|| view! { <RequireAuth><ReleaseList /></RequireAuth> }
                    />
                    <Route
                        path=path!("/releases/:id")
                        view=|| view! { <RequireAuth><ReleaseDetails /></RequireAuth> }
                    />
                    <Route
                        path=path!("/releases/:id/edit")
                        view=|| view! { <RequireAuth><ReleaseEdit /></RequireAuth> }
                    />
                    <Route
                        path=path!("/rules")
                        view=|| view! { <RequireAuth><RulesPage /></RequireAuth> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
