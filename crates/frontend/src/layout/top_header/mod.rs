//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Brand and navigation links
//! - Theme toggle
//! - User info and logout

use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::use_auth;

const NAV_LINKS: [(&str, &str, &str); 4] = [
    ("/", "dashboard", "Dashboard"),
    ("/releases", "releases", "Releases"),
    ("/rules", "rules", "Rules"),
    ("/docs", "docs", "Docs"),
];

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();

    let logout = move |_| auth.logout();

    view! {
        <nav class="top-header" aria-label="Main navigation">
            <div class="top-header__brand">
                <A href="/about">
                    <span class="top-header__title">"ReleasePack"</span>
                </A>
            </div>

            <Show when=move || auth.is_authenticated()>
                <ul class="top-header__nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, icon_name, label)| view! {
                            <li>
                                <A href=*href exact=true>
                                    {icon(icon_name)}
                                    <span>{*label}</span>
                                </A>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </Show>

            <div class="top-header__actions">
                <ThemeToggle />

                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| view! {
                        <A href="/login">
                            <span class="top-header__signin">"Sign in"</span>
                        </A>
                    }
                >
                    <div class="top-header__user">
                        {icon("user")}
                        <span>
                            {move || auth.user().map(|u| u.username).unwrap_or_default()}
                        </span>
                    </div>

                    <button class="top-header__icon-btn" on:click=logout title="Sign out" aria-label="Sign out">
                        {icon("logout")}
                    </button>
                </Show>
            </div>
        </nav>
    }
}
