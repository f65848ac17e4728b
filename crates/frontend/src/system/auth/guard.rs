use leptos::prelude::*;
use leptos_router::components::Redirect;
use thaw::*;

use super::context::use_auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Access {
    Pending,
    Granted,
    Denied,
}

/// Renders `children` only for a signed-in user; a spinner while the session
/// is being checked, and a redirect to `/login` otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let access = Memo::new(move |_| {
        let state = auth.state.get();
        if state.loading {
            Access::Pending
        } else if state.user.is_some() {
            Access::Granted
        } else {
            Access::Denied
        }
    });

    move || match access.get() {
        Access::Pending => view! {
            <div class="page-loading">
                <Spinner />
            </div>
        }
        .into_any(),
        Access::Granted => children().into_any(),
        Access::Denied => view! { <Redirect path="/login" /> }.into_any(),
    }
}
