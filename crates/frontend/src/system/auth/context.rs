use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::session::{self, AuthState};
use crate::shared::http::{use_api, ApiClient, ApiError};

/// Process-wide session handle.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    client: StoredValue<ApiClient>,
}

impl AuthContext {
    fn new(client: ApiClient) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            client: StoredValue::new(client),
        }
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    /// Re-resolve the stored token.
    pub fn check(&self) {
        let client = self.client.get_value();
        let state = self.state;
        spawn_local(async move {
            state.set(session::check_session(&client).await);
        });
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let client = self.client.get_value();
        let next = session::login_and_check(&client, username, password).await?;
        self.state.set(next);
        Ok(())
    }

    /// Signs out and reloads onto `/login` whatever the server answered.
    pub fn logout(&self) {
        let client = self.client.get_value();
        let state = self.state;
        spawn_local(async move {
            state.set(session::logout_best_effort(&client).await);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(use_api());
    provide_context(auth);
    auth.check();

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
