//! Session lifecycle, independent of the reactive layer.

use contracts::system::auth::UserInfo;

use super::api;
use crate::shared::http::{ApiClient, ApiError, HttpTransport};

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

/// Nothing is known until the first check completes.
impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn settled(user: Option<UserInfo>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Resolves the stored token into a user.
///
/// Tokens are dropped only when the server answers 401; a network failure
/// keeps them so a flaky connection does not sign the user out.
pub async fn check_session<T: HttpTransport>(client: &ApiClient<T>) -> AuthState {
    if client.tokens().access_token().is_none() {
        return AuthState::settled(None);
    }

    match api::current_user(client).await {
        Ok(user) => {
            log::info!("session restored for {}", user.username);
            AuthState::settled(Some(user))
        }
        Err(err) => {
            log::error!("Auth check failed: {}", err);
            if err.is_unauthorized() {
                client.tokens().clear();
            }
            AuthState::settled(None)
        }
    }
}

pub async fn login_and_check<T: HttpTransport>(
    client: &ApiClient<T>,
    username: &str,
    password: &str,
) -> Result<AuthState, ApiError> {
    api::login(client, username, password).await?;
    Ok(check_session(client).await)
}

/// Best-effort server logout; local tokens are cleared whatever the outcome.
pub async fn logout_best_effort<T: HttpTransport>(client: &ApiClient<T>) -> AuthState {
    if let Err(err) = api::logout(client).await {
        log::warn!("logout request failed, clearing local session anyway: {}", err);
    }
    client.tokens().clear();
    AuthState::settled(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::Harness;
    use crate::shared::toast::ToastKind;
    use futures::executor::block_on;
    use serde_json::json;

    fn alice() -> serde_json::Value {
        json!({"user": {"id": 1, "username": "alice", "email": "a@example.org"}})
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_check_without_token_settles_without_request() {
        let h = Harness::new();
        let state = block_on(check_session(&h.client));
        assert_eq!(state, AuthState::settled(None));
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_check_with_valid_token() {
        let h = Harness::new();
        h.client.tokens().save("tok", "ref");
        h.transport.respond(200, "OK", alice());

        let state = block_on(check_session(&h.client));
        assert!(!state.loading);
        assert_eq!(state.user.map(|u| u.username), Some("alice".to_string()));
    }

    #[test]
    fn test_check_401_clears_tokens() {
        let h = Harness::new();
        h.client.tokens().save("expired", "ref");
        h.transport
            .respond(401, "Unauthorized", json!({"message": "Token has expired"}));

        let state = block_on(check_session(&h.client));
        assert_eq!(state, AuthState::settled(None));
        assert_eq!(h.client.tokens().access_token(), None);
        assert_eq!(h.client.tokens().refresh_token(), None);
    }

    #[test]
    fn test_check_network_error_keeps_tokens() {
        let h = Harness::new();
        h.client.tokens().save("tok", "ref");
        h.transport.fail_network("Failed to fetch");

        let state = block_on(check_session(&h.client));
        assert_eq!(state, AuthState::settled(None));
        assert_eq!(h.client.tokens().access_token().as_deref(), Some("tok"));
        assert_eq!(h.client.tokens().refresh_token().as_deref(), Some("ref"));
    }

    #[test]
    fn test_check_server_error_keeps_tokens() {
        let h = Harness::new();
        h.client.tokens().save("tok", "ref");
        h.transport.respond(500, "Internal Server Error", json!({}));

        block_on(check_session(&h.client));
        assert_eq!(h.client.tokens().access_token().as_deref(), Some("tok"));
    }

    #[test]
    fn test_valid_login_persists_tokens_and_checks() {
        let h = Harness::new();
        h.transport.respond(
            200,
            "OK",
            json!({"access_token": "acc", "refresh_token": "ref", "user": {"id": 1, "username": "alice"}}),
        );
        h.transport.respond(200, "OK", alice());

        let state = block_on(login_and_check(&h.client, "alice", "hunter2")).unwrap();

        assert!(state.is_authenticated());
        assert_eq!(h.client.tokens().access_token().as_deref(), Some("acc"));
        assert_eq!(h.client.tokens().refresh_token().as_deref(), Some("ref"));

        let requests = h.transport.requests();
        assert!(requests[0].headers.get("Authorization").is_none());
        assert_eq!(
            requests[1].headers.get("Authorization").map(String::as_str),
            Some("Bearer acc")
        );

        let toasts = h.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "Signed in");
        assert_eq!(toasts[0].details.as_deref(), Some("Welcome alice"));

        // The logged login body never carries the password.
        let logged = h.client.debug().list();
        let dispatch = logged.last().unwrap();
        assert_eq!(dispatch.body.as_ref().unwrap()["password"], "***");
    }

    #[test]
    fn test_login_without_refresh_token_stores_empty() {
        let h = Harness::new();
        h.transport.respond(200, "OK", json!({"access_token": "acc"}));
        h.transport.respond(200, "OK", alice());

        block_on(login_and_check(&h.client, "alice", "pw")).unwrap();
        assert_eq!(h.client.tokens().access_token().as_deref(), Some("acc"));
        assert_eq!(h.client.tokens().refresh_token(), None);
    }

    #[test]
    fn test_invalid_login_stores_nothing() {
        let h = Harness::new();
        h.transport
            .respond(401, "Unauthorized", json!({"message": "Invalid credentials"}));

        let err = block_on(login_and_check(&h.client, "alice", "wrong")).unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(h.client.tokens().access_token(), None);
        let toasts = h.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[test]
    fn test_invalid_login_without_message_uses_fallback() {
        let h = Harness::new();
        h.transport.respond(400, "Bad Request", json!({}));

        let err = block_on(login_and_check(&h.client, "alice", "")).unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn test_logout_clears_tokens_even_when_server_fails() {
        let h = Harness::new();
        h.client.tokens().save("tok", "ref");
        h.transport.fail_network("Failed to fetch");

        let state = block_on(logout_best_effort(&h.client));
        assert_eq!(state, AuthState::settled(None));
        assert_eq!(h.client.tokens().access_token(), None);
        assert_eq!(h.client.tokens().refresh_token(), None);
    }

    #[test]
    fn test_logout_sends_bearer_then_clears() {
        let h = Harness::new();
        h.client.tokens().save("tok", "ref");
        h.transport
            .respond(200, "OK", json!({"message": "Logged out"}));

        block_on(logout_best_effort(&h.client));
        let sent = &h.transport.requests()[0];
        assert_eq!(sent.url, "/api/auth/logout");
        assert_eq!(
            sent.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok")
        );
        assert_eq!(h.client.tokens().access_token(), None);
    }
}
