use contracts::system::auth::{CurrentUserResponse, LoginRequest, LoginResponse, UserInfo};

use crate::shared::http::{ApiClient, ApiError, ApiRequest, HttpTransport};
use crate::shared::toast::ToastKind;

/// Exchange credentials for tokens and persist them.
///
/// Never sends a bearer token, and the password is masked in the debug log.
pub async fn login<T: HttpTransport>(
    client: &ApiClient<T>,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let credentials = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let request = ApiRequest::post("/auth/login")
        .json(&credentials)?
        .anonymous()
        .redact_body(credentials.redacted())
        .error_fallback("Login failed")
        .without_success_toast();

    let response: LoginResponse = client.send(request).await?;

    let Some(access_token) = response.access_token.as_deref().filter(|t| !t.is_empty()) else {
        let message = response
            .message
            .clone()
            .unwrap_or_else(|| "Login failed".to_string());
        client.toasts().error(message.clone(), None);
        return Err(ApiError::Decode(message));
    };

    client
        .tokens()
        .save(access_token, response.refresh_token.as_deref().unwrap_or_default());

    let name = response
        .user
        .as_ref()
        .map(|u| u.username.as_str())
        .unwrap_or(username);
    client
        .toasts()
        .publish(ToastKind::Success, "Signed in", Some(format!("Welcome {}", name)));

    Ok(response)
}

/// Invalidate the server-side session. Does not touch local tokens.
pub async fn logout<T: HttpTransport>(client: &ApiClient<T>) -> Result<(), ApiError> {
    client.execute(ApiRequest::post("/auth/logout")).await?;
    Ok(())
}

pub async fn current_user<T: HttpTransport>(client: &ApiClient<T>) -> Result<UserInfo, ApiError> {
    let response: CurrentUserResponse = client.get("/auth/me").await?;
    Ok(response.user)
}
