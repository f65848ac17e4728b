use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Copy of the request that is safe to keep in logs.
    pub fn redacted(&self) -> serde_json::Value {
        serde_json::json!({
            "username": self.username,
            "password": "***",
        })
    }
}

/// Body of a successful `/auth/login`.
///
/// Tokens are optional on the wire: the API may answer 200 without issuing
/// a session (e.g. an account pending activation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_hides_password() {
        let req = LoginRequest {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        let redacted = req.redacted();
        assert_eq!(redacted["username"], "alice");
        assert_eq!(redacted["password"], "***");
        assert!(!redacted.to_string().contains("hunter2"));
    }

    #[test]
    fn test_login_response_without_tokens() {
        let resp: LoginResponse = serde_json::from_str(r#"{"message":"pending"}"#).unwrap();
        assert!(resp.access_token.is_none());
        assert!(resp.user.is_none());
        assert_eq!(resp.message.as_deref(), Some("pending"));
    }

    #[test]
    fn test_current_user_without_email() {
        let resp: CurrentUserResponse =
            serde_json::from_str(r#"{"user":{"id":7,"username":"bob"}}"#).unwrap();
        assert_eq!(resp.user.id, 7);
        assert_eq!(resp.user.email, None);
    }
}
