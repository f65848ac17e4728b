use serde::Serialize;
use serde_json::Value;

use super::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Text(String),
    /// Raw file bytes, sent as selected.
    File { file_name: String, content: Vec<u8> },
}

/// Multipart body; field order is preserved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    fields: Vec<(String, FormValue)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), FormValue::Text(value.into())));
        self
    }

    /// Adds a text field only when `value` is non-blank.
    pub fn text_if_present(self, name: &str, value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self
        } else {
            self.text(name, trimmed)
        }
    }

    pub fn file(mut self, name: &str, file_name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.fields.push((
            name.to_string(),
            FormValue::File {
                file_name: file_name.to_string(),
                content: content.into(),
            },
        ));
        self
    }

    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }

    /// What the debug log shows for this body.
    pub fn log_value(&self) -> Option<Value> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Json(value) => Some(value.clone()),
            RequestBody::Multipart(_) => Some(Value::String("[FormData]".to_string())),
        }
    }
}

/// One call against the API, relative to the configured base URL.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: RequestBody,
    /// Attach the stored bearer token.
    pub authenticated: bool,
    /// Replaces the body in debug entries (credential redaction).
    pub log_body: Option<Value>,
    /// Message used when an error body carries none.
    pub error_fallback: Option<String>,
    /// Announce success of non-GET calls with a toast.
    pub success_toast: bool,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: RequestBody::Empty,
            authenticated: true,
            log_body: None,
            error_fallback: None,
            success_toast: true,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Put, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub fn redact_body(mut self, shown: Value) -> Self {
        self.log_body = Some(shown);
        self
    }

    pub fn error_fallback(mut self, message: impl Into<String>) -> Self {
        self.error_fallback = Some(message.into());
        self
    }

    pub fn without_success_toast(mut self) -> Self {
        self.success_toast = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_if_present_skips_blank() {
        let form = MultipartForm::new()
            .text_if_present("name", "  ")
            .text_if_present("scene", " English ");
        assert!(form.get("name").is_none());
        assert_eq!(form.get("scene"), Some(&FormValue::Text("English".to_string())));
    }

    #[test]
    fn test_multipart_logged_as_placeholder() {
        let body = RequestBody::Multipart(MultipartForm::new().file("file", "a.nfo", "x"));
        assert_eq!(body.log_value(), Some(Value::String("[FormData]".into())));
        assert_eq!(RequestBody::Empty.log_value(), None);
    }
}
