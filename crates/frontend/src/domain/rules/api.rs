use contracts::domain::rule::{
    CreateRuleDto, Rule, RuleListParams, RuleListResponse, RuleResponse,
    ScenerulesDownloadRequest, ScenerulesDownloadResponse, ScenerulesListParams,
    ScenerulesListResponse, UpdateRuleDto, UploadRuleResponse,
};
use contracts::shared::message::MessageResponse;

use super::validation::validate_rule_file_name;
use crate::shared::api_utils::with_query;
use crate::shared::components::decode_nfo;
use crate::shared::http::{ApiClient, ApiError, ApiRequest, HttpTransport, MultipartForm};

/// A rule file read in the browser, plus the optional form fields sent
/// alongside it. `content` holds the file bytes exactly as read; NFO files
/// are usually CP437, not UTF-8.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleUpload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub name: String,
    pub scene: String,
    pub section: String,
    pub year: String,
}

impl RuleUpload {
    fn into_form(self) -> MultipartForm {
        MultipartForm::new()
            .file("file", &self.file_name, self.content)
            .text_if_present("name", &self.name)
            .text_if_present("scene", &self.scene)
            .text_if_present("section", &self.section)
            .text_if_present("year", &self.year)
    }
}

pub async fn list_rules<T: HttpTransport>(
    client: &ApiClient<T>,
    params: &RuleListParams,
) -> Result<RuleListResponse, ApiError> {
    client.get(&with_query("/rules", params)?).await
}

pub async fn get_rule<T: HttpTransport>(client: &ApiClient<T>, id: i64) -> Result<Rule, ApiError> {
    let response: RuleResponse = client.get(&format!("/rules/{}", id)).await?;
    Ok(response.rule)
}

pub async fn create_rule<T: HttpTransport>(
    client: &ApiClient<T>,
    dto: &CreateRuleDto,
) -> Result<Rule, ApiError> {
    let response: RuleResponse = client.send(ApiRequest::post("/rules").json(dto)?).await?;
    Ok(response.rule)
}

pub async fn update_rule<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
    dto: &UpdateRuleDto,
) -> Result<Rule, ApiError> {
    let request = ApiRequest::put(format!("/rules/{}", id)).json(dto)?;
    let response: RuleResponse = client.send(request).await?;
    Ok(response.rule)
}

pub async fn delete_rule<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
) -> Result<MessageResponse, ApiError> {
    client.send(ApiRequest::delete(format!("/rules/{}", id))).await
}

/// Uploads a rule file as multipart form data.
///
/// The file name is checked first; a rejected file never reaches the
/// network and is reported with an error toast.
pub async fn upload_rule<T: HttpTransport>(
    client: &ApiClient<T>,
    upload: RuleUpload,
) -> Result<UploadRuleResponse, ApiError> {
    if let Err(err) = validate_rule_file_name(&upload.file_name) {
        client.toasts().error(err.to_string(), None);
        return Err(err);
    }
    let request = ApiRequest::post("/rules/upload").multipart(upload.into_form());
    client.send(request).await
}

pub async fn list_scenerules<T: HttpTransport>(
    client: &ApiClient<T>,
    params: &ScenerulesListParams,
) -> Result<ScenerulesListResponse, ApiError> {
    client.get(&with_query("/rules/scenerules", params)?).await
}

pub async fn download_scenerule<T: HttpTransport>(
    client: &ApiClient<T>,
    request: &ScenerulesDownloadRequest,
) -> Result<ScenerulesDownloadResponse, ApiError> {
    client
        .send(ApiRequest::post("/rules/scenerules/download").json(request)?)
        .await
}

/// Turns a fetched NFO into preview text. A non-2xx answer gets a fixed
/// message since the body is the host's error page.
pub fn nfo_preview(status: u16, bytes: &[u8]) -> Result<String, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Transport("Failed to load preview content.".to_string()));
    }
    Ok(decode_nfo(bytes))
}

fn preview_failure(detail: String) -> ApiError {
    if detail.trim().is_empty() {
        ApiError::Transport("Failed to load preview".to_string())
    } else {
        ApiError::Transport(detail)
    }
}

/// Loads a published NFO straight from scenerules.org. The file lives
/// outside the API, so no token, toast or debug entry is involved.
pub async fn fetch_scenerule_nfo(url: &str) -> Result<String, ApiError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| preview_failure(e.to_string()))?;
    let status = response.status();
    let bytes = response
        .binary()
        .await
        .map_err(|e| preview_failure(e.to_string()))?;
    nfo_preview(status, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::Harness;
    use crate::shared::http::{FormValue, Method, RequestBody};
    use crate::shared::toast::ToastKind;
    use futures::executor::block_on;
    use serde_json::{json, Value};

    fn rule_json() -> Value {
        json!({
            "id": 3,
            "name": "2024_EBOOK",
            "content": "[ EBOOK RULES ]",
            "scene": "English",
            "section": "EBOOK",
            "year": 2024,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        })
    }

    #[test]
    fn test_upload_sends_multipart_without_blank_fields() {
        let h = Harness::new();
        h.client.tokens().save("tok", "ref");
        h.transport.respond(
            201,
            "Created",
            json!({
                "rule": rule_json(),
                "message": "Rule uploaded",
                "metadata_extracted": {"scene": "English", "section": "EBOOK", "year": 2024}
            }),
        );

        let upload = RuleUpload {
            file_name: "2024_EBOOK.nfo".into(),
            content: "[ EBOOK RULES ]".into(),
            name: "2024_EBOOK".into(),
            scene: "  ".into(),
            ..Default::default()
        };
        let response = block_on(upload_rule(&h.client, upload)).unwrap();
        assert_eq!(response.metadata_extracted.unwrap().year, Some(2024));

        let sent = &h.transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "/api/rules/upload");
        assert_eq!(sent.headers.get("Authorization").map(String::as_str), Some("Bearer tok"));
        let RequestBody::Multipart(form) = &sent.body else {
            panic!("expected multipart body");
        };
        assert!(matches!(
            form.get("file"),
            Some(FormValue::File { file_name, .. }) if file_name == "2024_EBOOK.nfo"
        ));
        assert_eq!(form.get("name"), Some(&FormValue::Text("2024_EBOOK".into())));
        assert!(form.get("scene").is_none());
        assert!(form.get("year").is_none());

        let toasts = h.toasts();
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "Rule uploaded");
    }

    #[test]
    fn test_upload_keeps_non_utf8_bytes() {
        let h = Harness::new();
        h.transport.respond(
            201,
            "Created",
            json!({"rule": rule_json(), "message": "Rule uploaded"}),
        );

        let raw = vec![0xDB, 0xB2, 0xB1, 0xB0, b'\r', b'\n'];
        let upload = RuleUpload {
            file_name: "2024_EBOOK.nfo".into(),
            content: raw.clone(),
            ..Default::default()
        };
        block_on(upload_rule(&h.client, upload)).unwrap();

        let RequestBody::Multipart(form) = &h.transport.requests()[0].body else {
            panic!("expected multipart body");
        };
        assert_eq!(
            form.get("file"),
            Some(&FormValue::File {
                file_name: "2024_EBOOK.nfo".into(),
                content: raw,
            })
        );
    }

    #[test]
    fn test_upload_rejects_extension_without_request() {
        let h = Harness::new();

        let upload = RuleUpload {
            file_name: "rules.pdf".into(),
            content: "%PDF".into(),
            ..Default::default()
        };
        let err = block_on(upload_rule(&h.client, upload)).unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(h.transport.requests().is_empty());
        assert!(h.client.debug().list().is_empty());
        let toasts = h.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_list_rules_query() {
        let h = Harness::new();
        h.transport.respond(
            200,
            "OK",
            json!({
                "rules": [rule_json()],
                "pagination": {"page": 1, "per_page": 20, "total": 1, "pages": 1, "has_next": false, "has_prev": false}
            }),
        );

        let params = RuleListParams {
            page: Some(1),
            section: Some("EBOOK".into()),
            year: Some(2024),
            ..Default::default()
        };
        let response = block_on(list_rules(&h.client, &params)).unwrap();
        assert_eq!(response.rules.len(), 1);
        assert_eq!(
            h.transport.requests()[0].url,
            "/api/rules?page=1&section=EBOOK&year=2024"
        );
    }

    #[test]
    fn test_download_scenerule_posts_entry() {
        let h = Harness::new();
        h.transport.respond(
            200,
            "OK",
            json!({"rule": rule_json(), "message": "Rule downloaded", "was_existing": false}),
        );

        let request = ScenerulesDownloadRequest {
            section: Some("EBOOK".into()),
            year: Some(2024),
            scene: Some("English".into()),
            url: None,
        };
        block_on(download_scenerule(&h.client, &request)).unwrap();

        let sent = &h.transport.requests()[0];
        assert_eq!(sent.url, "/api/rules/scenerules/download");
        assert_eq!(
            sent.body,
            RequestBody::Json(json!({"section": "EBOOK", "year": 2024, "scene": "English"}))
        );
        assert_eq!(h.toasts()[0].message, "Rule downloaded");
    }

    #[test]
    fn test_create_rule() {
        let h = Harness::new();
        h.transport.respond(201, "Created", json!({"rule": rule_json(), "message": "Rule created"}));

        let dto = CreateRuleDto {
            name: "2024_EBOOK".into(),
            content: "[ EBOOK RULES ]".into(),
            ..Default::default()
        };
        let rule = block_on(create_rule(&h.client, &dto)).unwrap();
        assert_eq!(rule.id, 3);
        assert_eq!(
            h.transport.requests()[0].body,
            RequestBody::Json(json!({"name": "2024_EBOOK", "content": "[ EBOOK RULES ]"}))
        );
    }

    #[test]
    fn test_get_and_update_rule() {
        let h = Harness::new();
        h.transport.respond(200, "OK", json!({"rule": rule_json()}));
        h.transport.respond(200, "OK", json!({"rule": rule_json(), "message": "Rule updated"}));

        let rule = block_on(get_rule(&h.client, 3)).unwrap();
        assert_eq!(rule.section.as_deref(), Some("EBOOK"));

        let dto = UpdateRuleDto {
            year: Some(2025),
            ..Default::default()
        };
        block_on(update_rule(&h.client, 3, &dto)).unwrap();

        let requests = h.transport.requests();
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].url, "/api/rules/3");
        assert_eq!(requests[1].body, RequestBody::Json(json!({"year": 2025})));
        let messages: Vec<String> = h.toasts().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["Rule updated"]);
    }

    #[test]
    fn test_delete_rule_not_found() {
        let h = Harness::new();
        h.transport.respond(404, "Not Found", json!({"message": "Rule not found"}));

        let err = block_on(delete_rule(&h.client, 99)).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(h.transport.requests()[0].method, Method::Delete);
        assert_eq!(err.inline_message("delete rule"), "Failed to delete rule: Rule not found");
        assert_eq!(h.toasts().len(), 1);
    }

    #[test]
    fn test_nfo_preview() {
        assert_eq!(
            nfo_preview(200, &[0xC9, 0xCD, 0xBB, b'\n', b'O', b'K']).unwrap(),
            "╔═╗\nOK"
        );
        assert_eq!(
            nfo_preview(404, b"<html>Not Found</html>").unwrap_err().to_string(),
            "Failed to load preview content."
        );
        assert_eq!(
            preview_failure(String::new()).to_string(),
            "Failed to load preview"
        );
    }
}
