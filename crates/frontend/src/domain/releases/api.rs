use contracts::domain::release::{
    ActionResponse, Release, ReleaseAction, ReleaseListParams, ReleaseListResponse,
    ReleaseResponse, UpdateReleaseDto,
};
use contracts::shared::message::MessageResponse;

use crate::shared::api_utils::with_query;
use crate::shared::http::{ApiClient, ApiError, ApiRequest, HttpTransport};

pub async fn list_releases<T: HttpTransport>(
    client: &ApiClient<T>,
    params: &ReleaseListParams,
) -> Result<ReleaseListResponse, ApiError> {
    client.get(&with_query("/releases", params)?).await
}

pub async fn get_release<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
) -> Result<Release, ApiError> {
    let response: ReleaseResponse = client.get(&format!("/releases/{}", id)).await?;
    Ok(response.release)
}

pub async fn update_release<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
    dto: &UpdateReleaseDto,
) -> Result<Release, ApiError> {
    let request = ApiRequest::put(format!("/releases/{}", id)).json(dto)?;
    let response: ReleaseResponse = client.send(request).await?;
    Ok(response.release)
}

pub async fn delete_release<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
) -> Result<MessageResponse, ApiError> {
    client
        .send(ApiRequest::delete(format!("/releases/{}", id)))
        .await
}

/// Queues a post-processing job; the server answers 202 with the job id.
pub async fn run_action<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
    action: ReleaseAction,
) -> Result<ActionResponse, ApiError> {
    let request = ApiRequest::post(format!("/releases/{}/actions/{}", id, action.as_str()))
        .json(&serde_json::json!({}))?;
    client.send(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::Harness;
    use crate::shared::http::{Method, RequestBody};
    use crate::shared::toast::ToastKind;
    use futures::executor::block_on;
    use serde_json::json;

    fn release_json(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": 1,
            "release_type": "EBOOK",
            "status": "draft",
            "release_metadata": {"title": "Dune", "author": "Frank Herbert"},
            "created_at": "2024-03-15T14:02:26"
        })
    }

    #[test]
    fn test_list_builds_query() {
        let h = Harness::new();
        h.transport.respond(
            200,
            "OK",
            json!({
                "releases": [release_json(1)],
                "pagination": {"page": 1, "per_page": 20, "total": 1, "pages": 1}
            }),
        );

        let params = ReleaseListParams {
            page: Some(1),
            status: Some("draft".to_string()),
            ..Default::default()
        };
        let response = block_on(list_releases(&h.client, &params)).unwrap();

        assert_eq!(response.releases.len(), 1);
        assert_eq!(response.releases[0].title(), "Dune");
        let url = &h.transport.requests()[0].url;
        assert!(url.starts_with("/api/releases?"));
        assert!(url.contains("status=draft"));
    }

    #[test]
    fn test_nfofix_success_toast_carries_server_message() {
        let h = Harness::new();
        h.client.tokens().save("tok", "");
        h.transport.respond(
            202,
            "Accepted",
            json!({"job_id": 42, "message": "NFOFIX job created for release 7"}),
        );

        let response = block_on(run_action(&h.client, 7, ReleaseAction::NfoFix)).unwrap();

        assert_eq!(response.job_id, Some(42));
        let sent = &h.transport.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "/api/releases/7/actions/nfofix");
        assert_eq!(sent.body, RequestBody::Json(json!({})));

        let toasts = h.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "NFOFIX job created for release 7");
    }

    #[test]
    fn test_failed_action_reports_server_message() {
        let h = Harness::new();
        h.transport.respond(
            409,
            "Conflict",
            json!({"message": "Release has no files to repack"}),
        );

        let err = block_on(run_action(&h.client, 7, ReleaseAction::Repack)).unwrap_err();

        assert_eq!(
            err.inline_message(&format!("run {}", ReleaseAction::Repack.label())),
            "Failed to run REPACK: Release has no files to repack"
        );
        let toasts = h.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Release has no files to repack");
    }

    #[test]
    fn test_update_sends_only_present_fields() {
        let h = Harness::new();
        h.transport
            .respond(200, "OK", json!({"release": release_json(3), "message": "Release updated"}));

        let dto = UpdateReleaseDto {
            status: Some("completed".to_string()),
            ..Default::default()
        };
        block_on(update_release(&h.client, 3, &dto)).unwrap();

        let sent = &h.transport.requests()[0];
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.body, RequestBody::Json(json!({"status": "completed"})));
    }

    #[test]
    fn test_delete_missing_release() {
        let h = Harness::new();
        h.transport
            .respond(404, "Not Found", json!({"message": "Release not found"}));

        let err = block_on(delete_release(&h.client, 99)).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(h.toasts()[0].kind, ToastKind::Error);
        assert_eq!(
            err.inline_message("delete release"),
            "Failed to delete release: Release not found"
        );
    }
}
