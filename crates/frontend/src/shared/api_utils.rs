//! Build-time configuration and URL helpers for the API client.

use serde::Serialize;

use crate::shared::http::ApiError;

const DEFAULT_API_BASE: &str = "/api";

/// Base URL every endpoint path is appended to.
///
/// Set `RELEASEPACK_API_BASE_URL` at build time to point at another host,
/// e.g. `RELEASEPACK_API_BASE_URL=http://localhost:5000/api trunk build`.
pub fn api_base() -> String {
    base_from(option_env!("RELEASEPACK_API_BASE_URL"))
}

fn base_from(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Debug mode default: on for debug builds or when `RELEASEPACK_DEBUG=true`.
pub fn debug_default() -> bool {
    cfg!(debug_assertions) || flag_enabled(option_env!("RELEASEPACK_DEBUG"))
}

fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v.eq_ignore_ascii_case("true"))
}

/// Appends `params` as a query string. Unset options are skipped, and no
/// `?` is added when nothing remains.
pub fn with_query<P: Serialize>(path: &str, params: &P) -> Result<String, ApiError> {
    let query = serde_qs::to_string(params).map_err(|e| ApiError::Encode(e.to_string()))?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::release::ReleaseListParams;
    use contracts::shared::pagination::SortOrder;

    #[test]
    fn test_base_from() {
        assert_eq!(base_from(None), "/api");
        assert_eq!(base_from(Some("  ")), "/api");
        assert_eq!(
            base_from(Some("http://localhost:5000/api/")),
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn test_flag_enabled() {
        assert!(flag_enabled(Some("true")));
        assert!(flag_enabled(Some("TRUE")));
        assert!(!flag_enabled(Some("1")));
        assert!(!flag_enabled(None));
    }

    #[test]
    fn test_with_query_skips_unset() {
        let empty = ReleaseListParams::default();
        assert_eq!(with_query("/releases", &empty).unwrap(), "/releases");

        let params = ReleaseListParams {
            page: Some(2),
            release_type: Some("TV".to_string()),
            order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let url = with_query("/releases", &params).unwrap();
        assert!(url.starts_with("/releases?"));
        assert!(url.contains("page=2"));
        assert!(url.contains("release_type=TV"));
        assert!(url.contains("order=desc"));
        assert!(!url.contains("status"));
    }
}
