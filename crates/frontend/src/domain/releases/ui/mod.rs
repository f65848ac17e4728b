pub mod details;
pub mod edit;
pub mod list;

use crate::shared::http::ApiError;

/// Parses the `:id` route segment.
pub fn parse_release_id(raw: Option<String>) -> Result<i64, ApiError> {
    raw.as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation("Missing or invalid release id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_id() {
        assert_eq!(parse_release_id(Some("12".into())), Ok(12));
        assert!(parse_release_id(None).is_err());
        assert!(parse_release_id(Some("abc".into())).is_err());
        assert!(parse_release_id(Some("0".into())).is_err());
    }
}
