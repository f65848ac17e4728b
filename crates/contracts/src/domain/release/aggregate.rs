use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Release types the packaging backend accepts.
pub const RELEASE_TYPES: [&str; 5] = ["EBOOK", "TV", "DOCS", "AUDIOBOOK", "GAME"];

/// Release statuses with their display labels.
pub const RELEASE_STATUSES: [(&str, &str); 4] = [
    ("draft", "Draft"),
    ("completed", "Completed"),
    ("processing", "Processing"),
    ("failed", "Failed"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub group_id: Option<i64>,
    pub release_type: String,
    pub status: String,
    #[serde(default)]
    pub release_metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub config: Option<Map<String, Value>>,
    #[serde(default)]
    pub file_path: Option<String>,
    pub created_at: String,
}

impl Release {
    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.release_metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Title from metadata, falling back to `Release #<id>`.
    pub fn title(&self) -> String {
        self.metadata_str("title")
            .map(str::to_string)
            .unwrap_or_else(|| format!("Release #{}", self.id))
    }

    pub fn author(&self) -> Option<&str> {
        self.metadata_str("author")
    }

    /// Display label for the status, or the raw value for unknown statuses.
    pub fn status_label(&self) -> &str {
        RELEASE_STATUSES
            .iter()
            .find(|(value, _)| *value == self.status)
            .map(|(_, label)| *label)
            .unwrap_or(self.status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(metadata: Value) -> Release {
        serde_json::from_value(serde_json::json!({
            "id": 12,
            "user_id": 1,
            "release_type": "EBOOK",
            "status": "draft",
            "release_metadata": metadata,
            "created_at": "2024-03-15T14:02:26Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_title_from_metadata() {
        let release = sample(serde_json::json!({"title": "Dune", "author": "Herbert"}));
        assert_eq!(release.title(), "Dune");
        assert_eq!(release.author(), Some("Herbert"));
    }

    #[test]
    fn test_title_fallback() {
        let release = sample(serde_json::json!({"title": ""}));
        assert_eq!(release.title(), "Release #12");
        assert_eq!(release.author(), None);
    }

    #[test]
    fn test_status_label() {
        let mut release = sample(Value::Null);
        assert_eq!(release.status_label(), "Draft");
        release.status = "archived".to_string();
        assert_eq!(release.status_label(), "archived");
    }
}
