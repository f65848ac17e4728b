use serde::{Deserialize, Serialize};

use super::Rule;

/// A rule published on scenerules.org, as listed by `/rules/scenerules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenerulesEntry {
    pub name: String,
    pub section: String,
    pub year: i32,
    pub scene: String,
    pub url_nfo: String,
    pub url_html: String,
    #[serde(default)]
    pub is_downloaded: bool,
    #[serde(default)]
    pub local_rule_id: Option<i64>,
}

impl ScenerulesEntry {
    /// Identifies an entry while its download is in flight.
    pub fn download_key(&self) -> String {
        format!("{}-{}", self.section, self.year)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenerulesListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenerulesListResponse {
    pub rules: Vec<ScenerulesEntry>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenerulesDownloadRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&ScenerulesEntry> for ScenerulesDownloadRequest {
    fn from(entry: &ScenerulesEntry) -> Self {
        Self {
            section: Some(entry.section.clone()),
            year: Some(entry.year),
            scene: Some(entry.scene.clone()),
            url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenerulesDownloadResponse {
    pub rule: Rule,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub was_existing: bool,
}
