use serde::{Deserialize, Serialize};

/// A Scene packaging rule stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: i64,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub scene: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}
