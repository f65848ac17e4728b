use serde::{Deserialize, Serialize};

/// Bodies that carry nothing but an optional human-readable message
/// (delete, logout).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
