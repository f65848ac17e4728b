use serde::{Deserialize, Serialize};

/// Post-processing jobs that can be queued for an existing release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseAction {
    NfoFix,
    ReadNfo,
    Repack,
    DirFix,
}

impl ReleaseAction {
    /// Path segment under `/releases/{id}/actions/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseAction::NfoFix => "nfofix",
            ReleaseAction::ReadNfo => "readnfo",
            ReleaseAction::Repack => "repack",
            ReleaseAction::DirFix => "dirfix",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReleaseAction::NfoFix => "NFOFIX",
            ReleaseAction::ReadNfo => "READNFO",
            ReleaseAction::Repack => "REPACK",
            ReleaseAction::DirFix => "DIRFIX",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReleaseAction::NfoFix => "Fix the NFO file",
            ReleaseAction::ReadNfo => "Re-read the NFO file",
            ReleaseAction::Repack => "Repackage this release",
            ReleaseAction::DirFix => "Fix the release directory name",
        }
    }

    pub fn all() -> [ReleaseAction; 4] {
        [
            ReleaseAction::NfoFix,
            ReleaseAction::ReadNfo,
            ReleaseAction::Repack,
            ReleaseAction::DirFix,
        ]
    }
}

/// `202 Accepted` body of an action endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}
