pub mod aggregate;
pub mod request;
pub mod scenerules;

pub use aggregate::Rule;
pub use request::{
    CreateRuleDto, ExtractedMetadata, RuleListParams, RuleListResponse, RuleResponse, UpdateRuleDto,
    UploadRuleResponse,
};
pub use scenerules::{
    ScenerulesDownloadRequest, ScenerulesDownloadResponse, ScenerulesEntry,
    ScenerulesListParams, ScenerulesListResponse,
};
