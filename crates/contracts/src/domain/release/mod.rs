pub mod actions;
pub mod aggregate;
pub mod request;

pub use actions::{ActionResponse, ReleaseAction};
pub use aggregate::{Release, RELEASE_STATUSES, RELEASE_TYPES};
pub use request::{ReleaseListParams, ReleaseListResponse, ReleaseResponse, UpdateReleaseDto};
