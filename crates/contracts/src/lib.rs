//! Wire types shared between the admin UI and the release-packaging API.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
