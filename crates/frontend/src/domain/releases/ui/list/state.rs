use contracts::domain::release::{Release, ReleaseListParams};
use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ReleaseListState {
    pub items: Vec<Release>,
    pub pagination: Pagination,
    pub search: String,
    pub release_type: String,
    pub status: String,
    pub is_loaded: bool,
}

impl ReleaseListState {
    /// Query for the current page and filters; blank filters are left out.
    pub fn params(&self) -> ReleaseListParams {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        ReleaseListParams {
            page: Some(self.pagination.page),
            per_page: Some(self.pagination.per_page),
            release_type: non_blank(&self.release_type),
            status: non_blank(&self.status),
            search: non_blank(&self.search),
            ..Default::default()
        }
    }

    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.release_type.clear();
        self.status.clear();
        self.pagination.page = 1;
    }
}

pub fn create_state() -> RwSignal<ReleaseListState> {
    RwSignal::new(ReleaseListState::default())
}
