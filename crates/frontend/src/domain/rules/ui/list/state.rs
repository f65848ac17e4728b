use contracts::domain::rule::{Rule, RuleListParams};
use contracts::shared::pagination::Pagination;
use leptos::prelude::*;

use crate::domain::rules::validation::parse_year;
use crate::shared::http::ApiError;

#[derive(Clone, Debug, Default)]
pub struct RuleListState {
    pub items: Vec<Rule>,
    pub pagination: Pagination,
    pub search: String,
    pub scene: String,
    pub section: String,
    pub year: String,
}

impl RuleListState {
    /// Fails only when the year filter is not a number.
    pub fn params(&self) -> Result<RuleListParams, ApiError> {
        let non_blank = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Ok(RuleListParams {
            page: Some(self.pagination.page),
            per_page: Some(self.pagination.per_page),
            scene: non_blank(&self.scene),
            section: non_blank(&self.section),
            year: parse_year(&self.year)?,
            search: non_blank(&self.search),
        })
    }

    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.scene.clear();
        self.section.clear();
        self.year.clear();
        self.pagination.page = 1;
    }
}

pub fn create_state() -> RwSignal<RuleListState> {
    RwSignal::new(RuleListState::default())
}
