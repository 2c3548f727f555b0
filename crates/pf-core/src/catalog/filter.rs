use serde::{Deserialize, Serialize};

use super::{Catalog, CategoryFilter, ProjectRecord};

/// Category selector plus free-text query.
///
/// 分类 + 搜索词。默认值为 `(all, "")`。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search_term: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, search_term: impl Into<String>) -> Self {
        Self {
            category,
            search_term: search_term.into(),
        }
    }

    /// Category test AND text test.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.category.matches(record.category)
            && matches_search(record, &self.search_term.to_lowercase())
    }
}

/// Keep the records of `catalog` that pass `state`, in catalog order.
///
/// The text test is a case-insensitive substring match against the title, the
/// description or any tech tag. Matching is deliberately loose: `"vue"` also
/// hits `"Vuex"`.
pub fn filter_projects<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a ProjectRecord> {
    let needle = state.search_term.to_lowercase();

    catalog
        .records()
        .iter()
        .filter(|record| state.category.matches(record.category) && matches_search(record, &needle))
        .collect()
}

fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .tech
            .iter()
            .any(|tech| tech.to_lowercase().contains(needle))
}
