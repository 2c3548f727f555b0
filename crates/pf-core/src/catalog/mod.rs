//! Project catalog domain.
//!
//! The catalog is an ordered, immutable list of project records built once at
//! startup. Everything shown on the projects page (filtered list, pages, page
//! window, result label) is derived from it on demand and never cached.
//!
//! 作品目录在启动时构建一次，之后不可变；所有视图数据按需重新计算。

mod filter;
mod pagination;
mod record;
mod stats;
mod view_state;

pub use filter::{filter_projects, FilterState};
pub use pagination::{
    page_window, paginate, total_pages, InvalidPageSize, Page, PageSize, PageSlot, PageState,
    PageWindow, ResultRange, MAX_VISIBLE_PAGES,
};
pub use record::{Category, CategoryFilter, ProjectRecord, UnknownCategory};
pub use stats::CatalogStats;
pub use view_state::{ProjectsViewEvent, ProjectsViewState, ProjectsViewStateMachine};

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("project at index {index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("duplicate project title: {title}")]
    DuplicateTitle { title: String },
}

/// Immutable, ordered project catalog.
///
/// 不可变的有序作品目录。
///
/// Titles are non-empty and unique. There is no mutating API after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build the catalog from records in display order.
    ///
    /// # Errors / 错误
    /// - `EmptyTitle` if a title is empty or whitespace only
    /// - `DuplicateTitle` if two records share a title
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if !seen.insert(record.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: record.title.clone(),
                });
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records a category button would show, before any search.
    pub fn count_for(&self, filter: CategoryFilter) -> usize {
        self.records
            .iter()
            .filter(|record| filter.matches(record.category))
            .count()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_records(&self.records)
    }
}
