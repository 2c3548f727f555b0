//! Projects view state machine.
//!
//! Defines a pure state transition function for the projects page controls
//! (category buttons, search box, page-size selector, page buttons).
//!
//! 作品页交互控件的纯状态机。

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{filter_projects, total_pages, Catalog, CategoryFilter, FilterState, PageSize, PageState};

/// Interactive state of the projects page.
///
/// 作品页交互状态。初始值为 `(all, "", 1, 6)`。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectsViewState {
    pub filter: FilterState,
    pub page: PageState,
}

impl ProjectsViewState {
    /// Page count for the current filter against `catalog`.
    pub fn total_pages(&self, catalog: &Catalog) -> usize {
        total_pages(
            filter_projects(catalog, &self.filter).len(),
            self.page.page_size,
        )
    }
}

/// User actions on the projects page.
///
/// 作品页用户操作。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectsViewEvent {
    /// Category button clicked.
    ///
    /// 点击分类按钮。
    SelectCategory(CategoryFilter),
    /// Search box content changed.
    ///
    /// 搜索框内容变化。
    ChangeSearchTerm(String),
    /// Page-size selector changed. Values outside 3/6/9/12 are ignored.
    ///
    /// 每页数量变化。
    ChangePageSize(usize),
    /// Page number clicked.
    ///
    /// 点击页码。
    GoToPage(usize),
    PreviousPage,
    NextPage,
    /// "Reset Filters" on the empty state.
    ///
    /// 重置筛选。
    ResetFilters,
}

/// Pure projects view state machine.
///
/// 纯状态机：不包含副作用。
pub struct ProjectsViewStateMachine;

impl ProjectsViewStateMachine {
    /// Apply `event` to `state`.
    ///
    /// Filter and page-size changes always land on page 1. Page moves outside
    /// `[1, total_pages]` leave the state untouched, which is also how the
    /// previous/next buttons behave at the boundaries.
    pub fn transition(
        state: ProjectsViewState,
        event: ProjectsViewEvent,
        catalog: &Catalog,
    ) -> ProjectsViewState {
        match event {
            ProjectsViewEvent::SelectCategory(category) => ProjectsViewState {
                filter: FilterState {
                    category,
                    ..state.filter
                },
                page: state.page.first_page(),
            },
            ProjectsViewEvent::ChangeSearchTerm(search_term) => ProjectsViewState {
                filter: FilterState {
                    search_term,
                    ..state.filter
                },
                page: state.page.first_page(),
            },
            ProjectsViewEvent::ChangePageSize(size) => match PageSize::try_from(size) {
                Ok(page_size) => ProjectsViewState {
                    page: PageState {
                        current_page: 1,
                        page_size,
                    },
                    ..state
                },
                Err(err) => {
                    debug!(%err, "ignoring page size change");
                    state
                }
            },
            ProjectsViewEvent::GoToPage(page) => Self::go_to(state, Some(page), catalog),
            ProjectsViewEvent::PreviousPage => {
                let target = state.page.current_page.checked_sub(1);
                Self::go_to(state, target, catalog)
            }
            ProjectsViewEvent::NextPage => {
                let target = state.page.current_page.checked_add(1);
                Self::go_to(state, target, catalog)
            }
            ProjectsViewEvent::ResetFilters => ProjectsViewState {
                filter: FilterState::default(),
                page: state.page.first_page(),
            },
        }
    }

    fn go_to(state: ProjectsViewState, target: Option<usize>, catalog: &Catalog) -> ProjectsViewState {
        let total = state.total_pages(catalog);
        match target {
            Some(page) if (1..=total).contains(&page) => ProjectsViewState {
                page: PageState {
                    current_page: page,
                    ..state.page
                },
                ..state
            },
            _ => {
                debug!(?target, total, "ignoring out-of-range page move");
                state
            }
        }
    }
}
