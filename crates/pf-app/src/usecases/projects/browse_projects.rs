//! View controller of the projects page
//! 作品页视图控制器
//!
//! Owns the interactive state (category, search text, page, page size) and
//! recomputes filter → paginate on every call to [`ProjectsViewController::view`].
//! Nothing is cached between inputs, so identical state always renders the
//! same page.

use std::sync::Arc;

use pf_core::catalog::{
    filter_projects, page_window, paginate, Catalog, CategoryFilter, PageSize, PageState,
    PageWindow, ProjectRecord, ProjectsViewEvent, ProjectsViewState, ProjectsViewStateMachine,
    ResultRange,
};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardLinkKind {
    LiveDemo,
    Code,
}

impl CardLinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            CardLinkKind::LiveDemo => "Live Demo",
            CardLinkKind::Code => "Code",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub kind: CardLinkKind,
    pub url: String,
}

/// DTO for one project card (returned to the presentation layer)
/// 作品卡片 DTO（返回给展示层）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub kind: String,
    pub description: String,
    /// Badges in catalog order
    pub tech: Vec<String>,
    pub icon: Option<String>,
    pub featured: bool,
    /// Live demo first, then code; absent URLs are omitted
    pub links: Vec<CardLink>,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(record: &ProjectRecord) -> Self {
        let links = [
            (CardLinkKind::LiveDemo, record.live.as_ref()),
            (CardLinkKind::Code, record.github.as_ref()),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.map(|url| CardLink { kind, url: url.clone() }))
        .collect();

        Self {
            title: record.title.clone(),
            kind: record.kind.clone(),
            description: record.description.clone(),
            tech: record.tech.clone(),
            icon: record.icon.clone(),
            featured: record.featured,
            links,
        }
    }
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsView {
    pub cards: Vec<ProjectCard>,
    pub category: CategoryFilter,
    /// Echo of the search term, `None` when the box is empty
    pub search_term: Option<String>,
    pub current_page: usize,
    pub page_size: PageSize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub range: ResultRange,
    pub window: PageWindow,
    /// Pagination controls are shown only when the results span several pages
    pub show_pagination: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

impl ProjectsView {
    /// "No projects found" state.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Controller for the projects page.
///
/// ## Behavior / 行为
/// - Category, search and page-size changes go back to page 1
/// - Page moves outside `[1, total_pages]` are ignored
/// - Lives as long as the page view; a new one is created on each visit
pub struct ProjectsViewController {
    catalog: Arc<Catalog>,
    state: ProjectsViewState,
}

impl ProjectsViewController {
    /// Controller in the initial state `(all, "", page 1, 6 per page)`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_page_size(catalog, PageSize::default())
    }

    pub fn with_page_size(catalog: Arc<Catalog>, page_size: PageSize) -> Self {
        Self {
            catalog,
            state: ProjectsViewState {
                page: PageState {
                    current_page: 1,
                    page_size,
                },
                ..ProjectsViewState::default()
            },
        }
    }

    pub fn state(&self) -> &ProjectsViewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply one user action and return the fresh view.
    pub fn dispatch(&mut self, event: ProjectsViewEvent) -> ProjectsView {
        let previous = std::mem::take(&mut self.state);
        debug!(?event, "projects view event");
        self.state = ProjectsViewStateMachine::transition(previous, event, &self.catalog);
        debug!(
            category = %self.state.filter.category,
            search_term = %self.state.filter.search_term,
            page = self.state.page.current_page,
            page_size = self.state.page.page_size.get(),
            "projects view state updated"
        );
        self.view()
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> ProjectsView {
        self.dispatch(ProjectsViewEvent::SelectCategory(category))
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> ProjectsView {
        self.dispatch(ProjectsViewEvent::ChangeSearchTerm(term.into()))
    }

    /// Sizes other than 3, 6, 9 and 12 are ignored.
    pub fn set_page_size(&mut self, size: usize) -> ProjectsView {
        self.dispatch(ProjectsViewEvent::ChangePageSize(size))
    }

    pub fn go_to_page(&mut self, page: usize) -> ProjectsView {
        self.dispatch(ProjectsViewEvent::GoToPage(page))
    }

    pub fn next_page(&mut self) -> ProjectsView {
        self.dispatch(ProjectsViewEvent::NextPage)
    }

    pub fn previous_page(&mut self) -> ProjectsView {
        self.dispatch(ProjectsViewEvent::PreviousPage)
    }

    pub fn reset_filters(&mut self) -> ProjectsView {
        self.dispatch(ProjectsViewEvent::ResetFilters)
    }

    /// Recompute filter → paginate for the current state.
    pub fn view(&self) -> ProjectsView {
        let filter = &self.state.filter;
        let PageState {
            current_page,
            page_size,
        } = self.state.page;

        let filtered = filter_projects(&self.catalog, filter);
        let page = paginate(&filtered, current_page, page_size);
        let cards: Vec<ProjectCard> = page.items.iter().map(|record| ProjectCard::from(*record)).collect();

        ProjectsView {
            cards,
            category: filter.category,
            search_term: (!filter.search_term.is_empty()).then(|| filter.search_term.clone()),
            current_page,
            page_size,
            total_pages: page.total_pages,
            filtered_count: filtered.len(),
            total_count: self.catalog.len(),
            range: ResultRange::compute(filtered.len(), current_page, page_size),
            window: page_window(current_page, page.total_pages),
            show_pagination: filtered.len() > page_size.get(),
            has_previous: current_page > 1,
            has_next: current_page < page.total_pages,
        }
    }
}
