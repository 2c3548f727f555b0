//! Business logic use cases
//!
//! [CatalogSourcePort]
//         ↓
// LoadCatalog                  → Arc<Catalog>, once at startup
// ---------------------------------
//         ↓
// ProjectsViewController       → projects page (filter → paginate → cards)
// GetCatalogOverview           → stats + category button counts
// ---------------------------------
// GetTheme / ToggleTheme       → navigation bar
// SubmitContactMessage         → contact page

pub mod contact;
pub mod projects;
pub mod theme;

pub use contact::{SubmitContactError, SubmitContactMessage};
pub use projects::{
    CardLink, CardLinkKind, CatalogOverview, CategoryCount, GetCatalogOverview, LoadCatalog,
    ProjectCard, ProjectsView, ProjectsViewController,
};
pub use theme::{GetTheme, ToggleTheme};
