//! Projects page use cases.

mod browse_projects;
mod catalog_overview;
mod load_catalog;

pub use browse_projects::{CardLink, CardLinkKind, ProjectCard, ProjectsView, ProjectsViewController};
pub use catalog_overview::{CatalogOverview, CategoryCount, GetCatalogOverview};
pub use load_catalog::LoadCatalog;
