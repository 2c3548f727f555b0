//! Folio Application Orchestration Layer
//!
//! This crate contains the use cases behind the site pages: browsing the
//! project catalog, switching theme and sending the contact form.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{
    GetCatalogOverview, GetTheme, LoadCatalog, ProjectsView, ProjectsViewController,
    SubmitContactMessage, ToggleTheme,
};
