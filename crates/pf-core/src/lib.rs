//! # pf-core
//!
//! Core domain models and business logic for the Folio portfolio site.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod contact;
pub mod navigation;
pub mod ports;
pub mod site;
pub mod theme;

// Re-export commonly used types at the crate root
pub use catalog::{
    Catalog, CatalogError, Category, CategoryFilter, FilterState, PageSize, PageState,
    ProjectRecord, ProjectsViewEvent, ProjectsViewState, ProjectsViewStateMachine,
};
pub use config::AppConfig;
pub use contact::{ContactForm, ContactFormErrors, ContactMessage, ContactReceipt};
pub use navigation::{Navigator, Route};
pub use site::SiteMetadata;
pub use theme::Theme;
