//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core stays independent of where
//! the catalog comes from, where the theme is kept and how contact messages
//! travel.

pub mod catalog;
pub mod contact;
pub mod errors;
pub mod theme;

pub use catalog::CatalogSourcePort;
pub use contact::ContactTransportPort;
pub use errors::ContactTransportError;
pub use theme::ThemePreferencePort;
