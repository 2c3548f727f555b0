//! Infrastructure adapters for the Folio ports.
//!
//! - `catalog`: bundled project records
//! - `theme`: in-memory theme preference
//! - `contact`: HTTP delivery of contact messages

pub mod catalog;
pub mod contact;
pub mod theme;

pub use catalog::StaticCatalogSource;
pub use contact::HttpContactTransport;
pub use theme::InMemoryThemeRepository;
