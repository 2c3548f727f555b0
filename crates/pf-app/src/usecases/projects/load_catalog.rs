//! Use case for loading the project catalog
//! 加载作品目录的用例

use std::sync::Arc;

use anyhow::{Context, Result};
use pf_core::catalog::Catalog;
use pf_core::ports::CatalogSourcePort;
use tracing::{info, info_span};

/// Use case for building the immutable catalog at startup.
///
/// ## Behavior / 行为
/// - Reads records from the catalog source
/// - Rejects blank or duplicate titles
pub struct LoadCatalog {
    source: Arc<dyn CatalogSourcePort>,
}

impl LoadCatalog {
    pub fn new(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self { source }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(Catalog)` with records in source order
    /// - `Err(e)` if the source fails or a record is invalid
    pub fn execute(&self) -> Result<Catalog> {
        let span = info_span!("usecase.load_catalog.execute");
        let _enter = span.enter();

        let records = self
            .source
            .load_records()
            .context("failed to read project records")?;
        let catalog = Catalog::new(records).context("project records are invalid")?;

        info!(total = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }
}
