use anyhow::{Context, Result};
use pf_core::catalog::ProjectRecord;
use pf_core::ports::CatalogSourcePort;
use tracing::debug;

const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");

/// Catalog source backed by a JSON document.
///
/// The records are parsed on every `load_records` call; the app loads once
/// at startup and shares the resulting `Catalog`.
pub struct StaticCatalogSource {
    json: String,
}

impl StaticCatalogSource {
    /// The ten projects shipped with the binary.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_PROJECTS)
    }

    /// A JSON array of records, in display order.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogSourcePort for StaticCatalogSource {
    fn load_records(&self) -> Result<Vec<ProjectRecord>> {
        let records: Vec<ProjectRecord> =
            serde_json::from_str(&self.json).context("parse project records failed")?;
        debug!(count = records.len(), "Project records parsed");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::catalog::{Catalog, Category, CategoryFilter};

    #[test]
    fn bundled_records_form_a_valid_catalog() {
        let records = StaticCatalogSource::bundled().load_records().unwrap();

        let catalog = Catalog::new(records).unwrap();

        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.records()[0].title, "Enterprise Training Center");
        assert_eq!(catalog.records()[9].title, "Healthcare Management System");
    }

    #[test]
    fn bundled_stats_match_catalog_content() {
        let catalog = Catalog::new(StaticCatalogSource::bundled().load_records().unwrap()).unwrap();

        let stats = catalog.stats();

        assert_eq!(stats.total, 10);
        assert_eq!(stats.featured, 4);
        assert_eq!(stats.fullstack, 7);
        assert_eq!(catalog.count_for(CategoryFilter::Frontend), 2);
        assert_eq!(catalog.count_for(CategoryFilter::Backend), 1);
    }

    #[test]
    fn featured_records_lead_the_list() {
        let records = StaticCatalogSource::bundled().load_records().unwrap();

        let featured: Vec<bool> = records.iter().map(|r| r.featured).collect();

        assert_eq!(&featured[..4], &[true; 4]);
        assert!(featured[4..].iter().all(|f| !f));
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let source = StaticCatalogSource::from_json(
            r#"[{"title": "Bare", "type": "API", "description": "d", "tech": ["Go"], "category": "backend"}]"#,
        );

        let records = source.load_records().unwrap();

        assert_eq!(records[0].category, Category::Backend);
        assert_eq!(records[0].live, None);
        assert!(!records[0].featured);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let source = StaticCatalogSource::from_json("[{");

        let err = source.load_records().unwrap_err();

        assert!(err.to_string().contains("parse project records failed"));
    }
}
