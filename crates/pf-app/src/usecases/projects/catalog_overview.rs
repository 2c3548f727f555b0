//! Use case for the projects page header (stats and category buttons)
//! 作品页头部：统计与分类按钮

use std::sync::Arc;

use pf_core::catalog::{Catalog, CatalogStats, CategoryFilter};
use serde::Serialize;

/// One category button with its badge count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOverview {
    pub stats: CatalogStats,
    /// Buttons in display order, `All` first
    pub categories: Vec<CategoryCount>,
}

/// Counts are taken over the whole catalog, independent of the active filter.
pub struct GetCatalogOverview {
    catalog: Arc<Catalog>,
}

impl GetCatalogOverview {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self) -> CatalogOverview {
        let categories = CategoryFilter::ALL
            .into_iter()
            .map(|filter| CategoryCount {
                filter,
                label: filter.label(),
                count: self.catalog.count_for(filter),
            })
            .collect();

        CatalogOverview {
            stats: self.catalog.stats(),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::catalog::{Category, ProjectRecord};

    fn record(title: &str, category: Category, featured: bool) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            kind: "Web Application".to_string(),
            description: String::new(),
            tech: vec!["React".to_string()],
            live: None,
            github: None,
            icon: None,
            category,
            featured,
        }
    }

    #[test]
    fn counts_every_category() {
        let catalog = Catalog::new(vec![
            record("A", Category::Fullstack, true),
            record("B", Category::Fullstack, false),
            record("C", Category::Backend, false),
        ])
        .unwrap();

        let overview = GetCatalogOverview::new(Arc::new(catalog)).execute();

        let counts: Vec<(&str, usize)> = overview
            .categories
            .iter()
            .map(|c| (c.label, c.count))
            .collect();
        assert_eq!(
            counts,
            vec![("All Projects", 3), ("Full Stack", 2), ("Frontend", 0), ("Backend", 1)]
        );
        assert_eq!(overview.stats.featured, 1);
        assert_eq!(overview.stats.distinct_technologies, 1);
    }
}
