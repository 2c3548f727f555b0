use std::collections::HashSet;

use serde::Serialize;

use super::{Category, ProjectRecord};

/// Headline numbers of the projects page.
///
/// 作品页顶部统计数据。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub featured: usize,
    pub fullstack: usize,
    pub frontend: usize,
    pub backend: usize,
    /// Distinct tech tags, compared as exact strings
    pub distinct_technologies: usize,
}

impl CatalogStats {
    pub(crate) fn from_records(records: &[ProjectRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        let mut technologies: HashSet<&str> = HashSet::new();

        for record in records {
            if record.featured {
                stats.featured += 1;
            }
            match record.category {
                Category::Fullstack => stats.fullstack += 1,
                Category::Frontend => stats.frontend += 1,
                Category::Backend => stats.backend += 1,
            }
            technologies.extend(record.tech.iter().map(String::as_str));
        }

        stats.distinct_technologies = technologies.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::fixtures::{record, ten_record_catalog};
    use crate::catalog::{Catalog, Category};

    #[test]
    fn stats_count_categories_and_distinct_tech() {
        let stats = ten_record_catalog().stats();

        assert_eq!(stats.total, 10);
        assert_eq!(stats.fullstack, 4);
        assert_eq!(stats.frontend, 3);
        assert_eq!(stats.backend, 3);
        assert_eq!(stats.featured, 0);
        // "Laravel" appears twice
        assert_eq!(stats.distinct_technologies, 14);
    }

    #[test]
    fn stats_count_featured_records() {
        let mut featured = record("Featured", Category::Backend, &["Go", "go"]);
        featured.featured = true;
        let catalog = Catalog::new(vec![featured, record("Plain", Category::Backend, &[])]).unwrap();

        let stats = catalog.stats();

        assert_eq!(stats.featured, 1);
        assert_eq!(stats.distinct_technologies, 2);
    }
}
