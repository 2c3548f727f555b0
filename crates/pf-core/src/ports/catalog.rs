use crate::catalog::ProjectRecord;

/// Supplies the project records at startup.
///
/// 启动时提供作品记录。
pub trait CatalogSourcePort: Send + Sync {
    /// Records in display order.
    fn load_records(&self) -> anyhow::Result<Vec<ProjectRecord>>;
}
