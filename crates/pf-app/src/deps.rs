//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for the use cases.
//! 用例的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;

use pf_core::ports::{CatalogSourcePort, ContactTransportPort, ThemePreferencePort};

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// `contact` is `None` when no endpoint is configured; the contact form then
/// reports itself as unavailable.
pub struct AppDeps {
    // Catalog / 作品目录
    pub catalog_source: Arc<dyn CatalogSourcePort>,

    // Preferences / 偏好
    pub theme: Arc<dyn ThemePreferencePort>,

    // Contact / 联系
    pub contact: Option<Arc<dyn ContactTransportPort>>,
}
