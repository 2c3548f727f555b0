//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations / 创建 infra 层具体实现
//! - ✅ Group them into [`AppDeps`] / 打包为 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//! - Values arrive already interpreted by `ShellDefaults`
//!
//! > **This is the only place allowed to depend on pf-infra and pf-app together.**
//! > **这是唯一允许同时依赖 pf-infra 和 pf-app 的地方。**

use std::sync::Arc;

use pf_app::AppDeps;
use pf_core::ports::{CatalogSourcePort, ContactTransportPort, ThemePreferencePort};
use pf_infra::{HttpContactTransport, InMemoryThemeRepository, StaticCatalogSource};

use crate::shell::defaults::ShellDefaults;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Contact transport initialization failed: {0}")]
    ContactInit(String),
}

/// Build the adapters behind every port.
///
/// The contact transport is only created when an endpoint is configured.
pub fn wire_dependencies(defaults: &ShellDefaults) -> WiringResult<AppDeps> {
    let catalog_source: Arc<dyn CatalogSourcePort> = Arc::new(StaticCatalogSource::bundled());
    let theme: Arc<dyn ThemePreferencePort> = Arc::new(InMemoryThemeRepository::new(defaults.theme));

    let contact = match &defaults.contact_endpoint {
        Some(endpoint) => {
            let transport = HttpContactTransport::new(endpoint.clone(), defaults.contact_timeout)
                .map_err(|e| WiringError::ContactInit(e.to_string()))?;
            Some(Arc::new(transport) as Arc<dyn ContactTransportPort>)
        }
        None => None,
    };

    Ok(AppDeps {
        catalog_source,
        theme,
        contact,
    })
}
