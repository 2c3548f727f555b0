use async_trait::async_trait;

use crate::theme::Theme;

/// Theme preference storage.
///
/// 主题偏好存储。
#[async_trait]
pub trait ThemePreferencePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Theme>;
    async fn save(&self, theme: Theme) -> anyhow::Result<()>;
}
