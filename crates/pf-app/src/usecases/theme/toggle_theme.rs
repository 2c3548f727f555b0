//! Use case for the theme toggle button
//! 切换主题的用例

use std::sync::Arc;

use anyhow::Result;
use pf_core::ports::ThemePreferencePort;
use pf_core::Theme;
use tracing::{info, info_span, Instrument};

/// Flip between light and dark.
///
/// ## Behavior / 行为
/// - Loads the current theme
/// - Saves the opposite one
/// - Returns the theme now in effect
pub struct ToggleTheme {
    theme: Arc<dyn ThemePreferencePort>,
}

impl ToggleTheme {
    pub fn new(theme: Arc<dyn ThemePreferencePort>) -> Self {
        Self { theme }
    }

    pub async fn execute(&self) -> Result<Theme> {
        let span = info_span!("usecase.toggle_theme.execute");

        async {
            let old = self.theme.load().await?;
            let new = old.toggled();

            self.theme.save(new).await?;

            info!(old = %old, new = %new, "Theme switched");
            Ok(new)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::theme::test_support::MockThemeStore;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn dark_becomes_light() {
        let mut store = MockThemeStore::new();
        store.expect_load().times(1).returning(|| Ok(Theme::Dark));
        store
            .expect_save()
            .with(eq(Theme::Light))
            .times(1)
            .returning(|_| Ok(()));

        let theme = ToggleTheme::new(Arc::new(store)).execute().await.unwrap();

        assert_eq!(theme, Theme::Light);
    }

    #[tokio::test]
    async fn failed_save_is_reported() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(Theme::Light));
        store
            .expect_save()
            .returning(|_| Err(anyhow::anyhow!("read-only")));

        let result = ToggleTheme::new(Arc::new(store)).execute().await;

        assert!(result.is_err());
    }
}
