use anyhow::Result;
use async_trait::async_trait;
use pf_core::ports::ThemePreferencePort;
use pf_core::Theme;
use tokio::sync::RwLock;

/// Theme preference kept for the lifetime of the process.
pub struct InMemoryThemeRepository {
    theme: RwLock<Theme>,
}

impl InMemoryThemeRepository {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwLock::new(initial),
        }
    }
}

impl Default for InMemoryThemeRepository {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[async_trait]
impl ThemePreferencePort for InMemoryThemeRepository {
    async fn load(&self) -> Result<Theme> {
        Ok(*self.theme.read().await)
    }

    async fn save(&self, theme: Theme) -> Result<()> {
        *self.theme.write().await = theme;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_with_initial_theme() {
        let repo = InMemoryThemeRepository::new(Theme::Light);

        assert_eq!(repo.load().await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn default_is_dark() {
        assert_eq!(InMemoryThemeRepository::default().load().await.unwrap(), Theme::Dark);
    }

    #[tokio::test]
    async fn saved_theme_is_loaded_back() {
        let repo = InMemoryThemeRepository::default();

        repo.save(Theme::Light).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Theme::Light);
    }
}
