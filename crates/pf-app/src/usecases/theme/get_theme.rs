//! Use case for reading the active theme
//! 获取当前主题的用例

use std::sync::Arc;

use anyhow::Result;
use pf_core::ports::ThemePreferencePort;
use pf_core::Theme;
use tracing::{debug, info_span, Instrument};

pub struct GetTheme {
    theme: Arc<dyn ThemePreferencePort>,
}

impl GetTheme {
    pub fn new(theme: Arc<dyn ThemePreferencePort>) -> Self {
        Self { theme }
    }

    pub async fn execute(&self) -> Result<Theme> {
        let span = info_span!("usecase.get_theme.execute");

        async {
            let theme = self.theme.load().await?;
            debug!(%theme, "Theme loaded");
            Ok(theme)
        }
        .instrument(span)
        .await
    }
}
