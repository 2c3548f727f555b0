//! Interpretation of the raw [`AppConfig`] values.
//!
//! 配置值的解释策略：未知主题 → dark，不支持的页大小 → 6，超时 0 → 10 秒。

use std::time::Duration;

use pf_core::catalog::PageSize;
use pf_core::config::AppConfig;
use pf_core::{SiteMetadata, Theme};
use tracing::warn;

pub const DEFAULT_CONTACT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellDefaults {
    pub theme: Theme,
    pub page_size: PageSize,
    /// `None` disables the contact form
    pub contact_endpoint: Option<String>,
    pub contact_timeout: Duration,
    pub metadata: SiteMetadata,
}

impl ShellDefaults {
    pub fn from_config(config: &AppConfig) -> Self {
        let theme = if config.default_theme.trim().is_empty() {
            Theme::default()
        } else {
            config.default_theme.parse().unwrap_or_else(|err| {
                warn!(error = %err, "Ignoring configured theme");
                Theme::default()
            })
        };

        let page_size = match config.default_page_size {
            0 => PageSize::default(),
            raw => PageSize::try_from(raw as usize).unwrap_or_else(|err| {
                warn!(error = %err, "Ignoring configured page size");
                PageSize::default()
            }),
        };

        let endpoint = config.contact_endpoint.trim();
        let contact_timeout = match config.contact_timeout_secs {
            0 => DEFAULT_CONTACT_TIMEOUT,
            secs => Duration::from_secs(secs),
        };

        Self {
            theme,
            page_size,
            contact_endpoint: (!endpoint.is_empty()).then(|| endpoint.to_string()),
            contact_timeout,
            metadata: SiteMetadata::default_profile().with_owner(&config.site_owner),
        }
    }
}

impl Default for ShellDefaults {
    fn default() -> Self {
        Self::from_config(&AppConfig::empty())
    }
}
