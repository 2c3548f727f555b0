//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic or policies / 禁止任何业务逻辑或策略**
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Interpreting the values (unknown theme, page size outside the selector,
//! zero timeout) is the shell's job.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Site owner shown in titles (may be empty)
    pub site_owner: String,

    /// Raw theme name, e.g. "dark" (may be empty or unknown)
    pub default_theme: String,

    /// Raw page size (0 when missing)
    pub default_page_size: u32,

    /// Contact endpoint URL (empty means no endpoint configured)
    /// 联系表单提交地址（为空表示未配置）
    pub contact_endpoint: String,

    /// Contact request timeout in seconds (0 when missing)
    pub contact_timeout_secs: u64,

    /// Directory for log files (empty means stdout only)
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            site_owner: toml_value
                .get("site")
                .and_then(|s| s.get("owner"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            default_theme: toml_value
                .get("ui")
                .and_then(|u| u.get("default_theme"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            default_page_size: toml_value
                .get("ui")
                .and_then(|u| u.get("default_page_size"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0) as u32,
            contact_endpoint: toml_value
                .get("contact")
                .and_then(|c| c.get("endpoint"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            contact_timeout_secs: toml_value
                .get("contact")
                .and_then(|c| c.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0) as u64,
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            site_owner: String::new(),
            default_theme: String::new(),
            default_page_size: 0,
            contact_endpoint: String::new(),
            contact_timeout_secs: 0,
            log_dir: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [site]
            owner = "Ada Lovelace"

            [ui]
            default_theme = "light"
            default_page_size = 9

            [contact]
            endpoint = "https://forms.example.com/submit"
            timeout_secs = 15

            [logging]
            dir = "/var/log/folio"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.site_owner, "Ada Lovelace");
        assert_eq!(config.default_theme, "light");
        assert_eq!(config.default_page_size, 9);
        assert_eq!(config.contact_endpoint, "https://forms.example.com/submit");
        assert_eq!(config.contact_timeout_secs, 15);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/folio"));
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_str = r#"
            [ui]
            # default_theme is missing
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty values are valid facts
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_does_not_validate_page_size() {
        // 7 is not offered by the selector; accepted here as a raw fact
        let toml_str = r#"
            [ui]
            default_page_size = 7
            default_theme = "sepia"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.default_page_size, 7);
        assert_eq!(config.default_theme, "sepia");
    }
}
