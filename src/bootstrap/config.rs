//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Locate and read the TOML configuration file / 定位并读取 TOML 配置文件
//! - ✅ Parse TOML into the AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑**
//!
//! Interpretation of the values lives in `shell::defaults`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pf_core::config::AppConfig;
use tracing::warn;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings, unknown themes and
/// unsupported page sizes are accepted as facts.
///
/// # Errors / 错误
///
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file yields `AppConfig::empty()`.
///
/// A file that exists but cannot be parsed is still an error.
pub fn load_config_or_empty(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        warn!(path = %config_path.display(), "Config file not found, using built-in defaults");
        return Ok(AppConfig::empty());
    }
    load_config(config_path)
}

/// `$FOLIO_CONFIG`, else `<config dir>/folio/config.toml`.
pub fn resolve_config_path() -> Option<PathBuf> {
    resolve_config_path_from(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from), dirs::config_dir())
}

fn resolve_config_path_from(env_path: Option<PathBuf>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    env_path
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| config_dir.map(|dir| dir.join("folio").join("config.toml")))
}
