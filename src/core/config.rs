//! # Configuration Module / 配置模块
//!
//! `Inspector.toml` parsing. Every field is optional; command-line flags override
//! whatever the file sets.
//!
//! `Inspector.toml` 解析。所有字段都是可选的；命令行参数会覆盖文件中的设置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::filter::{FilterCriteria, parse_filter_date};
use crate::core::models::{Method, Status};
use crate::infra::t;

/// Name of the configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "Inspector.toml";

/// Default criteria as written in the `[filters]` table.
/// `[filters]` 表中写入的默认过滤条件。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Calendar day, `YYYY-MM-DD` / 日历日，格式 `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl FilterDefaults {
    /// Converts the raw table into criteria, validating method and date.
    /// 将原始表转换为过滤条件，并校验方法与日期。
    pub fn to_criteria(&self) -> Result<FilterCriteria> {
        let method = self
            .method
            .as_deref()
            .map(str::parse::<Method>)
            .transpose()?;
        let date = self.date.as_deref().map(parse_filter_date).transpose()?;

        Ok(FilterCriteria::new()
            .with_query(self.query.clone().unwrap_or_default())
            .with_statuses(self.statuses.iter().copied())
            .with_method(method)
            .with_date(date))
    }
}

/// The whole configuration file.
/// 整个配置文件。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InspectorConfig {
    /// The language for output messages (e.g., "en", "zh-CN").
    /// When unset the system locale is used.
    /// 输出消息的语言（例如 "en", "zh-CN"）。未设置时使用系统语言。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Results feed on disk. When absent the built-in sample feed is used.
    /// 磁盘上的结果数据源。未设置时使用内置的示例数据。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<PathBuf>,

    /// Decimal places for the average response time.
    /// 平均响应时间的小数位数。
    #[serde(default = "default_average_precision")]
    pub average_precision: usize,

    #[serde(default)]
    pub filters: FilterDefaults,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            language: None,
            results: None,
            average_precision: default_average_precision(),
            filters: FilterDefaults::default(),
        }
    }
}

fn default_average_precision() -> usize {
    2
}

/// Loads the configuration.
///
/// With `path == None` the default file is read if it exists, otherwise defaults
/// are returned. An explicit path must exist and parse.
///
/// 加载配置。`path == None` 时若默认文件存在则读取，否则返回默认值。
/// 显式指定的路径必须存在且可解析。
pub fn load_config(path: Option<&Path>) -> Result<InspectorConfig> {
    let locale = rust_i18n::locale();
    let locale = &*locale;
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default_path.exists() {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(InspectorConfig::default());
            }
            default_path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| t!("config_read_failed_path", locale = locale, path = path.display()))?;
    let config = parse_config(&content)
        .with_context(|| t!("config_parse_failed", locale = locale, path = path.display()))?;

    tracing::info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<InspectorConfig> {
    let config: InspectorConfig = toml::from_str(content)?;
    // Reject bad method/date values at load time.
    config.filters.to_criteria()?;
    Ok(config)
}
