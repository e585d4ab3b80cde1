//! # JSON Export Module / JSON 导出模块
//!
//! Serializes the visible records in the same camelCase shape the feeds use, so
//! an exported view can be read back as a results file.
//!
//! 以数据源相同的 camelCase 结构序列化可见记录，导出的视图可以再次作为结果文件读取。

use anyhow::{Context, Result};

use crate::core::models::TestResult;

/// Pretty-printed JSON array of the given records.
pub fn export_json(results: &[&TestResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize test results")
}
