//! # Result Source Module / 结果数据源模块
//!
//! The record collection is supplied by a `ResultSource`. The inspector never
//! knows where the records come from: the built-in sample feed and on-disk feeds
//! are interchangeable, and a live recorder can be plugged in the same way.
//!
//! 记录集合由 `ResultSource` 提供。检查器并不关心记录来自何处：内置示例数据与磁盘数据源
//! 可以互换，实时记录器也可以以同样方式接入。

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{TestResult, validate_collection};
use crate::infra::fs::expand_path;
use crate::infra::t;

/// Reference data seeded into the sample feed.
const SAMPLE_RESULTS: &str = include_str!("../../data/sample_results.json");

/// A feed of recent test-execution records.
/// 最近测试执行记录的数据源。
pub trait ResultSource {
    /// Returns the records in the order the recorder produced them.
    /// 按记录器产生的顺序返回记录。
    fn fetch_recent(&self) -> Result<Vec<TestResult>>;

    /// Short human-readable origin, used in log lines.
    fn describe(&self) -> String;
}

/// The built-in eight-record reference feed.
/// 内置的八条记录参考数据源。
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl SampleSource {
    fn records() -> Result<&'static Vec<TestResult>> {
        static SAMPLE: OnceCell<Vec<TestResult>> = OnceCell::new();
        SAMPLE.get_or_try_init(|| {
            serde_json::from_str(SAMPLE_RESULTS).context("Failed to parse the built-in sample results")
        })
    }
}

impl ResultSource for SampleSource {
    fn fetch_recent(&self) -> Result<Vec<TestResult>> {
        Ok(Self::records()?.clone())
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}

/// Records stored on disk, as a JSON array or a TOML file with `[[results]]` tables.
/// 存储在磁盘上的记录，格式为 JSON 数组或带有 `[[results]]` 表的 TOML 文件。
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

#[derive(Deserialize)]
struct TomlFeed {
    #[serde(default)]
    results: Vec<TestResult>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_toml(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }
}

impl ResultSource for FileSource {
    fn fetch_recent(&self) -> Result<Vec<TestResult>> {
        let locale = rust_i18n::locale();
        let locale = &*locale;
        let path = expand_path(&self.path)?;
        let content = fs::read_to_string(&path).with_context(|| {
            t!("results_read_failed", locale = locale, path = path.display())
        })?;

        let results = if Self::is_toml(&path) {
            toml::from_str::<TomlFeed>(&content).map(|feed| feed.results).with_context(|| {
                t!("results_parse_failed", locale = locale, path = path.display())
            })?
        } else {
            serde_json::from_str::<Vec<TestResult>>(&content).with_context(|| {
                t!("results_parse_failed", locale = locale, path = path.display())
            })?
        };

        Ok(results)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Builds the source a run should read from: the given file, or the sample feed.
/// 构建本次运行应读取的数据源：指定的文件，或示例数据源。
pub fn source_for(path: Option<&Path>) -> Box<dyn ResultSource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(SampleSource),
    }
}

/// Fetches the records from a source and checks the collection invariants.
/// 从数据源获取记录并检查集合不变量。
pub fn load_results(source: &dyn ResultSource) -> Result<Vec<TestResult>> {
    let results = source.fetch_recent()?;
    validate_collection(&results)
        .with_context(|| format!("Invalid results from {}", source.describe()))?;

    tracing::info!(
        source = %source.describe(),
        count = results.len(),
        "loaded test results"
    );
    Ok(results)
}
