//! # Result Filter Module / 结果过滤模块
//!
//! Filter criteria over a record collection. Criteria are plain values: every
//! transition returns a new `FilterCriteria` and leaves the original untouched.
//!
//! 记录集合上的过滤条件。条件是普通值：每次变换都返回新的 `FilterCriteria`，
//! 原值保持不变。

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::models::{Method, Status, TestResult};

/// The four independent predicates applied to a collection.
/// 应用于集合的四个独立谓词。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the endpoint. Empty accepts all.
    /// 端点的不区分大小写子串。为空时接受全部。
    #[serde(default)]
    pub query: String,
    /// Accepted statuses. Empty accepts all.
    /// 接受的状态集合。为空时接受全部。
    #[serde(default)]
    pub statuses: BTreeSet<Status>,
    #[serde(default)]
    pub method: Option<Method>,
    /// Calendar day the timestamp must fall on (UTC).
    /// 时间戳必须落在的日历日（UTC）。
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Adds the status to the accepted set, or removes it if already present.
    /// 将状态加入接受集合；若已存在则移除。
    pub fn toggle_status(&self, status: Status) -> Self {
        let mut statuses = self.statuses.clone();
        if !statuses.remove(&status) {
            statuses.insert(status);
        }
        Self {
            statuses,
            ..self.clone()
        }
    }

    pub fn with_statuses(&self, statuses: impl IntoIterator<Item = Status>) -> Self {
        Self {
            statuses: statuses.into_iter().collect(),
            ..self.clone()
        }
    }

    pub fn with_method(&self, method: Option<Method>) -> Self {
        Self {
            method,
            ..self.clone()
        }
    }

    pub fn with_date(&self, date: Option<NaiveDate>) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// `true` when no predicate restricts the collection.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.statuses.is_empty()
            && self.method.is_none()
            && self.date.is_none()
    }

    /// Checks a single record against all four predicates.
    /// 检查单条记录是否满足全部四个谓词。
    pub fn matches(&self, result: &TestResult) -> bool {
        self.matches_query(result)
            && (self.statuses.is_empty() || self.statuses.contains(&result.status))
            && self.method.as_ref().is_none_or(|m| *m == result.method)
            && self.date.is_none_or(|d| result.timestamp.date_naive() == d)
    }

    fn matches_query(&self, result: &TestResult) -> bool {
        if self.query.is_empty() {
            return true;
        }
        result
            .endpoint
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    /// Returns the records passing every predicate, in source order.
    /// 按源顺序返回满足所有谓词的记录。
    pub fn apply<'a>(&self, results: &'a [TestResult]) -> Vec<&'a TestResult> {
        let visible: Vec<_> = results.iter().filter(|r| self.matches(r)).collect();
        tracing::debug!(
            total = results.len(),
            visible = visible.len(),
            "applied filter criteria"
        );
        visible
    }
}

/// Parses a date filter. Accepts a plain day, a day with a time, or RFC 3339;
/// any time part is discarded.
///
/// 解析日期过滤条件。接受纯日期、带时间的日期或 RFC 3339 格式；时间部分会被丢弃。
pub fn parse_filter_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", input))
}
