//! # Data Models Module / 数据模型模块
//!
//! This module defines the record type inspected by the tool: one logged outcome
//! of exercising an API endpoint, together with its lifecycle status and the
//! HTTP method that was used.
//!
//! 此模块定义了工具所检查的记录类型：一次调用 API 端点的执行结果，
//! 以及其生命周期状态和所使用的 HTTP 方法。

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::infra::t;

/// A JSON object carried as a request or response body.
/// 作为请求体或响应体携带的 JSON 对象。
pub type Payload = Map<String, Value>;

/// Lifecycle state of a single record.
/// 单条记录的生命周期状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The endpoint answered as expected. / 端点按预期响应。
    Passed,
    /// The endpoint answered, but not as expected. / 端点有响应，但不符合预期。
    Failed,
    /// The execution has not produced a response yet. / 执行尚未产生响应。
    Pending,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Passed, Status::Failed, Status::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Pending => "pending",
        }
    }

    /// Localized label for display.
    /// 用于显示的本地化标签。
    pub fn label(&self, locale: &str) -> String {
        match self {
            Status::Passed => t!("status.passed", locale = locale).to_string(),
            Status::Failed => t!("status.failed", locale = locale).to_string(),
            Status::Pending => t!("status.pending", locale = locale).to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passed" => Ok(Status::Passed),
            "failed" => Ok(Status::Failed),
            "pending" => Ok(Status::Pending),
            other => bail!("unknown status '{}', expected one of: passed, failed, pending", other),
        }
    }
}

/// HTTP method of a record. The set is open: anything the recorder reports is kept
/// verbatim and compared exactly.
///
/// 记录的 HTTP 方法。该集合是开放的：记录器报告的任何值都会原样保留并进行精确比较。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Method(String);

impl Method {
    pub fn new(method: impl Into<String>) -> Self {
        Self(method.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A method token is non-empty and contains no whitespace.
    pub fn is_valid(&self) -> bool {
        is_method_token(&self.0)
    }
}

fn is_method_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if !is_method_token(token) {
            bail!("invalid HTTP method '{}'", s);
        }
        Ok(Self(token.to_string()))
    }
}

/// One logged outcome of exercising an endpoint.
///
/// `response_time`, `status_code` and `response_payload` are either all present or
/// all absent, and they are absent exactly when the record is pending.
///
/// 一次调用端点的记录结果。
/// `response_time`、`status_code` 和 `response_payload` 要么同时存在，要么同时缺失，
/// 且仅当记录处于 pending 状态时缺失。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Opaque identifier, unique within a collection / 不透明标识符，在集合内唯一
    pub id: String,
    /// URL path that was exercised / 被调用的 URL 路径
    pub endpoint: String,
    pub method: Method,
    pub status: Status,
    /// Response time in milliseconds / 响应时间（毫秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<u64>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub request_payload: Payload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_payload: Option<Payload>,
}

impl TestResult {
    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// Checks that the response fields agree with the record's status.
    /// 检查响应字段是否与记录状态一致。
    pub fn validate(&self) -> Result<()> {
        if !self.method.is_valid() {
            bail!("record '{}' has invalid HTTP method '{}'", self.id, self.method);
        }

        let present = [
            self.response_time.is_some(),
            self.status_code.is_some(),
            self.response_payload.is_some(),
        ];

        if self.is_pending() {
            if present.iter().any(|p| *p) {
                bail!(
                    "record '{}' is pending but carries response data",
                    self.id
                );
            }
        } else if !present.iter().all(|p| *p) {
            bail!(
                "record '{}' is {} but is missing response time, status code or response payload",
                self.id,
                self.status
            );
        }
        Ok(())
    }

    /// Gets the CSS class for the record's status.
    pub fn status_class(&self) -> &'static str {
        match self.status {
            Status::Passed => "status-Passed",
            Status::Failed => "status-Failed",
            Status::Pending => "status-Pending",
        }
    }

    /// Gets the status of the record as a localized string for display.
    /// 以本地化字符串形式获取记录的状态以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        self.status.label(locale)
    }

    /// Formats the response time, `N/A` when the record has none.
    pub fn response_time_str(&self) -> String {
        self.response_time
            .map(|ms| format!("{}ms", ms))
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn status_code_str(&self) -> String {
        self.status_code
            .map(|code| code.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Validates every record of a collection and rejects duplicate ids.
/// 校验集合中的每条记录并拒绝重复的 id。
pub fn validate_collection(results: &[TestResult]) -> Result<()> {
    let mut seen = HashSet::with_capacity(results.len());
    for result in results {
        result.validate()?;
        if !seen.insert(result.id.as_str()) {
            bail!("duplicate record id '{}'", result.id);
        }
    }
    Ok(())
}
