// Shared test helpers for integration tests
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use result_inspector::infra::source::{ResultSource, SampleSource};
use result_inspector::models::{Method, Payload, Status, TestResult};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The built-in eight-record feed.
pub fn sample_results() -> Vec<TestResult> {
    SampleSource
        .fetch_recent()
        .expect("built-in sample must parse")
}

pub fn timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid RFC 3339 timestamp")
}

fn payload(value: serde_json::Value) -> Payload {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Payload::new(),
    }
}

/// Builds a record that satisfies the pending invariant for its status.
pub fn make_result(
    id: &str,
    endpoint: &str,
    method: &str,
    status: Status,
    response_time: Option<u64>,
    at: &str,
) -> TestResult {
    let pending = status == Status::Pending;
    TestResult {
        id: id.to_string(),
        endpoint: endpoint.to_string(),
        method: Method::new(method),
        status,
        response_time: if pending { None } else { Some(response_time.unwrap_or(100)) },
        timestamp: timestamp(at),
        status_code: if pending { None } else { Some(200) },
        request_payload: payload(json!({ "id": id })),
        response_payload: if pending { None } else { Some(payload(json!({ "ok": true }))) },
    }
}

pub fn ids<'a>(results: impl IntoIterator<Item = &'a TestResult>) -> Vec<&'a str> {
    results.into_iter().map(|r| r.id.as_str()).collect()
}

/// Writes `content` to `name` inside the temporary directory.
pub fn write_fixture(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// A two-record JSON feed: one passed, one pending.
pub fn small_json_feed() -> &'static str {
    r#"[
  {
    "id": "a-1",
    "endpoint": "/api/health",
    "method": "GET",
    "status": "passed",
    "responseTime": 40,
    "timestamp": "2024-01-02T03:04:05Z",
    "statusCode": 200,
    "requestPayload": {},
    "responsePayload": { "status": "ok" }
  },
  {
    "id": "a-2",
    "endpoint": "/api/jobs",
    "method": "PATCH",
    "status": "pending",
    "timestamp": "2024-01-03T10:00:00Z",
    "requestPayload": { "priority": "high" }
  }
]"#
}
