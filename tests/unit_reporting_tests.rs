//! # Reporting Module Unit Tests / Reporting 模块单元测试
//!
//! Tests for the text helpers, the JSON export and the HTML dashboard.
//!
//! 文本辅助函数、JSON 导出和 HTML 仪表盘的测试。

mod common;

use common::{ids, sample_results};
use result_inspector::core::inspector::{DetailTab, DetailView, Inspector, InspectorState, detail_view};
use result_inspector::filter::FilterCriteria;
use result_inspector::models::{Method, Status, TestResult};
use result_inspector::reporting::console::{describe_criteria, render_payload};
use result_inspector::reporting::html::{generate_html_report, render_html_report};
use result_inspector::reporting::json::export_json;
use tempfile::tempdir;

fn record<'a>(results: &'a [TestResult], id: &str) -> &'a TestResult {
    results.iter().find(|r| r.id == id).unwrap()
}

#[cfg(test)]
mod console_tests {
    use super::*;

    #[test]
    fn test_render_payload_without_response() {
        let results = sample_results();
        let view = detail_view(record(&results, "test-004"), DetailTab::Response);

        assert_eq!(view, DetailView::NoResponseData);
        assert_eq!(render_payload(&view, "en"), "No response data available.");
    }

    #[test]
    fn test_render_payload_is_pretty_json() {
        let results = sample_results();
        let view = detail_view(record(&results, "test-003"), DetailTab::Response);
        let text = render_payload(&view, "en");

        assert!(text.contains("\"error\": \"Category not found\""));
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_describe_empty_criteria() {
        assert_eq!(describe_criteria(&FilterCriteria::new(), "en"), "Filters: none");
    }

    #[test]
    fn test_describe_active_criteria() {
        let criteria = FilterCriteria::new()
            .with_query("users")
            .with_statuses([Status::Failed])
            .with_method(Some(Method::new("GET")));
        let text = describe_criteria(&criteria, "en");

        assert!(text.starts_with("Filters:"));
        assert!(text.contains("users"));
        assert!(text.contains("Failed"));
        assert!(text.contains("GET"));
    }

    #[test]
    fn test_status_labels_are_localized() {
        assert_eq!(Status::Passed.label("en"), "Passed");
        assert_eq!(Status::Passed.label("zh-CN"), "通过");
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_export_reads_back() {
        let results = sample_results();
        let visible: Vec<&TestResult> = results.iter().filter(|r| r.is_pending()).collect();

        let text = export_json(&visible).unwrap();
        let parsed: Vec<TestResult> = serde_json::from_str(&text).unwrap();

        assert_eq!(ids(&parsed), vec!["test-004", "test-008"]);
        assert!(!text.contains("responseTime"));
    }

    #[test]
    fn test_export_uses_camel_case() {
        let results = sample_results();
        let visible: Vec<&TestResult> = results.iter().take(1).collect();
        let text = export_json(&visible).unwrap();

        assert!(text.contains("\"responseTime\": 120"));
        assert!(text.contains("\"statusCode\": 200"));
    }
}

#[cfg(test)]
mod html_tests {
    use super::*;

    #[test]
    fn test_dashboard_contains_summary_and_rows() {
        let inspector = Inspector::new(sample_results());
        let html = render_html_report(&inspector, 2, "en").into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("216.67ms"));
        for id in ["test-001", "test-004", "test-008"] {
            assert!(html.contains(id), "missing row {}", id);
        }
        assert!(html.contains("No response data available."));
        assert!(html.contains("toggleOutput"));
    }

    #[test]
    fn test_dashboard_rows_follow_criteria() {
        let state = InspectorState::new(FilterCriteria::new().with_statuses([Status::Failed]));
        let inspector = Inspector::with_state(sample_results(), state);
        let html = render_html_report(&inspector, 2, "en").into_string();

        assert!(html.contains("test-003"));
        assert!(html.contains("test-006"));
        assert!(!html.contains("test-001"));
        // Summary still covers the whole collection.
        assert!(html.contains("216.67ms"));
    }

    #[test]
    fn test_dashboard_empty_state() {
        let state = InspectorState::new(FilterCriteria::new().with_query("no-such-endpoint"));
        let inspector = Inspector::with_state(sample_results(), state);
        let html = render_html_report(&inspector, 2, "en").into_string();

        assert!(html.contains("No test results match your filters."));
        assert!(!html.contains("<tbody>"));
    }

    #[test]
    fn test_generate_writes_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out").join("report.html");
        let inspector = Inspector::new(sample_results());

        generate_html_report(&inspector, &path, 2, "en").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("test-007"));
    }
}
