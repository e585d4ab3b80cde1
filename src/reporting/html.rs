//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders the inspector as a standalone HTML dashboard.
//! It contains summary cards, the filtered results table and a collapsible
//! request/response panel per record.
//!
//! 此模块将检查器渲染为独立的 HTML 仪表盘，
//! 包含汇总卡片、过滤后的结果表以及每条记录可折叠的请求/响应面板。

use anyhow::Result;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;

use crate::core::inspector::{DetailTab, DetailView, Inspector, detail_view};
use crate::core::models::TestResult;
use crate::infra::fs::write_file;
use crate::infra::t;
use crate::reporting::console::{describe_criteria, render_payload};

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Generates the HTML dashboard for the inspector's current criteria.
///
/// 为检查器当前的过滤条件生成 HTML 仪表盘。
///
/// # Arguments / 参数
/// * `inspector` - Records and current criteria / 记录与当前过滤条件
/// * `output_path` - The file path where the HTML report will be saved
///                   保存 HTML 报告的文件路径
/// * `precision` - Decimal places of the average response time / 平均响应时间的小数位数
/// * `locale` - The locale to use for internationalization
///              用于国际化使用的语言环境
///
/// # Errors / 错误
/// This function will return an error if the output file cannot be written.
///
/// 如果无法写入输出文件，此函数将返回错误。
pub fn generate_html_report(
    inspector: &Inspector,
    output_path: &Path,
    precision: usize,
    locale: &str,
) -> Result<()> {
    let markup = render_html_report(inspector, precision, locale);
    write_file(output_path, markup.into_string())?;
    tracing::info!(path = %output_path.display(), "wrote HTML report");
    Ok(())
}

/// Builds the dashboard markup without touching the file system.
/// 构建仪表盘标记，不涉及文件系统。
pub fn render_html_report(inspector: &Inspector, precision: usize, locale: &str) -> Markup {
    let summary = inspector.summary();
    let visible = inspector.visible();

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }
                div.subtitle { (t!("html_report.subtitle", locale = locale)) }

                div.summary-container {
                    (summary_item(&summary.total.to_string(), "", &t!("summary_total", locale = locale)))
                    (summary_item(&summary.passed.to_string(), "passed-text", &t!("summary_passed", locale = locale)))
                    (summary_item(&summary.failed.to_string(), "failed-text", &t!("summary_failed", locale = locale)))
                    (summary_item(&summary.pending.to_string(), "pending-text", &t!("summary_pending", locale = locale)))
                    (summary_item(&summary.format_average(precision), "", &t!("summary_avg_response_time", locale = locale)))
                }

                div.criteria { (describe_criteria(&inspector.state().criteria, locale)) }

                @if visible.is_empty() {
                    div.empty-state { (t!("no_matching_results", locale = locale)) }
                } @else {
                    table {
                        thead {
                            tr {
                                th { (t!("column_status", locale = locale)) }
                                th { (t!("column_id", locale = locale)) }
                                th { (t!("column_method", locale = locale)) }
                                th { (t!("column_endpoint", locale = locale)) }
                                th.numeric { (t!("column_code", locale = locale)) }
                                th.numeric { (t!("column_time", locale = locale)) }
                                th { (t!("column_timestamp", locale = locale)) }
                            }
                        }
                        tbody {
                            @for (i, result) in visible.iter().enumerate() {
                                (result_rows(i, result, locale))
                            }
                        }
                    }
                }
                script { (PreEscaped(HTML_SCRIPT)) }
            }
        }
    }
}

fn summary_item(count: &str, class: &str, label: &str) -> Markup {
    html! {
        div.summary-item {
            span class=(format!("count {}", class)) { (count) }
            span.label { (label) }
        }
    }
}

fn result_rows(index: usize, result: &TestResult, locale: &str) -> Markup {
    let detail_id = format!("detail-{}", index);
    let request = render_payload(&detail_view(result, DetailTab::Request), locale);
    let response_view = detail_view(result, DetailTab::Response);
    let response = render_payload(&response_view, locale);
    let response_missing = matches!(response_view, DetailView::NoResponseData);

    html! {
        tr {
            td {
                div class=(format!("status-cell {}", result.status_class())) { (result.status_str(locale)) }
                div.output-toggle onclick=(format!("toggleOutput('{}')", detail_id)) {
                    (t!("html_report.toggle_details", locale = locale))
                }
            }
            td { (result.id) }
            td.method { (result.method.as_str()) }
            td { (result.endpoint) }
            td.numeric { (result.status_code_str()) }
            td.numeric { (result.response_time_str()) }
            td { (result.timestamp_str()) }
        }
        tr id=(detail_id) style="display:none;" {
            td colspan="7" {
                div.detail-tabs {
                    button.active data-tab-button=(detail_id) data-tab="request"
                        onclick=(format!("showTab('{}', 'request')", detail_id)) {
                        (t!("tab_request", locale = locale))
                    }
                    button data-tab-button=(detail_id) data-tab="response"
                        onclick=(format!("showTab('{}', 'response')", detail_id)) {
                        (t!("tab_response", locale = locale))
                    }
                }
                div data-detail=(detail_id) data-tab="request" {
                    pre.output-content { (request) }
                }
                div data-detail=(detail_id) data-tab="response" style="display:none;" {
                    @if response_missing {
                        p.no-data { (response) }
                    } @else {
                        pre.output-content { (response) }
                    }
                }
            }
        }
    }
}
