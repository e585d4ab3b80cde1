//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders the inspector in the terminal: the summary numbers, the
//! filtered results table, the method options and the detail panel of a
//! selected record, with color coding and internationalization support.
//!
//! 此模块在终端中渲染检查器：汇总数值、过滤后的结果表、方法选项以及选中记录的详情面板，
//! 支持颜色编码和国际化。

use colored::*;

use crate::core::filter::FilterCriteria;
use crate::core::inspector::{DetailView, MethodOption};
use crate::core::models::{Status, TestResult};
use crate::core::stats::Summary;
use crate::infra::t;

/// Prints the summary numbers of the full collection.
///
/// 打印完整集合的汇总数值。
///
/// # Output Format / 输出格式
/// ```text
/// --- Summary ---
///   Total tests:            8
///   Passed:                 4
///   Failed:                 2
///   Pending:                2
///   Avg. response time:     216.67ms
/// ```
pub fn print_summary(summary: &Summary, precision: usize, locale: &str) {
    println!("\n{}", t!("summary_banner", locale = locale).bold());
    println!(
        "  {:<24}{}",
        t!("summary_total", locale = locale),
        summary.total.to_string().bold()
    );
    println!(
        "  {:<24}{}",
        t!("summary_passed", locale = locale),
        summary.passed.to_string().green()
    );
    println!(
        "  {:<24}{}",
        t!("summary_failed", locale = locale),
        summary.failed.to_string().red()
    );
    println!(
        "  {:<24}{}",
        t!("summary_pending", locale = locale),
        summary.pending.to_string().yellow()
    );
    println!(
        "  {:<24}{}",
        t!("summary_avg_response_time", locale = locale),
        summary.format_average(precision).cyan()
    );
}

fn colorize_status(result: &TestResult, locale: &str) -> ColoredString {
    let label = result.status_str(locale);
    match result.status {
        Status::Passed => label.green(),
        Status::Failed => label.red(),
        Status::Pending => label.yellow(),
    }
}

/// Prints the visible records as a table, or the "no matches" state.
///
/// 以表格形式打印可见记录，或打印"无匹配"状态。
pub fn print_results(results: &[&TestResult], locale: &str) {
    println!("\n{}", t!("results_banner", locale = locale).bold());

    if results.is_empty() {
        println!("  {}", t!("no_matching_results", locale = locale).dimmed());
        return;
    }

    println!(
        "  {:<10} | {:<10} | {:<7} | {:<28} | {:>5} | {:>8} | {}",
        t!("column_status", locale = locale),
        t!("column_id", locale = locale),
        t!("column_method", locale = locale),
        t!("column_endpoint", locale = locale),
        t!("column_code", locale = locale),
        t!("column_time", locale = locale),
        t!("column_timestamp", locale = locale),
    );

    for result in results {
        println!(
            "  {:<10} | {:<10} | {:<7} | {:<28} | {:>5} | {:>8} | {}",
            colorize_status(result, locale),
            result.id.cyan(),
            result.method.to_string(),
            result.endpoint,
            result.status_code_str(),
            result.response_time_str(),
            result.timestamp_str().dimmed()
        );
    }
}

/// Describes the active criteria in one line, e.g. `Filters: query "users", status passed`.
///
/// 用一行文字描述当前生效的过滤条件。
pub fn describe_criteria(criteria: &FilterCriteria, locale: &str) -> String {
    if criteria.is_empty() {
        return t!("criteria_none", locale = locale).to_string();
    }

    let mut parts = Vec::new();
    if !criteria.query.is_empty() {
        parts.push(t!("criteria_query", locale = locale, query = criteria.query).to_string());
    }
    if !criteria.statuses.is_empty() {
        let statuses = criteria
            .statuses
            .iter()
            .map(|s| s.label(locale))
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(t!("criteria_status", locale = locale, statuses = statuses).to_string());
    }
    if let Some(method) = &criteria.method {
        parts.push(t!("criteria_method", locale = locale, method = method).to_string());
    }
    if let Some(date) = criteria.date {
        parts.push(t!("criteria_date", locale = locale, date = date).to_string());
    }

    format!("{} {}", t!("criteria_prefix", locale = locale), parts.join("; "))
}

/// Prints the entries of the method filter control.
pub fn print_method_options(options: &[MethodOption], locale: &str) {
    println!("\n{}", t!("methods_banner", locale = locale).bold());
    for option in options {
        match option {
            MethodOption::All => println!("  - {}", t!("all_methods", locale = locale).dimmed()),
            MethodOption::Only(method) => println!("  - {}", method.to_string().cyan()),
        }
    }
}

/// Renders the payload of a detail view as pretty-printed JSON, or the
/// "no response data" indicator.
///
/// 将详情视图的载荷渲染为格式化的 JSON，或渲染"无响应数据"提示。
pub fn render_payload(view: &DetailView<'_>, locale: &str) -> String {
    let payload = match view {
        DetailView::Request(payload) | DetailView::Response(payload) => payload,
        DetailView::NoResponseData => {
            return t!("no_response_data", locale = locale).to_string();
        }
    };
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| format!("{:?}", payload))
}

/// Prints the detail panel of a selected record.
///
/// 打印选中记录的详情面板。
pub fn print_detail(record: &TestResult, view: &DetailView<'_>, locale: &str) {
    println!("{}", "-".repeat(80));
    println!(
        "{} {} {} ({})",
        t!("detail_header", locale = locale).bold(),
        record.id.cyan(),
        record.endpoint,
        colorize_status(record, locale)
    );
    println!(
        "  {} {}  {} {}  {} {}  {} {}",
        t!("column_method", locale = locale).dimmed(),
        record.method,
        t!("column_code", locale = locale).dimmed(),
        record.status_code_str(),
        t!("column_time", locale = locale).dimmed(),
        record.response_time_str(),
        t!("column_timestamp", locale = locale).dimmed(),
        record.timestamp_str()
    );

    let tab_header = match view {
        DetailView::Request(_) => t!("tab_request", locale = locale),
        DetailView::Response(_) | DetailView::NoResponseData => t!("tab_response", locale = locale),
    };
    println!("\n--- {} ---\n", tab_header.yellow());

    let body = render_payload(view, locale);
    if matches!(view, DetailView::NoResponseData) {
        println!("{}", body.dimmed());
    } else {
        println!("{}", body);
    }
    println!("{}", "-".repeat(80));
}
