//! # Reporting Module / 报告模块
//!
//! This module renders the inspector in multiple formats: colorful console
//! output, a styled HTML dashboard and plain JSON, all with
//! internationalization support where text is involved.
//!
//! 此模块以多种格式渲染检查器：彩色控制台输出、样式化的 HTML 仪表盘以及纯 JSON，
//! 涉及文本之处均支持国际化。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{print_detail, print_method_options, print_results, print_summary};
pub use html::generate_html_report;
pub use json::export_json;
