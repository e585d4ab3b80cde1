//! # Result Inspector Library / Result Inspector 库
//!
//! This library provides the core functionality for the Result Inspector tool,
//! which filters, summarizes and inspects API test-execution records.
//!
//! 此库为 Result Inspector 工具提供核心功能，
//! 用于过滤、汇总和检查 API 测试执行记录。
//!
//! ## Modules / 模块
//!
//! - `core` - Record model, filter criteria, statistics and inspector state
//! - `infra` - Result sources, file system helpers and i18n support
//! - `reporting` - Console, HTML and JSON rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 记录模型、过滤条件、统计和检查器状态
//! - `infra` - 结果数据源、文件系统工具和国际化支持
//! - `reporting` - 控制台、HTML 和 JSON 渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::config;
pub use core::filter;
pub use core::models;

/// Resolves the locale to use for output.
///
/// An explicitly requested locale wins. Otherwise the system locale is detected;
/// the full locale (e.g., "zh-CN") is tried first, then just the language code
/// (e.g., "en"), and finally the default language ("en").
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    lang.to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
