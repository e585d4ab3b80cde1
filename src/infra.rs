//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Result Inspector,
//! including result sources, file system operations, and i18n support.
//!
//! 此模块为 Result Inspector 提供基础设施服务，
//! 包括结果数据源、文件系统操作和国际化支持。

pub mod fs;
pub mod source;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
