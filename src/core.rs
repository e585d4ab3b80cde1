//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Result Inspector:
//! the record model, configuration, filtering, statistics and the
//! selection/detail state.
//!
//! 此模块包含 Result Inspector 的核心功能：
//! 记录模型、配置、过滤、统计以及选择/详情状态。

pub mod config;
pub mod filter;
pub mod inspector;
pub mod models;
pub mod stats;

// Re-exports
pub use config::InspectorConfig;
pub use filter::FilterCriteria;
pub use inspector::{DetailTab, DetailView, Inspector, InspectorState, MethodOption};
pub use models::{Method, Status, TestResult};
pub use stats::Summary;
