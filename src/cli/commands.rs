//! # Commands Module / 命令模块
//!
//! Subcommand implementations and the session they share: configuration,
//! resolved locale and an inspector over the loaded results.
//!
//! 子命令的实现及其共享的会话：配置、解析后的语言环境以及基于已加载结果的检查器。

use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::core::config::{InspectorConfig, load_config};
use crate::core::filter::FilterCriteria;
use crate::core::inspector::{Inspector, InspectorState};
use crate::core::models::{Method, Status};
use crate::infra::source::{load_results, source_for};

pub mod init;
pub mod inspect;
pub mod list;
pub mod overview;
pub mod report;
pub mod show;

/// Global options shared by every subcommand.
/// 所有子命令共享的全局选项。
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub config: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub language: Option<String>,
}

/// Filter values given on the command line. Each one that is set replaces the
/// corresponding default from the configuration file.
///
/// 命令行给出的过滤值。每个已设置的值都会替换配置文件中对应的默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOverrides {
    pub query: Option<String>,
    pub statuses: Vec<Status>,
    pub method: Option<Method>,
    pub date: Option<NaiveDate>,
}

impl FilterOverrides {
    pub fn apply_to(&self, base: FilterCriteria) -> FilterCriteria {
        let mut criteria = base;
        if let Some(query) = &self.query {
            criteria = criteria.with_query(query.clone());
        }
        if !self.statuses.is_empty() {
            criteria = criteria.with_statuses(self.statuses.iter().copied());
        }
        if let Some(method) = &self.method {
            criteria = criteria.with_method(Some(method.clone()));
        }
        if let Some(date) = self.date {
            criteria = criteria.with_date(Some(date));
        }
        criteria
    }
}

/// Everything a subcommand needs to render results.
/// 子命令渲染结果所需的全部内容。
#[derive(Debug)]
pub struct Session {
    pub config: InspectorConfig,
    pub locale: String,
    pub inspector: Inspector,
}

impl Session {
    /// Loads configuration and results, and builds the initial criteria.
    ///
    /// Precedence for every setting is command line, then config file, then defaults.
    ///
    /// 加载配置与结果，并构建初始过滤条件。
    /// 每项设置的优先级依次为：命令行、配置文件、默认值。
    pub fn open(options: &SessionOptions, overrides: &FilterOverrides) -> Result<Self> {
        let config = load_config(options.config.as_deref())?;

        let locale = crate::resolve_locale(
            options
                .language
                .as_deref()
                .or(config.language.as_deref()),
        );
        rust_i18n::set_locale(&locale);

        let results_path = options.results.as_deref().or(config.results.as_deref());
        let results = load_results(source_for(results_path).as_ref())?;

        let criteria = overrides.apply_to(config.filters.to_criteria()?);
        tracing::debug!(?criteria, "initial filter criteria");

        let inspector = Inspector::with_state(results, InspectorState::new(criteria));
        Ok(Self {
            config,
            locale,
            inspector,
        })
    }

    pub fn precision(&self) -> usize {
        self.config.average_precision
    }
}
