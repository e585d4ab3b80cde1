//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for `Inspector.toml` parsing, defaults and the command-line overrides.
//!
//! `Inspector.toml` 解析、默认值以及命令行覆盖的测试。

mod common;

use chrono::NaiveDate;
use common::write_fixture;
use result_inspector::cli::commands::FilterOverrides;
use result_inspector::config::{InspectorConfig, load_config, parse_config};
use result_inspector::filter::FilterCriteria;
use result_inspector::models::{Method, Status};
use std::path::PathBuf;
use tempfile::tempdir;

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config, InspectorConfig::default());
        assert_eq!(config.average_precision, 2);
        assert!(config.language.is_none());
        assert!(config.results.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
language = "zh-CN"
results = "~/results.json"
average_precision = 1

[filters]
query = "users"
statuses = ["passed", "failed"]
method = "GET"
date = "2023-05-15"
"#,
        )
        .unwrap();

        assert_eq!(config.language.as_deref(), Some("zh-CN"));
        assert_eq!(config.results, Some(PathBuf::from("~/results.json")));
        assert_eq!(config.average_precision, 1);

        let criteria = config.filters.to_criteria().unwrap();
        assert_eq!(criteria.query, "users");
        assert!(criteria.statuses.contains(&Status::Passed));
        assert!(criteria.statuses.contains(&Status::Failed));
        assert_eq!(criteria.method, Some(Method::new("GET")));
        assert_eq!(criteria.date, NaiveDate::from_ymd_opt(2023, 5, 15));
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        assert!(parse_config("[filters]\nstatuses = [\"skipped\"]\n").is_err());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = parse_config("[filters]\ndate = \"yesterday\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_config_serializes_back() {
        let config = InspectorConfig {
            language: Some("en".to_string()),
            ..InspectorConfig::default()
        };
        let text = toml::to_string(&config).unwrap();

        assert!(text.contains("language = \"en\""));
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = tempdir().unwrap();
        let path = write_fixture(&temp_dir, "Inspector.toml", "average_precision = 3\n");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.average_precision, 3);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nope.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.toml"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = write_fixture(&temp_dir, "bad.toml", "[filters\nquery = 1");

        assert!(load_config(Some(&path)).is_err());
    }
}

#[cfg(test)]
mod override_tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_values() {
        let base = FilterCriteria::new()
            .with_query("users")
            .with_statuses([Status::Passed]);
        let overrides = FilterOverrides {
            method: Some(Method::new("POST")),
            statuses: vec![Status::Failed],
            ..FilterOverrides::default()
        };

        let criteria = overrides.apply_to(base);
        assert_eq!(criteria.query, "users");
        assert_eq!(criteria.statuses.len(), 1);
        assert!(criteria.statuses.contains(&Status::Failed));
        assert_eq!(criteria.method, Some(Method::new("POST")));
    }

    #[test]
    fn test_empty_overrides_keep_base() {
        let base = FilterCriteria::new().with_query("orders");
        assert_eq!(FilterOverrides::default().apply_to(base.clone()), base);
    }
}
