//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes an `Inspector.toml`
//! configuration file. In interactive mode a short wizard asks for the language,
//! the results feed, the display precision and the default status filter.
//!
//! 此模块实现 `init` 命令，用于写入 `Inspector.toml` 配置文件。
//! 在交互模式下，一个简短的向导会询问语言、结果数据源、显示精度以及默认状态过滤。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, MultiSelect, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

use crate::core::config::{DEFAULT_CONFIG_FILE, FilterDefaults, InspectorConfig};
use crate::core::models::Status;
use crate::infra::fs::write_file;
use crate::infra::t;

const CONFIG_HEADER: &str = "# Result Inspector configuration / Result Inspector 配置\n\n";

/// Runs the wizard (or writes defaults) and saves the configuration.
///
/// # Arguments
/// * `path` - Target file, `Inspector.toml` when `None`
/// * `language` - Locale for the wizard's messages
/// * `non_interactive` - Write defaults without prompting
pub fn run_init_wizard(path: Option<&Path>, language: &str, non_interactive: bool) -> Result<()> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if non_interactive {
        if config_path.exists() {
            println!(
                "{}",
                t!("init_file_exists", locale = language, path = config_path.display()).yellow()
            );
            return Ok(());
        }
        return write_config(&config_path, &default_config(language), language);
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
    println!("{}", t!("init_wizard_description", locale = language));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init_overwrite_prompt", locale = language, path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let config = prompt_config(&theme, language)?;
    write_config(&config_path, &config, language)
}

fn default_config(language: &str) -> InspectorConfig {
    InspectorConfig {
        language: Some(language.to_string()),
        ..InspectorConfig::default()
    }
}

fn prompt_config(theme: &ColorfulTheme, language: &str) -> Result<InspectorConfig> {
    let failed = t!("init_user_confirmation_failed", locale = language).to_string();

    let chosen_language: String = Input::with_theme(theme)
        .with_prompt(t!("init_language_prompt", locale = language))
        .default(language.to_string())
        .interact_text()
        .context(failed.clone())?;

    let results: String = Input::with_theme(theme)
        .with_prompt(t!("init_results_prompt", locale = language))
        .allow_empty(true)
        .interact_text()
        .context(failed.clone())?;

    let average_precision: usize = Input::with_theme(theme)
        .with_prompt(t!("init_precision_prompt", locale = language))
        .default(2)
        .interact_text()
        .context(failed.clone())?;

    let labels: Vec<String> = Status::ALL.iter().map(|s| s.label(language)).collect();
    let picked = MultiSelect::with_theme(theme)
        .with_prompt(t!("init_statuses_prompt", locale = language))
        .items(&labels)
        .interact()
        .context(failed)?;

    let results = results.trim();
    Ok(InspectorConfig {
        language: Some(chosen_language),
        results: (!results.is_empty()).then(|| PathBuf::from(results)),
        average_precision,
        filters: FilterDefaults {
            statuses: picked.into_iter().map(|i| Status::ALL[i]).collect(),
            ..FilterDefaults::default()
        },
    })
}

fn write_config(path: &Path, config: &InspectorConfig, language: &str) -> Result<()> {
    let body = toml::to_string_pretty(config)
        .with_context(|| t!("init_serialize_failed", locale = language).to_string())?;
    write_file(path, format!("{}{}", CONFIG_HEADER, body))
        .with_context(|| t!("init_write_failed", locale = language, path = path.display()))?;

    println!(
        "{}",
        t!("init_success", locale = language, path = path.display()).green()
    );
    println!("{}", t!("init_next_steps", locale = language));
    Ok(())
}
