//! # Inspect Command Module / 交互检查命令模块
//!
//! An interactive session over the loaded results. The user edits the four
//! filter criteria, picks a record from the visible set and switches between
//! its request and response sub-views until quitting.
//!
//! 基于已加载结果的交互式会话。用户可编辑四个过滤条件、从可见集合中选择记录，
//! 并在其请求与响应子视图之间切换，直到退出。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};

use crate::cli::commands::Session;
use crate::core::filter::parse_filter_date;
use crate::core::inspector::{DetailTab, Inspector};
use crate::core::models::Status;
use crate::infra::t;
use crate::reporting::console::describe_criteria;
use crate::reporting::{print_detail, print_results, print_summary};

#[derive(Debug, Clone, Copy)]
enum MenuAction {
    SelectRecord,
    EditQuery,
    EditStatuses,
    EditMethod,
    EditDate,
    ClearFilters,
    ShowSummary,
    Quit,
}

const MENU: [MenuAction; 8] = [
    MenuAction::SelectRecord,
    MenuAction::EditQuery,
    MenuAction::EditStatuses,
    MenuAction::EditMethod,
    MenuAction::EditDate,
    MenuAction::ClearFilters,
    MenuAction::ShowSummary,
    MenuAction::Quit,
];

impl MenuAction {
    fn label(&self, locale: &str) -> String {
        match self {
            MenuAction::SelectRecord => t!("menu_select_record", locale = locale),
            MenuAction::EditQuery => t!("menu_edit_query", locale = locale),
            MenuAction::EditStatuses => t!("menu_edit_statuses", locale = locale),
            MenuAction::EditMethod => t!("menu_edit_method", locale = locale),
            MenuAction::EditDate => t!("menu_edit_date", locale = locale),
            MenuAction::ClearFilters => t!("menu_clear_filters", locale = locale),
            MenuAction::ShowSummary => t!("menu_show_summary", locale = locale),
            MenuAction::Quit => t!("menu_quit", locale = locale),
        }
        .to_string()
    }
}

/// Runs the interactive session until the user quits.
///
/// # Arguments
/// * `session` - Loaded results and initial criteria
pub fn execute(session: Session) -> Result<()> {
    let Session {
        config,
        locale,
        mut inspector,
    } = session;
    let theme = ColorfulTheme::default();
    let prompt_failed = t!("prompt_failed", locale = &locale).to_string();

    print_summary(&inspector.summary(), config.average_precision, &locale);

    loop {
        println!(
            "\n{}",
            describe_criteria(&inspector.state().criteria, &locale).cyan()
        );
        print_results(&inspector.visible(), &locale);

        let labels: Vec<String> = MENU.iter().map(|action| action.label(&locale)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(t!("menu_prompt", locale = &locale))
            .items(&labels)
            .default(0)
            .interact()
            .context(prompt_failed.clone())?;

        match MENU[choice] {
            MenuAction::SelectRecord => select_record(&mut inspector, &theme, &locale)?,
            MenuAction::EditQuery => {
                let query: String = Input::with_theme(&theme)
                    .with_prompt(t!("prompt_query", locale = &locale))
                    .with_initial_text(inspector.state().criteria.query.clone())
                    .allow_empty(true)
                    .interact_text()
                    .context(prompt_failed.clone())?;
                inspector.apply(|state| state.with_criteria(state.criteria.with_query(query)));
            }
            MenuAction::EditStatuses => {
                let current = &inspector.state().criteria.statuses;
                let labels: Vec<String> = Status::ALL.iter().map(|s| s.label(&locale)).collect();
                let defaults: Vec<bool> = Status::ALL.iter().map(|s| current.contains(s)).collect();
                let picked = MultiSelect::with_theme(&theme)
                    .with_prompt(t!("prompt_statuses", locale = &locale))
                    .items(&labels)
                    .defaults(&defaults)
                    .interact()
                    .context(prompt_failed.clone())?;
                let statuses: Vec<Status> = picked.into_iter().map(|i| Status::ALL[i]).collect();
                inspector.apply(|state| state.with_criteria(state.criteria.with_statuses(statuses)));
            }
            MenuAction::EditMethod => {
                let options = inspector.method_options();
                let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt(t!("prompt_method", locale = &locale))
                    .items(&labels)
                    .default(0)
                    .interact()
                    .context(prompt_failed.clone())?;
                let method = options[picked].as_filter();
                inspector.apply(|state| state.with_criteria(state.criteria.with_method(method)));
            }
            MenuAction::EditDate => {
                let raw: String = Input::with_theme(&theme)
                    .with_prompt(t!("prompt_date", locale = &locale))
                    .allow_empty(true)
                    .validate_with(|input: &String| -> Result<(), String> {
                        if input.trim().is_empty() {
                            return Ok(());
                        }
                        parse_filter_date(input).map(|_| ()).map_err(|e| e.to_string())
                    })
                    .interact_text()
                    .context(prompt_failed.clone())?;
                let date = if raw.trim().is_empty() {
                    None
                } else {
                    Some(parse_filter_date(&raw)?)
                };
                inspector.apply(|state| state.with_criteria(state.criteria.with_date(date)));
            }
            MenuAction::ClearFilters => {
                inspector.apply(|state| state.with_criteria(state.criteria.cleared()));
            }
            MenuAction::ShowSummary => {
                print_summary(&inspector.summary(), config.average_precision, &locale);
            }
            MenuAction::Quit => break,
        }
    }

    tracing::debug!("interactive session finished");
    Ok(())
}

/// Lets the user pick a visible record, then toggles its detail view until "back".
/// 让用户选择一条可见记录，然后在其详情视图间切换，直到选择"返回"。
fn select_record(inspector: &mut Inspector, theme: &ColorfulTheme, locale: &str) -> Result<()> {
    let prompt_failed = t!("prompt_failed", locale = locale).to_string();
    let visible_ids: Vec<String> = inspector.visible().iter().map(|r| r.id.clone()).collect();

    if visible_ids.is_empty() {
        println!("{}", t!("no_matching_results", locale = locale).dimmed());
        return Ok(());
    }

    let labels: Vec<String> = inspector
        .visible()
        .iter()
        .map(|r| format!("{:<10} {:<7} {} ({})", r.id, r.method, r.endpoint, r.status_str(locale)))
        .collect();
    let picked = Select::with_theme(theme)
        .with_prompt(t!("prompt_record", locale = locale))
        .items(&labels)
        .default(0)
        .interact()
        .context(prompt_failed.clone())?;
    inspector.select_by_id(&visible_ids[picked])?;

    let tabs = [
        t!("tab_request", locale = locale).to_string(),
        t!("tab_response", locale = locale).to_string(),
        t!("menu_back", locale = locale).to_string(),
    ];
    loop {
        if let (Some(record), Some(view)) = (inspector.selected_record(), inspector.detail()) {
            print_detail(record, &view, locale);
        }

        let current = match inspector.state().tab {
            DetailTab::Request => 0,
            DetailTab::Response => 1,
        };
        let picked = Select::with_theme(theme)
            .with_prompt(t!("prompt_tab", locale = locale))
            .items(&tabs)
            .default(current)
            .interact()
            .context(prompt_failed.clone())?;

        match picked {
            0 => inspector.apply(|state| state.show_tab(DetailTab::Request)),
            1 => inspector.apply(|state| state.show_tab(DetailTab::Response)),
            _ => {
                inspector.apply(|state| state.close_detail());
                return Ok(());
            }
        }
    }
}
