//! # List Command Module / 列表命令模块
//!
//! Prints the summary and the records passing the active criteria.
//!
//! 打印汇总信息以及满足当前过滤条件的记录。

use anyhow::Result;
use colored::*;

use crate::cli::commands::Session;
use crate::reporting::console::describe_criteria;
use crate::reporting::{export_json, print_results, print_summary};

/// Executes the list command.
///
/// # Arguments
/// * `session` - Loaded results and criteria
/// * `json` - Print the visible records as JSON instead of a table
pub fn execute(session: &Session, json: bool) -> Result<()> {
    let inspector = &session.inspector;
    let visible = inspector.visible();

    if json {
        println!("{}", export_json(&visible)?);
        return Ok(());
    }

    print_summary(&inspector.summary(), session.precision(), &session.locale);
    println!(
        "\n{}",
        describe_criteria(&inspector.state().criteria, &session.locale).cyan()
    );
    print_results(&visible, &session.locale);
    Ok(())
}
