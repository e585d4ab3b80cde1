//! # Report Command Module / 报告命令模块
//!
//! Writes the HTML dashboard for the active criteria.
//!
//! 为当前过滤条件生成 HTML 仪表盘。

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::cli::commands::Session;
use crate::infra::t;
use crate::reporting::generate_html_report;

pub fn execute(session: &Session, output_path: &Path) -> Result<()> {
    println!(
        "{}",
        t!("generating_html_report", locale = &session.locale, path = output_path.display())
    );
    generate_html_report(
        &session.inspector,
        output_path,
        session.precision(),
        &session.locale,
    )?;
    println!(
        "{}",
        t!("html_report_written", locale = &session.locale, path = output_path.display()).green()
    );
    Ok(())
}
