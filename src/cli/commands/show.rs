//! # Show Command Module / 详情命令模块
//!
//! Selects one record by id and prints its request or response sub-view.
//!
//! 按 id 选中一条记录，并打印其请求或响应子视图。

use anyhow::{Context, Result};

use crate::cli::commands::Session;
use crate::core::inspector::DetailTab;
use crate::infra::t;
use crate::reporting::print_detail;

/// Executes the show command.
///
/// # Arguments
/// * `session` - Loaded results
/// * `id` - Id of the record to inspect
/// * `response` - Show the response sub-view instead of the request
pub fn execute(session: &mut Session, id: &str, response: bool) -> Result<()> {
    let locale = session.locale.clone();
    let inspector = &mut session.inspector;

    inspector
        .select_by_id(id)
        .with_context(|| t!("record_not_found", locale = &locale, id = id))?;
    if response {
        inspector.apply(|state| state.show_tab(DetailTab::Response));
    }

    if let (Some(record), Some(view)) = (inspector.selected_record(), inspector.detail()) {
        print_detail(record, &view, &locale);
    }
    Ok(())
}
