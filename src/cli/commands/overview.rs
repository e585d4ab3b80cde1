//! # Overview Commands Module / 概览命令模块
//!
//! `stats` and `methods`: views over the full collection that ignore the filters.
//!
//! `stats` 与 `methods`：忽略过滤条件、基于完整集合的视图。

use crate::cli::commands::Session;
use crate::reporting::{print_method_options, print_summary};

pub fn execute_stats(session: &Session) {
    print_summary(
        &session.inspector.summary(),
        session.precision(),
        &session.locale,
    );
}

pub fn execute_methods(session: &Session) {
    print_method_options(&session.inspector.method_options(), &session.locale);
}
