//! # Inspector Module / 检查器模块
//!
//! Binds a read-only record collection to the interactive state of the dashboard:
//! the active filter criteria, the selected record, and which detail sub-view is
//! shown. State changes are pure: each action returns a new `InspectorState`.
//!
//! 将只读记录集合与仪表盘的交互状态绑定：当前过滤条件、选中的记录以及显示的详情子视图。
//! 状态变化是纯函数式的：每个操作都返回一个新的 `InspectorState`。

use anyhow::{Result, bail};
use std::collections::HashSet;
use std::fmt;

use crate::core::filter::FilterCriteria;
use crate::core::models::{Method, Payload, TestResult};
use crate::core::stats::Summary;

/// The two sub-views of the detail panel.
/// 详情面板的两个子视图。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Request,
    Response,
}

impl DetailTab {
    pub fn toggled(self) -> Self {
        match self {
            DetailTab::Request => DetailTab::Response,
            DetailTab::Response => DetailTab::Request,
        }
    }
}

/// Filter state plus selection state. Never mutated in place.
/// 过滤状态加选择状态。永远不会原地修改。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectorState {
    pub criteria: FilterCriteria,
    /// Id of the selected record / 选中记录的 id
    pub selected: Option<String>,
    pub detail_open: bool,
    pub tab: DetailTab,
}

impl InspectorState {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    pub fn with_criteria(&self, criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..self.clone()
        }
    }

    /// Marks the record as selected and opens its detail view on the request tab.
    /// 将记录标记为选中，并在请求标签页上打开其详情视图。
    pub fn select(&self, result: &TestResult) -> Self {
        Self {
            selected: Some(result.id.clone()),
            detail_open: true,
            tab: DetailTab::Request,
            ..self.clone()
        }
    }

    pub fn close_detail(&self) -> Self {
        Self {
            detail_open: false,
            ..self.clone()
        }
    }

    pub fn show_tab(&self, tab: DetailTab) -> Self {
        Self {
            tab,
            ..self.clone()
        }
    }

    pub fn toggle_tab(&self) -> Self {
        self.show_tab(self.tab.toggled())
    }
}

/// One entry of the method filter control.
/// 方法过滤控件中的一项。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodOption {
    /// Accept every method / 接受所有方法
    All,
    Only(Method),
}

impl MethodOption {
    /// The method this option restricts to, `None` for `All`.
    pub fn as_filter(&self) -> Option<Method> {
        match self {
            MethodOption::All => None,
            MethodOption::Only(method) => Some(method.clone()),
        }
    }
}

impl fmt::Display for MethodOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodOption::All => f.write_str("ALL"),
            MethodOption::Only(method) => write!(f, "{}", method),
        }
    }
}

/// What the detail panel currently renders.
/// 详情面板当前渲染的内容。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    Request(&'a Payload),
    Response(&'a Payload),
    /// The response tab of a record that has no response (pending).
    /// 没有响应（pending）的记录的响应标签页。
    NoResponseData,
}

/// A record collection together with the current interactive state.
/// 记录集合及当前交互状态。
#[derive(Debug, Clone)]
pub struct Inspector {
    results: Vec<TestResult>,
    state: InspectorState,
}

impl Inspector {
    pub fn new(results: Vec<TestResult>) -> Self {
        Self::with_state(results, InspectorState::default())
    }

    pub fn with_state(results: Vec<TestResult>, state: InspectorState) -> Self {
        Self { results, state }
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn state(&self) -> &InspectorState {
        &self.state
    }

    /// Replaces the state with the outcome of a transition.
    /// 用状态变换的结果替换当前状态。
    pub fn apply(&mut self, transition: impl FnOnce(&InspectorState) -> InspectorState) {
        self.state = transition(&self.state);
    }

    /// Records passing the current criteria, in source order.
    /// 满足当前条件的记录，按源顺序排列。
    pub fn visible(&self) -> Vec<&TestResult> {
        self.state.criteria.apply(&self.results)
    }

    /// Statistics over the full collection, independent of the criteria.
    /// 基于完整集合的统计，与过滤条件无关。
    pub fn summary(&self) -> Summary {
        Summary::from_results(&self.results)
    }

    /// `All` followed by every distinct method in first-occurrence order.
    /// `All` 后跟按首次出现顺序排列的所有不同方法。
    pub fn method_options(&self) -> Vec<MethodOption> {
        let mut seen = HashSet::new();
        std::iter::once(MethodOption::All)
            .chain(
                self.results
                    .iter()
                    .filter(|r| seen.insert(r.method.clone()))
                    .map(|r| MethodOption::Only(r.method.clone())),
            )
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.id == id)
    }

    pub fn select_by_id(&mut self, id: &str) -> Result<()> {
        let Some(result) = self.find(id) else {
            bail!("no test result with id '{}'", id);
        };
        self.state = self.state.select(result);
        Ok(())
    }

    pub fn selected_record(&self) -> Option<&TestResult> {
        self.state.selected.as_deref().and_then(|id| self.find(id))
    }

    /// The current detail sub-view, or `None` while the panel is closed.
    /// 当前的详情子视图；面板关闭时为 `None`。
    pub fn detail(&self) -> Option<DetailView<'_>> {
        if !self.state.detail_open {
            return None;
        }
        self.selected_record()
            .map(|record| detail_view(record, self.state.tab))
    }
}

/// Picks the payload shown for a record on the given tab.
pub fn detail_view(record: &TestResult, tab: DetailTab) -> DetailView<'_> {
    match tab {
        DetailTab::Request => DetailView::Request(&record.request_payload),
        DetailTab::Response => match (&record.response_payload, record.is_pending()) {
            (Some(payload), false) => DetailView::Response(payload),
            _ => DetailView::NoResponseData,
        },
    }
}
