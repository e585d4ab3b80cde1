//! # Summary Statistics Module / 汇总统计模块
//!
//! Display statistics over the full record collection. The filtered view never
//! feeds into these numbers.
//!
//! 基于完整记录集合的展示统计。过滤后的视图不参与这些数值的计算。

use serde::Serialize;

use crate::core::models::{Status, TestResult};

/// The four headline numbers of the dashboard, plus the pending count.
/// 仪表盘的四个核心数值，以及 pending 数量。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    /// Mean response time in ms over records that have one. `None` when no record does.
    /// 有响应时间的记录的平均响应时间（毫秒）。若没有任何记录有响应时间则为 `None`。
    pub average_response_time: Option<f64>,
}

impl Summary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let count = |status: Status| results.iter().filter(|r| r.status == status).count();

        Self {
            total: results.len(),
            passed: count(Status::Passed),
            failed: count(Status::Failed),
            pending: count(Status::Pending),
            average_response_time: average_response_time(results),
        }
    }

    /// Share of passed records in the collection, `None` for an empty collection.
    pub fn pass_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.passed as f64 / self.total as f64)
    }

    /// Formats the average with the given number of decimals, `N/A` when unavailable.
    pub fn format_average(&self, precision: usize) -> String {
        self.average_response_time
            .map(|avg| format!("{:.*}ms", precision, avg))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Arithmetic mean of the present response times. Pending records are left out of
/// both the sum and the count.
///
/// 现有响应时间的算术平均值。pending 记录既不计入总和也不计入数量。
pub fn average_response_time(results: &[TestResult]) -> Option<f64> {
    let (sum, count) = results
        .iter()
        .filter_map(|r| r.response_time)
        .fold((0u128, 0usize), |(sum, count), ms| (sum + u128::from(ms), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
